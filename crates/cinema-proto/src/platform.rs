//! Where jwcinema keeps its config file and its log.

use std::path::PathBuf;

const APP_DIR: &str = "jwcinema";

/// Directory for `jwcinema.log`.
pub fn data_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".local/share")
            .join(APP_DIR)
    }
    #[cfg(windows)]
    {
        if let Some(dir) = portable_dir().map(|d| d.join("data")).filter(|d| d.exists()) {
            return dir;
        }
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

/// Directory holding `config.toml`.
pub fn config_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_DIR)
    }
    #[cfg(windows)]
    {
        if let Some(dir) = portable_dir().filter(|d| d.join("config.toml").exists()) {
            return dir;
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

/// The executable's own directory; used when jwcinema is unpacked from a zip.
#[cfg(windows)]
fn portable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(PathBuf::from)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_unix_dirs_are_namespaced() {
        assert!(data_dir().ends_with(".local/share/jwcinema"));
        assert!(config_dir().ends_with(".config/jwcinema"));
    }
}
