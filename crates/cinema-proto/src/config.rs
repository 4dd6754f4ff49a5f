use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::platform;

pub const ENV_BASE_URL: &str = "JWPLAYER_BASE_URL";
pub const ENV_API_TOKEN: &str = "JWPLAYER_API_TOKEN";
pub const ENV_PLAYLISTS: &str = "JWPLAYER_PLAYLISTS";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub jwplayer: JwPlayerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where shelves come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwPlayerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Shelf descriptor, e.g. `"Spotlight:abc123,Relax:def456"`.
    /// Unset means the built-in demo shelves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlists: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Width of one poster card, in terminal columns.
    #[serde(default = "default_card_width")]
    pub card_width: u16,
}

impl Default for JwPlayerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            playlists: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            tagline: default_tagline(),
            card_width: default_card_width(),
        }
    }
}

fn default_base_url() -> String {
    "https://cdn.jwplayer.com".to_string()
}

fn default_brand() -> String {
    "JW Cinema".to_string()
}

fn default_tagline() -> String {
    "JW Player powered shelves, tuned for living room speed.".to_string()
}

fn default_card_width() -> u16 {
    26
}

impl Config {
    /// Load from the user config file, writing defaults on first run.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }

    /// Apply `JWPLAYER_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = get(ENV_BASE_URL) {
            self.jwplayer.base_url = base_url;
        }
        if let Some(token) = get(ENV_API_TOKEN) {
            self.jwplayer.api_token = Some(token);
        }
        if let Some(playlists) = get(ENV_PLAYLISTS) {
            self.jwplayer.playlists = Some(playlists);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.jwplayer.base_url, "https://cdn.jwplayer.com");
        assert!(config.jwplayer.api_token.is_none());
        assert!(config.jwplayer.playlists.is_none());
        assert_eq!(config.ui.card_width, 26);
        assert!(Config::config_path().ends_with("jwcinema/config.toml"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [jwplayer]
            playlists = "Spotlight:abc123"
            "#,
        )
        .unwrap();
        assert_eq!(config.jwplayer.base_url, "https://cdn.jwplayer.com");
        assert_eq!(config.jwplayer.playlists.as_deref(), Some("Spotlight:abc123"));
        assert_eq!(config.ui.brand, "JW Cinema");
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            (ENV_BASE_URL, "http://127.0.0.1:9000"),
            (ENV_API_TOKEN, "secret"),
            (ENV_PLAYLISTS, "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.jwplayer.playlists = Some("Relax:relax1".to_string());
        let config = config.with_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.jwplayer.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.jwplayer.api_token.as_deref(), Some("secret"));
        // blank override leaves the file value alone
        assert_eq!(config.jwplayer.playlists.as_deref(), Some("Relax:relax1"));
    }

    #[test]
    fn test_save_round_trip_omits_unset_token() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!text.contains("api_token"));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.ui.tagline, Config::default().ui.tagline);
    }
}
