mod action;
mod app;
mod components;
mod page;
mod shelf;
mod theme;

use anyhow::Context;
use cinema_proto::config::Config;
use cinema_proto::jwplayer::PlaylistClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = cinema_proto::platform::data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    let log_path = data_dir.join("jwcinema.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // RUST_LOG wins; otherwise debug for us, quiet HTTP client internals.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    eprintln!("jwcinema log: {}", log_path.display());
    tracing::info!("jwcinema starting…");

    // ── Load config ──────────────────────────────────────────────────────────
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default config: {:#}", e);
            Config::default()
        }
    }
    .with_env_overrides();
    tracing::info!(
        "JW Player base {} (token: {}, playlists: {})",
        config.jwplayer.base_url,
        if config.jwplayer.api_token.is_some() { "set" } else { "none" },
        config.jwplayer.playlists.as_deref().unwrap_or("demo lineup"),
    );

    let client = PlaylistClient::new(&config.jwplayer).context("Failed to build JW Player client")?;

    // ── Run TUI ──────────────────────────────────────────────────────────────
    app::App::new(config.ui).run(client).await?;

    Ok(())
}
