//! JW Player playlist client
//!
//! Resolves the shelf lineup and fills each shelf from the JW Player
//! delivery API. Content degrades in three steps so the page never renders
//! empty:
//!
//! 1. a shelf whose fetch fails (or comes back empty) is kept with no items,
//! 2. every empty shelf is backfilled from the demo catalog by position,
//! 3. if no shelf survives at all, the whole demo catalog is returned.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::{default_resolved_shelves, default_shelves, MediaItem, Shelf, ShelfConfig};
use crate::config::JwPlayerConfig;

/// Items requested per playlist.
pub const PAGE_LIMIT: u32 = 25;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, or body decoding failure.
    #[error("JW Player request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("JW Player request failed with status {0}")]
    Status(StatusCode),
    #[error("playlist {0} has no items")]
    EmptyResult(String),
    #[error("API token is not a valid header value")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

impl FetchError {
    /// Transport and status failures; everything but an empty playlist.
    pub fn is_network_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(_))
    }
}

/// Playlist endpoint response. Only the fields we map are declared.
#[derive(Debug, Deserialize)]
struct PlaylistResponse {
    #[serde(default)]
    playlist: Option<Vec<RemoteMedia>>,
}

#[derive(Debug, Deserialize)]
struct RemoteMedia {
    #[serde(default)]
    mediaid: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    image: Option<String>,
}

impl RemoteMedia {
    fn into_media_item(self, playlist_id: &str) -> MediaItem {
        let image = self.image.unwrap_or_default();
        MediaItem {
            id: self.mediaid,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            duration: self.duration.unwrap_or(0.0),
            poster: image.clone(),
            background: image,
            playlist_id: playlist_id.to_string(),
        }
    }
}

/// Parse a shelf descriptor such as `"Spotlight:spot1, Relax:relax1"`.
///
/// Each entry needs both a title and a playlist id: a bare `id` with no colon,
/// `":id"` and `"Title:"` are all dropped.
pub fn parse_shelf_config(config: Option<&str>) -> Vec<ShelfConfig> {
    let Some(config) = config else {
        return Vec::new();
    };

    config
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let mut parts = entry.split(':').map(str::trim);
            let title = parts.next().unwrap_or_default();
            let playlist_id = parts.next().unwrap_or_default();
            ShelfConfig::new(title, playlist_id)
        })
        .filter(ShelfConfig::is_valid)
        .collect()
}

pub struct PlaylistClient {
    client: reqwest::Client,
    base_url: String,
    playlists: Option<String>,
}

impl PlaylistClient {
    pub fn new(config: &JwPlayerConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = config.api_token.as_deref().filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            playlists: config.playlists.clone(),
        })
    }

    pub fn playlist_url(&self, playlist_id: &str) -> String {
        format!("{}/v2/playlists/{}", self.base_url, playlist_id)
    }

    /// Fetch one playlist. A response without a `playlist` field is an empty
    /// list, not an error.
    pub async fn fetch_playlist(&self, playlist_id: &str) -> Result<Vec<MediaItem>, FetchError> {
        let url = self.playlist_url(playlist_id);
        debug!("GET {}?page_limit={}", url, PAGE_LIMIT);

        let response = self
            .client
            .get(&url)
            .query(&[("page_limit", PAGE_LIMIT)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let data: PlaylistResponse = response.json().await?;
        let items: Vec<MediaItem> = data
            .playlist
            .unwrap_or_default()
            .into_iter()
            .map(|media| media.into_media_item(playlist_id))
            .collect();

        debug!("playlist {}: {} items", playlist_id, items.len());
        Ok(items)
    }

    /// Resolve the lineup and fill every shelf.
    ///
    /// `config` wins when given; otherwise the configured descriptor string
    /// is parsed. An empty lineup falls back to the demo catalog. Shelves are
    /// fetched one at a time and never fail the whole call.
    pub async fn fetch_shelves(&self, config: Option<Vec<ShelfConfig>>) -> Vec<Shelf> {
        let lineup = config.unwrap_or_else(|| parse_shelf_config(self.playlists.as_deref()));
        let lineup = if lineup.is_empty() {
            info!("No shelves configured, using demo lineup");
            default_shelves()
        } else {
            lineup
        };

        let mut shelves = Vec::with_capacity(lineup.len());
        for entry in &lineup {
            if !entry.is_valid() {
                continue;
            }

            let items = match &entry.items {
                Some(items) => items.clone(),
                None => match self.fetch_non_empty(&entry.playlist_id).await {
                    Ok(items) => items,
                    Err(e) => {
                        warn!("Falling back to demo data for {}: {}", entry.title, e);
                        Vec::new()
                    }
                },
            };
            shelves.push(Shelf::from_config(entry, items));
        }

        if shelves.is_empty() {
            return default_resolved_shelves();
        }

        backfill(&mut shelves);
        shelves
    }

    async fn fetch_non_empty(&self, playlist_id: &str) -> Result<Vec<MediaItem>, FetchError> {
        let items = self.fetch_playlist(playlist_id).await?;
        if items.is_empty() {
            return Err(FetchError::EmptyResult(playlist_id.to_string()));
        }
        Ok(items)
    }
}

/// Give every empty shelf the items of demo shelf `index % demo_count`.
///
/// Keyed by position only: two lineups with an empty second shelf both get
/// the second demo shelf, whatever their titles.
fn backfill(shelves: &mut [Shelf]) {
    let defaults = default_resolved_shelves();
    for (index, shelf) in shelves.iter_mut().enumerate() {
        if shelf.items.is_empty() {
            let source = &defaults[index % defaults.len()];
            debug!("Backfilling {} from demo shelf {}", shelf.title, source.title);
            shelf.items = source.items.clone();
        }
    }
}
