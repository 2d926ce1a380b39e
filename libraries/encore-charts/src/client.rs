//! Charts service client.

use crate::error::{ChartsError, Result};
use crate::types::{
    ApiErrorBody, ArtistChartEnvelope, ArtistInfo, ArtistInfoEnvelope, ChartArtist, ChartKind,
    ChartTrack, ChartsConfig, TrackChartEnvelope,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for chart and artist lookups against an audioscrobbler-style API.
///
/// # Example
///
/// ```ignore
/// use encore_charts::{ChartsClient, ChartsConfig};
///
/// let client = ChartsClient::new(ChartsConfig::new("api-key"))?;
/// let artists = client.top_artists(10).await?;
/// for artist in artists {
///     println!("{}", artist.name);
/// }
/// ```
pub struct ChartsClient {
    http: Client,
    config: ChartsConfig,
}

impl ChartsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ChartsConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ChartsError::InvalidUrl("URL cannot be empty".into()));
        }
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if url::Url::parse(&base_url).is_err()
            || !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            return Err(ChartsError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Encore/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ChartsError::Request)?;

        Ok(Self {
            http,
            config: ChartsConfig {
                base_url,
                api_key: config.api_key,
            },
        })
    }

    /// The normalized service base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ===== Charts =====

    /// Fetch the global top artists chart.
    pub async fn top_artists(&self, limit: u32) -> Result<Vec<ChartArtist>> {
        self.artist_chart(ChartKind::TopArtists, limit).await
    }

    /// Fetch the trending (hyped) artists chart.
    pub async fn hyped_artists(&self, limit: u32) -> Result<Vec<ChartArtist>> {
        self.artist_chart(ChartKind::HypedArtists, limit).await
    }

    /// Fetch the global top tracks chart.
    pub async fn top_tracks(&self, limit: u32) -> Result<Vec<ChartTrack>> {
        self.track_chart(ChartKind::TopTracks, limit).await
    }

    /// Fetch the trending (hyped) tracks chart.
    pub async fn hyped_tracks(&self, limit: u32) -> Result<Vec<ChartTrack>> {
        self.track_chart(ChartKind::HypedTracks, limit).await
    }

    async fn artist_chart(&self, kind: ChartKind, limit: u32) -> Result<Vec<ChartArtist>> {
        let limit = limit.to_string();
        let envelope: ArtistChartEnvelope =
            self.get(kind.method(), &[("limit", limit.as_str())]).await?;
        debug!(
            method = kind.method(),
            entries = envelope.artists.entries.len(),
            "fetched artist chart"
        );
        Ok(envelope.artists.entries)
    }

    async fn track_chart(&self, kind: ChartKind, limit: u32) -> Result<Vec<ChartTrack>> {
        let limit = limit.to_string();
        let envelope: TrackChartEnvelope =
            self.get(kind.method(), &[("limit", limit.as_str())]).await?;
        debug!(
            method = kind.method(),
            entries = envelope.tracks.entries.len(),
            "fetched track chart"
        );
        Ok(envelope.tracks.entries)
    }

    // ===== Artists =====

    /// Fetch detailed information for an artist by name.
    pub async fn artist_info(&self, name: &str) -> Result<ArtistInfo> {
        let envelope: ArtistInfoEnvelope =
            self.get("artist.getInfo", &[("artist", name)]).await?;
        debug!(artist = %envelope.artist.name, "fetched artist info");
        Ok(envelope.artist)
    }

    // ===== Transport =====

    /// Issue a GET for `method` and decode the enveloped payload.
    ///
    /// The service reports most failures in-band with HTTP 200 and an
    /// `{"error", "message"}` body, so the error shape is tried before the
    /// payload shape.
    async fn get<T: DeserializeOwned>(&self, method: &str, extra: &[(&str, &str)]) -> Result<T> {
        let mut query: Vec<(&str, &str)> = vec![
            ("method", method),
            ("api_key", &self.config.api_key),
            ("format", "json"),
        ];
        query.extend_from_slice(extra);

        debug!(method, url = %self.config.base_url, "charts request");
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if let Ok(err) = serde_json::from_str::<ApiErrorBody>(&body) {
            return Err(ChartsError::Api {
                code: err.error,
                message: err.message,
            });
        }
        if !status.is_success() {
            return Err(ChartsError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ChartsError::Parse(format!("{method} response: {e}")))
    }
}
