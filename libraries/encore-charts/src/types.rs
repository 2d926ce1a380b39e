//! Request configuration and response types for the charts service.
//!
//! The wire format follows the audioscrobbler 2.0 JSON conventions: every
//! response wraps its payload in a named envelope, and numeric fields are
//! transmitted as strings.

use serde::{Deserialize, Serialize};

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0";

/// Configuration for a [`ChartsClient`](crate::ChartsClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Service base URL
    pub base_url: String,

    /// API key sent with every request
    pub api_key: String,
}

impl ChartsConfig {
    /// Configuration against the default service endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Configuration against a custom endpoint (proxies, tests).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Which chart to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    TopArtists,
    TopTracks,
    HypedArtists,
    HypedTracks,
}

impl ChartKind {
    /// Wire method name for this chart.
    pub fn method(self) -> &'static str {
        match self {
            ChartKind::TopArtists => "chart.getTopArtists",
            ChartKind::TopTracks => "chart.getTopTracks",
            ChartKind::HypedArtists => "chart.getHypedArtists",
            ChartKind::HypedTracks => "chart.getHypedTracks",
        }
    }
}

/// An artist entry in a chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartArtist {
    pub name: String,

    #[serde(default)]
    pub playcount: Option<String>,

    #[serde(default)]
    pub listeners: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

/// The artist a chart track belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,
}

/// A track entry in a chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartTrack {
    pub name: String,

    pub artist: TrackArtist,

    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub playcount: Option<String>,

    #[serde(default)]
    pub listeners: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

/// Listener and play statistics for an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistStats {
    #[serde(default)]
    pub listeners: Option<String>,

    #[serde(default)]
    pub playcount: Option<String>,
}

/// Biography text for an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistBio {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

/// Detailed artist information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistInfo {
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub stats: ArtistStats,

    #[serde(default)]
    pub bio: ArtistBio,
}

// ===== Wire envelopes =====

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistChartEnvelope {
    pub artists: ArtistChartBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistChartBody {
    #[serde(rename = "artist", default)]
    pub entries: Vec<ChartArtist>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackChartEnvelope {
    pub tracks: TrackChartBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackChartBody {
    #[serde(rename = "track", default)]
    pub entries: Vec<ChartTrack>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistInfoEnvelope {
    pub artist: ArtistInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: u32,

    #[serde(default)]
    pub message: String,
}
