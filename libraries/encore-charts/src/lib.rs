//! Encore Charts Client
//!
//! HTTP client library for audioscrobbler-style chart and artist data.
//!
//! # Features
//!
//! - **Charts**: global top and trending (hyped) artists and tracks
//! - **Artists**: detailed artist information with stats and biography
//!
//! # Example
//!
//! ```ignore
//! use encore_charts::{ChartsClient, ChartsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChartsClient::new(ChartsConfig::new("api-key"))?;
//!
//!     let artists = client.hyped_artists(25).await?;
//!     for artist in &artists {
//!         println!("{}", artist.name);
//!     }
//!
//!     let info = client.artist_info(&artists[0].name).await?;
//!     println!("{:?}", info.stats.listeners);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::ChartsClient;
pub use error::{ChartsError, Result};
pub use types::{
    ArtistBio, ArtistInfo, ArtistStats, ChartArtist, ChartKind, ChartTrack, ChartsConfig,
    TrackArtist, DEFAULT_BASE_URL,
};
