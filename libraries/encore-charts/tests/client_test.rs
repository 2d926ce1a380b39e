//! Tests for the charts client against a mock HTTP service.

use encore_charts::{ChartsClient, ChartsConfig, ChartsError};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ChartsClient {
    ChartsClient::new(ChartsConfig::with_base_url(server.uri(), "test-key"))
        .expect("valid mock url")
}

// =============================================================================
// Chart Fetching
// =============================================================================

#[tokio::test]
async fn top_artists_parses_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("method", "chart.getTopArtists"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "artists": {
                "artist": [
                    {
                        "name": "Nova",
                        "playcount": "1200300",
                        "listeners": "45000",
                        "url": "https://charts.example/artist/nova"
                    },
                    {"name": "Meridian"}
                ]
            }
        })))
        .mount(&server)
        .await;

    let artists = client_for(&server).top_artists(2).await.unwrap();

    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0].name, "Nova");
    assert_eq!(artists[0].playcount.as_deref(), Some("1200300"));
    assert_eq!(artists[1].name, "Meridian");
    assert!(artists[1].listeners.is_none());
}

#[tokio::test]
async fn hyped_artists_uses_its_own_wire_method() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("method", "chart.getHypedArtists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "artists": {"artist": [{"name": "Riser"}]}
        })))
        .mount(&server)
        .await;

    let artists = client_for(&server).hyped_artists(10).await.unwrap();
    assert_eq!(artists[0].name, "Riser");
}

#[tokio::test]
async fn top_tracks_parses_nested_artist() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("method", "chart.getTopTracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tracks": {
                "track": [
                    {
                        "name": "Afterglow",
                        "duration": "214",
                        "playcount": "98765",
                        "artist": {"name": "Nova", "url": "https://charts.example/artist/nova"}
                    }
                ]
            }
        })))
        .mount(&server)
        .await;

    let tracks = client_for(&server).top_tracks(1).await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "Afterglow");
    assert_eq!(tracks[0].artist.name, "Nova");
    assert_eq!(tracks[0].duration.as_deref(), Some("214"));
}

#[tokio::test]
async fn hyped_tracks_tolerates_empty_chart() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("method", "chart.getHypedTracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tracks": {"track": []}
        })))
        .mount(&server)
        .await;

    let tracks = client_for(&server).hyped_tracks(50).await.unwrap();
    assert!(tracks.is_empty());
}

// =============================================================================
// Artist Info
// =============================================================================

#[tokio::test]
async fn artist_info_parses_stats_and_bio() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("method", "artist.getInfo"))
        .and(query_param("artist", "Nova"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "artist": {
                "name": "Nova",
                "url": "https://charts.example/artist/nova",
                "stats": {"listeners": "45000", "playcount": "1200300"},
                "bio": {"summary": "An artist.", "content": "An artist. Full text."}
            }
        })))
        .mount(&server)
        .await;

    let info = client_for(&server).artist_info("Nova").await.unwrap();

    assert_eq!(info.name, "Nova");
    assert_eq!(info.stats.listeners.as_deref(), Some("45000"));
    assert_eq!(info.bio.summary.as_deref(), Some("An artist."));
}

#[tokio::test]
async fn artist_info_tolerates_missing_sections() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("method", "artist.getInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "artist": {"name": "Obscure"}
        })))
        .mount(&server)
        .await;

    let info = client_for(&server).artist_info("Obscure").await.unwrap();

    assert_eq!(info.name, "Obscure");
    assert!(info.stats.listeners.is_none());
    assert!(info.bio.summary.is_none());
}

// =============================================================================
// Error Handling
// =============================================================================

#[tokio::test]
async fn in_band_api_error_is_surfaced() {
    let server = MockServer::start().await;

    // The service reports API errors with HTTP 200
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": 10,
            "message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).top_artists(5).await.unwrap_err();

    match err {
        ChartsError::Api { code, message } => {
            assert_eq!(code, 10);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).top_tracks(5).await.unwrap_err();

    match err {
        ChartsError::Status { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).artist_info("Nova").await.unwrap_err();
    assert!(matches!(err, ChartsError::Parse(_)));
}

#[tokio::test]
async fn invalid_base_url_is_rejected_up_front() {
    let result = ChartsClient::new(ChartsConfig::with_base_url("not-a-url", "k"));
    assert!(matches!(result, Err(ChartsError::InvalidUrl(_))));
}
