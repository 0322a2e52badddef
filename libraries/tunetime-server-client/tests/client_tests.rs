//! Tests for the Tune Time server client.
//!
//! These use mock servers to verify client behavior without a real backend
//! connection.

use tunetime_control::{FavoritesScope, PlaylistRegistry};
use tunetime_core::types::{PlayerKind, TrackSnapshot};
use tunetime_server_client::{
    PlaylistType, ServerClientError, ServerConfig, TuneServerClient, NO_DASHBOARD_DATA,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TuneServerClient {
    TuneServerClient::new(ServerConfig::with_token(server.uri(), "jwt-123")).expect("valid url")
}

fn spotify_track() -> TrackSnapshot {
    TrackSnapshot::new(
        "spotify:track:4iV5W9uYEdYUVa79Axb7Rh",
        "Harder Better Faster Stronger",
        "Daft Punk",
        PlayerKind::SpotifyWeb,
    )
}

// =============================================================================
// Server Config Tests
// =============================================================================

mod server_config {
    use super::*;

    #[test]
    fn new_with_url() {
        let config = ServerConfig::new("https://example.com");
        assert_eq!(config.url, "https://example.com");
        assert!(config.jwt.is_none());
    }

    #[test]
    fn with_token() {
        let config = ServerConfig::with_token("https://example.com", "jwt-123");
        assert_eq!(config.jwt.as_deref(), Some("jwt-123"));
    }
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn valid_urls_accepted() {
        assert!(TuneServerClient::new(ServerConfig::new("https://example.com")).is_ok());
        assert!(TuneServerClient::new(ServerConfig::new("http://localhost:8080")).is_ok());
    }

    #[test]
    fn empty_url_rejected() {
        let result = TuneServerClient::new(ServerConfig::new(""));
        match result {
            Err(ServerClientError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn non_http_url_rejected() {
        assert!(TuneServerClient::new(ServerConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn trailing_slash_trimmed() {
        let client =
            TuneServerClient::new(ServerConfig::new("https://example.com/")).expect("valid url");
        assert_eq!(client.url(), "https://example.com");
    }
}

// =============================================================================
// Liked Track Tests
// =============================================================================

mod liked {
    use super::*;

    #[tokio::test]
    async fn put_uses_normalized_id_and_backend_tag() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(
                "/music/liked/track/4iV5W9uYEdYUVa79Axb7Rh/type/spotify",
            ))
            .and(query_param("name", "Harder Better Faster Stronger"))
            .and(query_param("artist", "Daft Punk"))
            .and(header("Authorization", "Bearer jwt-123"))
            .and(body_json(serde_json::json!({ "liked": true })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.set_liked(&spotify_track(), true).await.unwrap();
    }

    #[tokio::test]
    async fn itunes_tracks_use_the_itunes_tag() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/music/liked/track/9876/type/itunes"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let track = TrackSnapshot::new("9876", "Song", "Artist", PlayerKind::ItunesDesktop);
        let client = client_for(&server);
        client.set_liked(&track, false).await.unwrap();
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.set_liked(&spotify_track(), true).await;
        match result {
            Err(ServerClientError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            _ => panic!("Expected ServerError"),
        }
    }
}

// =============================================================================
// Playlist Tests
// =============================================================================

mod playlists {
    use super::*;

    #[tokio::test]
    async fn save_playlist_posts_the_numeric_type_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/music/playlist"))
            .and(body_json(serde_json::json!({
                "playlist_id": "pl-123",
                "playlistTypeId": 1,
                "name": "My Coding Favorites",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .save_playlist("pl-123", PlaylistType::TopProductivity, "My Coding Favorites")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn registry_impl_maps_the_scope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/music/playlist"))
            .and(body_json(serde_json::json!({
                "playlist_id": "pl-456",
                "playlistTypeId": 2,
                "name": "Global Top 40",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .register_playlist("pl-456", FavoritesScope::Global, "Global Top 40")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn registry_impl_surfaces_failures() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .register_playlist("pl-456", FavoritesScope::User, "My Coding Favorites")
            .await;
        assert!(result.is_err());
    }
}

// =============================================================================
// Dashboard Tests
// =============================================================================

mod dashboard {
    use super::*;

    #[tokio::test]
    async fn fetches_the_dashboard_content() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .and(query_param("plugin", "music-time"))
            .respond_with(ResponseTemplate::new(200).set_body_string("TUNE TIME\n\nTop artist: X"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let content = client.fetch_dashboard().await.unwrap();
        assert!(content.contains("Top artist"));
    }

    #[tokio::test]
    async fn empty_body_degrades_to_the_placeholder() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.fetch_dashboard().await.unwrap(), NO_DASHBOARD_DATA);
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.fetch_dashboard().await.is_err());
    }

    #[tokio::test]
    async fn placeholder_absorbs_an_unreachable_backend() {
        // Nothing listens on this port
        let client =
            TuneServerClient::new(ServerConfig::new("http://127.0.0.1:9")).expect("valid url");
        assert_eq!(client.dashboard_or_placeholder().await, NO_DASHBOARD_DATA);
    }
}
