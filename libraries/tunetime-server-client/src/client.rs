//! Main Tune Time backend client.

use crate::error::{Result, ServerClientError};
use crate::types::{LikedPayload, PlaylistType, SavePlaylistRequest, ServerConfig};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use tunetime_core::types::TrackSnapshot;

/// Placeholder dashboard content when the backend has nothing to report.
pub const NO_DASHBOARD_DATA: &str = "TUNE TIME\n\nNo data available\n";

/// Client for the Tune Time metrics and playlist backend.
///
/// Handles liked-track updates, playlist registration, and the metrics
/// dashboard fetch.
///
/// # Example
///
/// ```ignore
/// use tunetime_server_client::{ServerConfig, TuneServerClient};
///
/// let config = ServerConfig::with_token("https://api.tunetime.example.com", jwt);
/// let client = TuneServerClient::new(config)?;
///
/// let dashboard = client.fetch_dashboard().await?;
/// println!("{dashboard}");
/// ```
pub struct TuneServerClient {
    http: Client,
    config: ServerConfig,
}

impl TuneServerClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    /// Returns an error if the URL is empty or not http(s)
    pub fn new(config: ServerConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = ServerConfig {
            url,
            jwt: config.jwt,
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("TuneTime/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// Get the backend URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Check if the client has a JWT.
    pub fn is_authenticated(&self) -> bool {
        self.config.jwt.is_some()
    }

    /// Update the liked state of a track.
    ///
    /// The backend keys liked records on the bare track id (namespace
    /// stripped) and the surface's catalog tag, with name and artist passed
    /// along since the snapshot already carries them.
    ///
    /// # Errors
    /// Returns an error if the request fails or the server rejects it
    pub async fn set_liked(&self, track: &TrackSnapshot, liked: bool) -> Result<()> {
        let url = format!(
            "{}/music/liked/track/{}/type/{}",
            self.config.url,
            track.normalized_id(),
            track.player.backend_tag(),
        );

        debug!(track_id = track.normalized_id(), liked, "updating liked state");

        let request = self
            .authorized(self.http.put(&url))
            .query(&[("name", track.name.as_str()), ("artist", track.artist.as_str())])
            .json(&LikedPayload { liked });

        let response = request.send().await.map_err(map_transport_error)?;
        Self::check_status(response).await?;

        info!(track_id = track.normalized_id(), liked, "liked state updated");
        Ok(())
    }

    /// Register a playlist created on the player backend.
    ///
    /// # Errors
    /// Returns an error if the request fails or the server rejects it
    pub async fn save_playlist(
        &self,
        playlist_id: &str,
        playlist_type: PlaylistType,
        name: &str,
    ) -> Result<()> {
        let url = format!("{}/music/playlist", self.config.url);
        let payload = SavePlaylistRequest {
            playlist_id: playlist_id.to_string(),
            playlist_type_id: playlist_type.type_id(),
            name: name.to_string(),
        };

        debug!(playlist_id, name, "registering playlist");

        let response = self
            .authorized(self.http.post(&url))
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::check_status(response).await?;

        info!(playlist_id, "playlist registered");
        Ok(())
    }

    /// Fetch the metrics dashboard content.
    ///
    /// An empty body degrades to the "no data" placeholder, not an error.
    ///
    /// # Errors
    /// Returns an error if the request fails or the server rejects it
    pub async fn fetch_dashboard(&self) -> Result<String> {
        let url = format!("{}/dashboard", self.config.url);

        let response = self
            .authorized(self.http.get(&url))
            .query(&[("plugin", "music-time")])
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = Self::check_status(response).await?;
        let content = response
            .text()
            .await
            .map_err(|e| ServerClientError::ParseError(e.to_string()))?;

        if content.is_empty() {
            Ok(NO_DASHBOARD_DATA.to_string())
        } else {
            Ok(content)
        }
    }

    /// Fetch the dashboard, absorbing any failure into the placeholder.
    ///
    /// Keeps the dashboard view responsive when the backend is offline.
    pub async fn dashboard_or_placeholder(&self) -> String {
        match self.fetch_dashboard().await {
            Ok(content) => content,
            Err(err) => {
                warn!(error = %err, "dashboard fetch failed; showing placeholder");
                NO_DASHBOARD_DATA.to_string()
            }
        }
    }

    /// Attach the JWT, when one is configured.
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.jwt {
            Some(jwt) => request.bearer_auth(jwt),
            None => request,
        }
    }

    /// Map a non-success status to `ServerError`.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Connect and timeout failures mean the server is unreachable; everything
/// else stays a plain request error.
fn map_transport_error(err: reqwest::Error) -> ServerClientError {
    if err.is_connect() || err.is_timeout() {
        ServerClientError::ServerUnreachable(err.to_string())
    } else {
        ServerClientError::Request(err)
    }
}
