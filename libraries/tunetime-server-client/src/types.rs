//! Types for Tune Time backend API requests and responses.

use serde::{Deserialize, Serialize};
use tunetime_control::FavoritesScope;

/// Configuration for connecting to the Tune Time backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the backend (e.g., "https://api.tunetime.example.com")
    pub url: String,
    /// JWT for authenticated requests (if logged in)
    pub jwt: Option<String>,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            jwt: None,
        }
    }

    /// Create a config with an existing JWT.
    pub fn with_token(url: impl Into<String>, jwt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            jwt: Some(jwt.into()),
        }
    }
}

/// Server-side classification of a registered playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistType {
    /// The user's weekly top productivity tracks
    TopProductivity,

    /// The global top tracks across all users
    GlobalTop,
}

impl PlaylistType {
    /// The numeric id the backend keys playlist types on.
    #[must_use]
    pub fn type_id(&self) -> u32 {
        match self {
            Self::TopProductivity => 1,
            Self::GlobalTop => 2,
        }
    }
}

impl From<FavoritesScope> for PlaylistType {
    fn from(scope: FavoritesScope) -> Self {
        match scope {
            FavoritesScope::User => Self::TopProductivity,
            FavoritesScope::Global => Self::GlobalTop,
        }
    }
}

/// Request body for updating a track's liked state.
#[derive(Debug, Serialize)]
pub struct LikedPayload {
    /// New liked state
    pub liked: bool,
}

/// Request body for registering a created playlist.
#[derive(Debug, Serialize)]
pub struct SavePlaylistRequest {
    /// Playlist id assigned by the player backend
    pub playlist_id: String,
    /// Numeric playlist type id
    #[serde(rename = "playlistTypeId")]
    pub playlist_type_id: u32,
    /// Playlist display name
    pub name: String,
}
