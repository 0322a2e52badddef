/// Player surface types for routing decisions
use serde::{Deserialize, Serialize};

/// A concrete playback surface the system can target.
///
/// Exactly one surface reports the running track at any time (or none,
/// when nothing is playing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    /// Spotify web player (browser tab controlled through the web API)
    SpotifyWeb,

    /// Spotify desktop application
    SpotifyDesktop,

    /// iTunes desktop application
    ItunesDesktop,
}

impl PlayerKind {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpotifyWeb => "spotify_web",
            Self::SpotifyDesktop => "spotify_desktop",
            Self::ItunesDesktop => "itunes_desktop",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "spotify_web" => Some(Self::SpotifyWeb),
            "spotify_desktop" => Some(Self::SpotifyDesktop),
            "itunes_desktop" => Some(Self::ItunesDesktop),
            _ => None,
        }
    }

    /// The desktop variant of this surface.
    ///
    /// Maps the web player to its desktop sibling; surfaces that are
    /// already desktop applications map to themselves.
    #[must_use]
    pub fn desktop_variant(&self) -> Self {
        match self {
            Self::SpotifyWeb | Self::SpotifyDesktop => Self::SpotifyDesktop,
            Self::ItunesDesktop => Self::ItunesDesktop,
        }
    }

    /// The backend tag the remote API uses for this surface's catalog.
    #[must_use]
    pub fn backend_tag(&self) -> &'static str {
        match self {
            Self::SpotifyWeb | Self::SpotifyDesktop => "spotify",
            Self::ItunesDesktop => "itunes",
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transport action to dispatch to a playback surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportCommand {
    /// Start or resume playback
    Play,

    /// Pause playback
    Pause,

    /// Skip to the next track
    Next,

    /// Return to the previous track
    Previous,
}

impl TransportCommand {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

impl std::fmt::Display for TransportCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
