//! Core error types for Tune Time
use thiserror::Error;

/// Result type alias using `TuneError`
pub type Result<T> = std::result::Result<T, TuneError>;

/// Core error type for Tune Time
#[derive(Error, Debug)]
pub enum TuneError {
    /// Errors reported by a player-control backend
    #[error("Player error: {0}")]
    Player(String),

    /// Device enumeration errors
    #[error("Device error: {0}")]
    Device(String),

    /// Playlist operation errors
    #[error("Playlist error: {0}")]
    Playlist(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl TuneError {
    /// Create a player error
    pub fn player(msg: impl Into<String>) -> Self {
        Self::Player(msg.into())
    }

    /// Create a device error
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }

    /// Create a playlist error
    pub fn playlist(msg: impl Into<String>) -> Self {
        Self::Playlist(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
