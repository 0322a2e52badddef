//! Tune Time Server Client
//!
//! HTTP client library for the Tune Time metrics and playlist backend.
//!
//! # Features
//!
//! - **Liked tracks**: push liked-state changes keyed on normalized track ids
//! - **Playlist registry**: record playlists created on the player backend
//! - **Dashboard**: fetch the metrics dashboard, with an offline placeholder
//!
//! # Example
//!
//! ```ignore
//! use tunetime_server_client::{ServerConfig, TuneServerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::with_token("https://api.tunetime.example.com", jwt);
//!     let client = TuneServerClient::new(config)?;
//!
//!     // Dashboard degrades to a placeholder when the backend is offline.
//!     let dashboard = client.dashboard_or_placeholder().await;
//!     println!("{dashboard}");
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod registry;
mod types;

// Re-export main types
pub use client::{TuneServerClient, NO_DASHBOARD_DATA};
pub use error::{Result, ServerClientError};
pub use types::{LikedPayload, PlaylistType, SavePlaylistRequest, ServerConfig};
