//! Tune Time Core
//!
//! Platform-agnostic core types and error handling for Tune Time.
//!
//! This crate provides the foundational building blocks shared by the
//! control and server-client crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PlayerKind`, `TrackSnapshot`, `PlayerDevice`, etc.
//! - **Decision Types**: `RoutingDecision`, `LaunchDecision`
//! - **Error Handling**: Unified `TuneError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunetime_core::types::{PlayerKind, TrackSnapshot};
//!
//! let snapshot = TrackSnapshot::new(
//!     "spotify:track:4iV5W9uYEdYUVa79Axb7Rh",
//!     "Harder Better Faster Stronger",
//!     "Daft Punk",
//!     PlayerKind::SpotifyWeb,
//! );
//!
//! assert_eq!(snapshot.normalized_id(), "4iV5W9uYEdYUVa79Axb7Rh");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TuneError};

// Export all types
pub use types::{
    LaunchDecision, LaunchOptions, PlayerDevice, PlayerKind, RoutingDecision, TrackSnapshot,
    TransportCommand,
};
