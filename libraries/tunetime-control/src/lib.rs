//! Tune Time - Player Routing and Control
//!
//! Platform-agnostic routing of playback actions for Tune Time.
//!
//! This crate provides:
//! - Player resolution (which surface gets the next command)
//! - Transport dispatch (play, pause, next, previous) with a single
//!   dispatch point per resolved target
//! - Track launch with the single-device desktop disambiguation
//! - Favorites playlist orchestration
//!
//! # Architecture
//!
//! `tunetime-control` never talks to a player backend directly:
//! - No dependency on any music-control library
//! - No dependency on an editor or UI toolkit
//! - No dependency on the HTTP backend
//!
//! Everything environment-specific is provided via traits and injected at
//! construction time, making the routing logic independently testable.
//!
//! # Example
//!
//! ```rust,no_run
//! use tunetime_control::{MusicController, PlayerResolver};
//! use tunetime_control::traits::{ControlSync, DeviceEnumerator, PlayerCommands, TrackQuery};
//! use tunetime_core::types::TransportCommand;
//!
//! # async fn example<T, D, P, S>(tracks: T, devices: D, commands: P, sync: S)
//! # -> tunetime_core::Result<()>
//! # where T: TrackQuery, D: DeviceEnumerator, P: PlayerCommands, S: ControlSync {
//! let resolver = PlayerResolver::new(tracks, devices);
//! let controller = MusicController::new(resolver, commands, sync);
//!
//! // Dispatches to whatever surface currently reports a track;
//! // silent no-op when nothing is playing.
//! controller.transport(TransportCommand::Next).await?;
//!
//! // Launch the current player, preferring the desktop app when a lone
//! // non-web device is connected.
//! controller.launch_track(false).await?;
//! # Ok(())
//! # }
//! ```

mod controller;
pub mod playlists;
mod resolver;
pub mod traits;

// Public exports
pub use controller::MusicController;
pub use playlists::{create_favorites_playlist, FavoriteTrack, FavoritesScope};
pub use resolver::PlayerResolver;
pub use traits::{ControlSync, DeviceEnumerator, PlayerCommands, PlaylistRegistry, TrackQuery};
