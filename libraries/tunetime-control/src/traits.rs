/// Collaborator traits for player routing and control
///
/// The resolver and controller are platform-agnostic; everything that talks
/// to a real player backend, device API, or remote service is injected
/// through these traits. No implicit global instances.
use async_trait::async_trait;
use tunetime_core::error::Result;
use tunetime_core::types::{
    LaunchOptions, PlayerDevice, PlayerKind, TrackSnapshot, TransportCommand,
};

use crate::playlists::FavoritesScope;

/// Query for the currently running track.
#[async_trait]
pub trait TrackQuery: Send + Sync {
    /// The track currently playing or paused, if any surface reports one.
    ///
    /// "Nothing is playing" is `Ok(None)`, a normal result.
    ///
    /// # Errors
    /// Returns an error if the player backend cannot be queried
    async fn running_track(&self) -> Result<Option<TrackSnapshot>>;
}

/// Enumerate currently reachable remote playback devices.
#[async_trait]
pub trait DeviceEnumerator: Send + Sync {
    /// List reachable devices. An empty list is a normal result.
    ///
    /// # Errors
    /// Returns an error if the device API cannot be reached
    async fn devices(&self) -> Result<Vec<PlayerDevice>>;
}

/// Action-dispatch primitives of the player-control backend.
///
/// One uniform transport entry point per the routing design: the resolver
/// picks the target surface once and the command is dispatched against it,
/// whatever the command is.
#[async_trait]
pub trait PlayerCommands: Send + Sync {
    /// Issue a transport command against a surface.
    ///
    /// # Errors
    /// Returns an error if the backend rejects or fails the command
    async fn transport(&self, target: PlayerKind, command: TransportCommand) -> Result<()>;

    /// Launch a surface, optionally selecting a track.
    ///
    /// # Errors
    /// Returns an error if the surface cannot be launched
    async fn launch(&self, target: PlayerKind, options: &LaunchOptions) -> Result<()>;

    /// Create a playlist on the player backend, returning its id.
    ///
    /// # Errors
    /// Returns an error if playlist creation fails
    async fn create_playlist(&self, name: &str, is_public: bool) -> Result<String>;

    /// Add tracks (by URI) to an existing playlist.
    ///
    /// # Errors
    /// Returns an error if the tracks cannot be added
    async fn add_tracks_to_playlist(&self, playlist_id: &str, uris: &[String]) -> Result<()>;
}

/// Control-surface synchronizer.
///
/// Notified after a successful transport dispatch so UI affordances
/// (button state) stay consistent with the new playback state.
#[async_trait]
pub trait ControlSync: Send + Sync {
    /// Refresh control-surface state from the player backend.
    async fn sync_controls(&self);
}

/// Remote registry for playlists created on the player backend.
#[async_trait]
pub trait PlaylistRegistry: Send + Sync {
    /// Record a created playlist with the remote service.
    ///
    /// # Errors
    /// Returns an error if the registration request fails
    async fn register_playlist(
        &self,
        playlist_id: &str,
        scope: FavoritesScope,
        name: &str,
    ) -> Result<()>;
}
