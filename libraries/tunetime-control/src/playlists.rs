//! Playlist orchestration
//!
//! Creates favorites playlists on the player backend and records them with
//! the remote service.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tunetime_core::error::Result;

use crate::traits::{PlayerCommands, PlaylistRegistry};

/// Which favorites collection a playlist was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoritesScope {
    /// The user's own weekly top tracks
    User,

    /// The global top tracks across all users
    Global,
}

/// A favorite track as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteTrack {
    /// Playable URI on the player backend
    pub uri: String,

    /// Track display name
    pub name: String,

    /// Artist name
    pub artist: String,
}

/// Create a playlist from a favorites collection.
///
/// Creates the playlist on the player backend, registers its id with the
/// remote service, then adds the favorite tracks. An empty favorites list is
/// a no-op and returns `None`. Registration failure is logged and does not
/// block adding the tracks; the playlist already exists on the backend at
/// that point.
///
/// # Errors
/// Returns an error if playlist creation or track addition fails
pub async fn create_favorites_playlist<P, R>(
    commands: &P,
    registry: &R,
    scope: FavoritesScope,
    name: &str,
    favorites: &[FavoriteTrack],
) -> Result<Option<String>>
where
    P: PlayerCommands,
    R: PlaylistRegistry,
{
    if favorites.is_empty() {
        info!(?scope, "no favorites available; skipping playlist creation");
        return Ok(None);
    }

    let playlist_id = commands.create_playlist(name, true).await?;
    info!(%playlist_id, %name, "created playlist");

    if let Err(err) = registry.register_playlist(&playlist_id, scope, name).await {
        warn!(error = %err, %playlist_id, "playlist registration failed");
    }

    let uris: Vec<String> = favorites.iter().map(|track| track.uri.clone()).collect();
    commands.add_tracks_to_playlist(&playlist_id, &uris).await?;
    info!(%playlist_id, count = uris.len(), "added favorites to playlist");

    Ok(Some(playlist_id))
}
