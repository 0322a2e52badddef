//! Track snapshot type

use crate::types::PlayerKind;
use serde::{Deserialize, Serialize};

/// A point-in-time description of the currently playing or paused track.
///
/// Reported by whichever playback surface currently owns the track.
/// Snapshots are refreshed from the player backend on every query; they
/// carry no liveness guarantee beyond the moment they were taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    /// Opaque track identifier.
    ///
    /// May be a colon-namespaced URI (e.g. `spotify:track:<id>`) where only
    /// the trailing segment is the track id proper.
    pub id: String,

    /// Track display name
    pub name: String,

    /// Artist name
    pub artist: String,

    /// The playback surface that reported this track
    pub player: PlayerKind,
}

impl TrackSnapshot {
    /// Create a new snapshot.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        artist: impl Into<String>,
        player: PlayerKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist: artist.into(),
            player,
        }
    }

    /// The bare track id, with any colon-delimited namespace stripped.
    ///
    /// Spotify reports `spotify:track:<id>` URIs; the remote backend keys
    /// liked-track records on the trailing segment only. Ids without a colon
    /// are returned unchanged, so non-namespaced surfaces are unaffected.
    #[must_use]
    pub fn normalized_id(&self) -> &str {
        match self.id.rfind(':') {
            Some(idx) => &self.id[idx + 1..],
            None => &self.id,
        }
    }
}
