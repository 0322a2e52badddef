//! Routing decision types
//!
//! Outputs of the player resolver. Absence of a target is a normal result,
//! not an error; callers treat it as a silent no-op.

use crate::types::PlayerKind;
use serde::{Deserialize, Serialize};

/// Which playback surface a transport command should be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutingDecision {
    /// Dispatch to this surface
    Target(PlayerKind),

    /// Nothing is playing; the command is a no-op
    NoTarget,
}

impl RoutingDecision {
    /// The resolved target, if any.
    #[must_use]
    pub fn target(&self) -> Option<PlayerKind> {
        match self {
            Self::Target(kind) => Some(*kind),
            Self::NoTarget => None,
        }
    }
}

/// Options passed along with a launch request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchOptions {
    /// Track to select once the player is up, if one is known
    pub track_id: Option<String>,
}

impl LaunchOptions {
    /// Options targeting a specific track.
    pub fn for_track(track_id: impl Into<String>) -> Self {
        Self {
            track_id: Some(track_id.into()),
        }
    }
}

/// Outcome of resolving a track-launch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchDecision {
    /// Launch this surface with the given options
    Launch {
        /// Surface to launch
        target: PlayerKind,
        /// Launch options (track selection)
        options: LaunchOptions,
    },

    /// Nothing to launch
    NoOp,
}

impl LaunchDecision {
    /// The launch target, if a launch was decided.
    #[must_use]
    pub fn target(&self) -> Option<PlayerKind> {
        match self {
            Self::Launch { target, .. } => Some(*target),
            Self::NoOp => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_decision_target() {
        assert_eq!(
            RoutingDecision::Target(PlayerKind::SpotifyWeb).target(),
            Some(PlayerKind::SpotifyWeb)
        );
        assert_eq!(RoutingDecision::NoTarget.target(), None);
    }

    #[test]
    fn launch_options_for_track() {
        let options = LaunchOptions::for_track("abc123");
        assert_eq!(options.track_id.as_deref(), Some("abc123"));
        assert_eq!(LaunchOptions::default().track_id, None);
    }
}
