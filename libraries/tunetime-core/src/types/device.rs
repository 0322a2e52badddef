/// Remote playback device types
use serde::{Deserialize, Serialize};

/// Substring the Spotify connect API puts in the display name of
/// browser-hosted endpoints (e.g. "Web Player (Chrome)").
const WEB_PLAYER_MARKER: &str = "Web Player";

/// A remote, network-enumerable playback endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDevice {
    /// Unique device identifier assigned by the player backend
    pub id: String,

    /// Display name (e.g., "Web Player (Chrome)", "My Living Room")
    pub name: String,
}

impl PlayerDevice {
    /// Create a new device descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Whether the display name follows the web-player naming convention.
    #[must_use]
    pub fn is_web_player(&self) -> bool {
        self.name.contains(WEB_PLAYER_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_player_naming_convention() {
        assert!(PlayerDevice::new("d1", "Web Player (Chrome)").is_web_player());
        assert!(!PlayerDevice::new("d2", "My Living Room").is_web_player());
        // Case-sensitive match, per the backend's naming
        assert!(!PlayerDevice::new("d3", "web player").is_web_player());
    }
}
