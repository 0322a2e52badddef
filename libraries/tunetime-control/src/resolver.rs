//! Player resolver - routing decisions
//!
//! Reconciles the running-track snapshot and the live device enumeration
//! into a single target surface for transport and launch actions.

use tracing::{debug, warn};
use tunetime_core::types::{
    LaunchDecision, LaunchOptions, PlayerDevice, PlayerKind, RoutingDecision, TrackSnapshot,
};

use crate::traits::{DeviceEnumerator, TrackQuery};

/// Decides which playback surface should receive the next command.
///
/// The resolver is a pure function of its freshly queried inputs: it holds
/// no mutable state of its own, and concurrent resolutions each compute
/// against their own snapshot. Collaborator failures are absorbed here and
/// treated as empty input, so resolution never returns an error.
pub struct PlayerResolver<T, D> {
    tracks: T,
    devices: D,
}

impl<T, D> PlayerResolver<T, D>
where
    T: TrackQuery,
    D: DeviceEnumerator,
{
    /// Create a resolver over the given collaborators.
    pub fn new(tracks: T, devices: D) -> Self {
        Self { tracks, devices }
    }

    /// Resolve the target for a transport command (play/pause/next/previous).
    ///
    /// Transport commands always act on whatever surface currently reports
    /// a track, so this is a direct mapping: no snapshot means no target.
    pub async fn resolve_for_transport(&self) -> RoutingDecision {
        match self.running_track().await {
            Some(snapshot) => RoutingDecision::Target(snapshot.player),
            None => RoutingDecision::NoTarget,
        }
    }

    /// Resolve the target for a track-launch request.
    ///
    /// With an explicit target hint the caller has already picked a player,
    /// and the fixed web-player launch path is used without further
    /// resolution. Otherwise the running track's surface is the default
    /// target, with one disambiguation: a web-player track controlled
    /// through exactly one device whose name does not follow the
    /// "Web Player" convention means the user is actually driving the
    /// desktop application, so the launch opens that instead of a browser
    /// tab.
    pub async fn resolve_for_launch(&self, has_explicit_target_hint: bool) -> LaunchDecision {
        if has_explicit_target_hint {
            return LaunchDecision::Launch {
                target: PlayerKind::SpotifyWeb,
                options: LaunchOptions::default(),
            };
        }

        let Some(snapshot) = self.running_track().await else {
            return LaunchDecision::NoOp;
        };

        let mut target = snapshot.player;
        if target == PlayerKind::SpotifyWeb {
            let devices = self.enumerate_devices().await;
            if let [only] = devices.as_slice() {
                if !only.is_web_player() {
                    debug!(
                        device = %only.name,
                        "single non-web device; routing launch to the desktop variant"
                    );
                    target = target.desktop_variant();
                }
            }
        }

        LaunchDecision::Launch {
            target,
            options: launch_options(&snapshot),
        }
    }

    /// Query the running track, absorbing collaborator failures.
    async fn running_track(&self) -> Option<TrackSnapshot> {
        match self.tracks.running_track().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "track query failed; treating as nothing playing");
                None
            }
        }
    }

    /// Enumerate devices, absorbing collaborator failures.
    async fn enumerate_devices(&self) -> Vec<PlayerDevice> {
        match self.devices.devices().await {
            Ok(devices) => devices,
            Err(err) => {
                warn!(error = %err, "device enumeration failed; treating as no devices");
                Vec::new()
            }
        }
    }
}

/// Launch options for a snapshot: carry the track id when one is known.
fn launch_options(snapshot: &TrackSnapshot) -> LaunchOptions {
    if snapshot.id.is_empty() {
        LaunchOptions::default()
    } else {
        LaunchOptions::for_track(snapshot.id.clone())
    }
}
