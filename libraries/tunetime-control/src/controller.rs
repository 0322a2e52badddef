//! Music controller - resolve then dispatch
//!
//! Thin orchestration over the resolver: pick the target surface once,
//! dispatch the action through the backend primitives, and keep the
//! control surface in sync.

use tracing::{debug, info};
use tunetime_core::error::Result;
use tunetime_core::types::{LaunchDecision, RoutingDecision, TransportCommand};

use crate::resolver::PlayerResolver;
use crate::traits::{ControlSync, DeviceEnumerator, PlayerCommands, TrackQuery};

/// Dispatches transport and launch actions against the resolved surface.
///
/// All four transport operations share a single dispatch point; the target
/// surface is selected once by the resolver and the command is issued
/// uniformly, whatever it is.
pub struct MusicController<T, D, P, S> {
    resolver: PlayerResolver<T, D>,
    commands: P,
    sync: S,
}

impl<T, D, P, S> MusicController<T, D, P, S>
where
    T: TrackQuery,
    D: DeviceEnumerator,
    P: PlayerCommands,
    S: ControlSync,
{
    /// Create a controller over the given resolver and backend collaborators.
    pub fn new(resolver: PlayerResolver<T, D>, commands: P, sync: S) -> Self {
        Self {
            resolver,
            commands,
            sync,
        }
    }

    /// Dispatch a transport command to whichever surface owns the running
    /// track.
    ///
    /// When nothing is playing the command is a silent no-op: no dispatch,
    /// no sync, no error. After a successful dispatch the control surface
    /// is re-synced so button state reflects the new playback state.
    ///
    /// # Errors
    /// Returns an error if the backend fails the dispatched command
    pub async fn transport(&self, command: TransportCommand) -> Result<RoutingDecision> {
        let decision = self.resolver.resolve_for_transport().await;
        match decision {
            RoutingDecision::Target(target) => {
                debug!(%target, %command, "dispatching transport command");
                self.commands.transport(target, command).await?;
                self.sync.sync_controls().await;
            }
            RoutingDecision::NoTarget => {
                debug!(%command, "nothing playing; transport command ignored");
            }
        }
        Ok(decision)
    }

    /// Start or resume playback on the current surface.
    ///
    /// # Errors
    /// Returns an error if the backend fails the command
    pub async fn play(&self) -> Result<RoutingDecision> {
        self.transport(TransportCommand::Play).await
    }

    /// Pause playback on the current surface.
    ///
    /// # Errors
    /// Returns an error if the backend fails the command
    pub async fn pause(&self) -> Result<RoutingDecision> {
        self.transport(TransportCommand::Pause).await
    }

    /// Skip to the next track on the current surface.
    ///
    /// # Errors
    /// Returns an error if the backend fails the command
    pub async fn next(&self) -> Result<RoutingDecision> {
        self.transport(TransportCommand::Next).await
    }

    /// Return to the previous track on the current surface.
    ///
    /// # Errors
    /// Returns an error if the backend fails the command
    pub async fn previous(&self) -> Result<RoutingDecision> {
        self.transport(TransportCommand::Previous).await
    }

    /// Launch the resolved surface, selecting the running track when known.
    ///
    /// # Errors
    /// Returns an error if the surface cannot be launched
    pub async fn launch_track(&self, has_explicit_target_hint: bool) -> Result<LaunchDecision> {
        let decision = self
            .resolver
            .resolve_for_launch(has_explicit_target_hint)
            .await;
        if let LaunchDecision::Launch { target, options } = &decision {
            info!(%target, track_id = ?options.track_id, "launching player");
            self.commands.launch(*target, options).await?;
        }
        Ok(decision)
    }
}
