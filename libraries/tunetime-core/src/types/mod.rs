//! Domain types for Tune Time

mod device;
mod player;
mod routing;
mod track;

pub use device::PlayerDevice;
pub use player::{PlayerKind, TransportCommand};
pub use routing::{LaunchDecision, LaunchOptions, RoutingDecision};
pub use track::TrackSnapshot;
