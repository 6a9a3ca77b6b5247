//! Ambient snowfall particle field.
//!
//! A fixed population of flakes falls through a square viewing volume,
//! swaying on index-phased sinusoidal wind. Flakes that drop through the
//! floor are re-inserted near the top; flakes that leave the volume
//! sideways are teleported to the opposite edge. The whole field fades in
//! and out following the external `SnowfallActive` flag, and the physics
//! pass is skipped entirely while it is faded out.
//!
//! `Snowfall` is a plain owned struct with a single mutating `tick`, usable
//! without an ECS. `SnowfallPlugin` wraps it as a resource and ticks it
//! once per frame.

pub mod compute;
pub mod config;
pub mod constants;
pub mod error;
mod system;
pub mod types;

#[cfg(test)]
mod tests_system;

pub use config::{SnowfallConfig, ValueRange};
pub use error::SnowfallError;
pub use system::{log_snowfall_activation, update_snowfall, SnowfallPlugin};
pub use types::{Snowfall, SnowfallActive, SnowfallFrame, SnowfallStats, TickOutcome};
