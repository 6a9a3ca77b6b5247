//! ECS systems and plugin for the snowfall simulator.
//!
//! `update_snowfall` runs once per rendered frame, feeding the frame delta
//! and the `SnowfallActive` flag into `Snowfall::tick`.

use bevy::prelude::*;

use crate::simulation_sets::SimulationUpdateSet;

use super::config::SnowfallConfig;
use super::types::{Snowfall, SnowfallActive, SnowfallStats};

/// Advance the snowfall field by this frame's delta.
pub fn update_snowfall(
    time: Res<Time>,
    active: Res<SnowfallActive>,
    mut snowfall: ResMut<Snowfall>,
    mut stats: ResMut<SnowfallStats>,
) {
    let frame = snowfall.tick(time.delta_secs(), active.0);
    stats.record(frame.outcome, frame.opacity);
}

/// Log activation flips.
pub fn log_snowfall_activation(active: Res<SnowfallActive>) {
    if active.is_changed() && !active.is_added() {
        if active.0 {
            info!("Snowfall activated");
        } else {
            info!("Snowfall deactivated");
        }
    }
}

/// Build the simulator from the `SnowfallConfig` resource, if one was
/// inserted. An invalid config is reported and replaced by the defaults.
fn build_snowfall(config: Option<SnowfallConfig>) -> Snowfall {
    let config = config.unwrap_or_default();
    match Snowfall::new(config) {
        Ok(snowfall) => snowfall,
        Err(e) => {
            warn!("Snowfall: invalid configuration, falling back to defaults: {e}");
            Snowfall::default()
        }
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct SnowfallPlugin;

impl Plugin for SnowfallPlugin {
    fn build(&self, app: &mut App) {
        let config = app.world().get_resource::<SnowfallConfig>().cloned();
        let snowfall = build_snowfall(config);
        info!(
            "Snowfall: {} flakes, half extent {}, seed {}",
            snowfall.count(),
            snowfall.config().half_extent,
            snowfall.config().seed
        );

        app.insert_resource(snowfall.config().clone())
            .insert_resource(snowfall)
            .init_resource::<SnowfallActive>()
            .init_resource::<SnowfallStats>()
            .add_systems(
                Update,
                (log_snowfall_activation, update_snowfall)
                    .chain()
                    .in_set(SimulationUpdateSet::Simulate),
            );
    }
}
