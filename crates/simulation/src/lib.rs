use bevy::prelude::*;

pub mod sim_rng;
pub mod simulation_sets;
pub mod snowfall;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            simulation_sets::SimulationSetsPlugin,
            snowfall::SnowfallPlugin,
        ));
    }
}
