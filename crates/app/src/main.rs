use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::snowfall::{SnowfallActive, SnowfallConfig};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Snowscape".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    // Config must be in place before SnowfallPlugin builds the simulator.
    app.insert_resource(load_config());

    app.add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Start snowing immediately unless asked not to.
    let start_active = std::env::var("SNOWSCAPE_START_IDLE").is_err();
    app.insert_resource(SnowfallActive(start_active));

    app.run();
}

/// Read `SNOWSCAPE_CONFIG` (JSON path) and `SNOWSCAPE_SEED`, falling back to
/// defaults with a warning on any problem.
fn load_config() -> SnowfallConfig {
    let mut config = match std::env::var("SNOWSCAPE_CONFIG") {
        Ok(path) => match read_config(&path) {
            Ok(config) => {
                info!("Loaded snowfall config from {path}");
                config
            }
            Err(e) => {
                warn!("Failed to load snowfall config {path}, using defaults: {e}");
                SnowfallConfig::default()
            }
        },
        Err(_) => SnowfallConfig::default(),
    };

    if let Ok(raw) = std::env::var("SNOWSCAPE_SEED") {
        match raw.parse::<u64>() {
            Ok(seed) => config.seed = seed,
            Err(e) => warn!("Ignoring SNOWSCAPE_SEED={raw}: {e}"),
        }
    }
    config
}

fn read_config(path: &str) -> Result<SnowfallConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(SnowfallConfig::from_json(&json)?)
}
