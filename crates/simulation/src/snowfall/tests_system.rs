//! Integration tests driving `SnowfallPlugin` through a minimal Bevy App.

use std::time::Duration;

use bevy::prelude::*;

use crate::simulation_sets::SimulationSetsPlugin;
use crate::snowfall::{
    Snowfall, SnowfallActive, SnowfallConfig, SnowfallPlugin, SnowfallStats, TickOutcome,
};

/// Helper: build a minimal Bevy App with the snowfall plugin and a manual clock.
fn snowfall_test_app(config: Option<SnowfallConfig>) -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    if let Some(config) = config {
        app.insert_resource(config);
    }
    app.add_plugins((SimulationSetsPlugin, SnowfallPlugin));
    app
}

fn advance(app: &mut App, millis: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(millis));
    app.update();
}

fn set_active(app: &mut App, active: bool) {
    app.world_mut().resource_mut::<SnowfallActive>().0 = active;
}

#[test]
fn test_plugin_uses_inserted_config() {
    let app = snowfall_test_app(Some(SnowfallConfig {
        count: 42,
        ..Default::default()
    }));
    assert_eq!(app.world().resource::<Snowfall>().count(), 42);
}

#[test]
fn test_plugin_falls_back_on_invalid_config() {
    let app = snowfall_test_app(Some(SnowfallConfig {
        count: 0,
        ..Default::default()
    }));
    let snowfall = app.world().resource::<Snowfall>();
    assert_eq!(snowfall.count(), SnowfallConfig::default().count);
    assert_eq!(
        app.world().resource::<SnowfallConfig>(),
        &SnowfallConfig::default()
    );
}

#[test]
fn test_inactive_by_default_stays_hidden() {
    let mut app = snowfall_test_app(None);
    let before = app.world().resource::<Snowfall>().positions().to_vec();
    for _ in 0..10 {
        advance(&mut app, 16);
    }
    let snowfall = app.world().resource::<Snowfall>();
    assert_eq!(snowfall.positions(), before.as_slice());
    assert_eq!(snowfall.opacity(), 0.0);
    let stats = app.world().resource::<SnowfallStats>();
    assert_eq!(stats.last_outcome, TickOutcome::Hidden);
    assert_eq!(stats.simulated_frames, 0);
}

#[test]
fn test_activation_fades_in_and_moves_flakes() {
    let mut app = snowfall_test_app(Some(SnowfallConfig {
        count: 100,
        ..Default::default()
    }));
    let before = app.world().resource::<Snowfall>().positions().to_vec();
    set_active(&mut app, true);
    for _ in 0..60 {
        advance(&mut app, 16);
    }
    let snowfall = app.world().resource::<Snowfall>();
    assert!(snowfall.opacity() > 0.8, "got {}", snowfall.opacity());
    assert_ne!(snowfall.positions(), before.as_slice());

    let stats = app.world().resource::<SnowfallStats>();
    assert_eq!(stats.simulated_frames, 60);
    assert!((stats.opacity - snowfall.opacity()).abs() < f32::EPSILON);
}

#[test]
fn test_deactivation_fades_out() {
    let mut app = snowfall_test_app(None);
    set_active(&mut app, true);
    for _ in 0..120 {
        advance(&mut app, 16);
    }
    set_active(&mut app, false);
    for _ in 0..600 {
        advance(&mut app, 16);
    }
    let snowfall = app.world().resource::<Snowfall>();
    assert!(!snowfall.is_visible(), "got {}", snowfall.opacity());
    assert_eq!(
        app.world().resource::<SnowfallStats>().last_outcome,
        TickOutcome::Hidden
    );
}

#[test]
fn test_zero_delta_frame_is_idle() {
    let mut app = snowfall_test_app(None);
    set_active(&mut app, true);
    advance(&mut app, 16);
    let before = app.world().resource::<Snowfall>().positions().to_vec();
    // Advancing by zero leaves `Time::delta` at zero for this frame.
    advance(&mut app, 0);
    assert_eq!(
        app.world().resource::<SnowfallStats>().last_outcome,
        TickOutcome::Idle
    );
    assert_eq!(
        app.world().resource::<Snowfall>().positions(),
        before.as_slice()
    );
}
