//! Snowfall control panel.
//!
//! Owns the activation toggle: an egui checkbox plus a keyboard shortcut
//! (N by default) that flip `SnowfallActive`. Also shows a small readout of
//! the simulator's opacity and recycle counters.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::simulation_sets::SimulationUpdateSet;
use simulation::snowfall::{Snowfall, SnowfallActive, SnowfallStats, TickOutcome};

// =============================================================================
// Resources
// =============================================================================

/// Key that toggles snowfall on and off.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SnowToggleBinding(pub KeyCode);

impl Default for SnowToggleBinding {
    fn default() -> Self {
        Self(KeyCode::KeyN)
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Toggles snowfall with the bound key.
/// Keys are ignored when egui has keyboard focus (e.g. text input).
pub fn snowfall_toggle_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    binding: Res<SnowToggleBinding>,
    mut active: ResMut<SnowfallActive>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(binding.0) {
        active.0 = !active.0;
    }
}

/// Renders the snowfall panel window.
pub fn snowfall_panel_ui(
    mut contexts: EguiContexts,
    mut active: ResMut<SnowfallActive>,
    mut snowfall: ResMut<Snowfall>,
    stats: Res<SnowfallStats>,
    binding: Res<SnowToggleBinding>,
) {
    let mut reset_requested = false;
    let mut enabled = active.0;

    egui::Window::new("Snowfall")
        .resizable(false)
        .default_width(220.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.checkbox(&mut enabled, format!("Let it snow ({:?})", binding.0));
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Opacity:");
                ui.add(egui::ProgressBar::new(stats.opacity).show_percentage());
            });
            ui.label(format!("Flakes: {}", snowfall.count()));
            ui.label(format!("State: {}", outcome_label(stats.last_outcome)));
            ui.label(
                egui::RichText::new(format!(
                    "Respawned {} / wrapped {}",
                    stats.total_respawned, stats.total_wrapped
                ))
                .small()
                .color(egui::Color32::from_gray(160)),
            );

            ui.add_space(4.0);
            if ui.button("Re-scatter").clicked() {
                reset_requested = true;
            }
        });

    // Only write on change so `SnowfallActive` change detection stays meaningful.
    if enabled != active.0 {
        active.0 = enabled;
    }
    if reset_requested {
        snowfall.reset();
    }
}

/// Short human-readable label for a tick outcome.
pub fn outcome_label(outcome: TickOutcome) -> &'static str {
    match outcome {
        TickOutcome::Idle => "idle",
        TickOutcome::Hidden => "faded out",
        TickOutcome::Simulated { .. } => "falling",
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct SnowfallPanelPlugin;

impl Plugin for SnowfallPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SnowToggleBinding>().add_systems(
            Update,
            (snowfall_toggle_keybind, snowfall_panel_ui)
                .chain()
                .in_set(SimulationUpdateSet::Input),
        );
    }
}
