//! Per-frame ordering via `SystemSet` phases.
//!
//! The snowfall buffer has exactly one writer (the tick system) and one
//! reader per frame (the render upload). These sets make that handoff an
//! explicit schedule contract instead of an implicit timing assumption.
//!
//! # Update phases (`SimulationUpdateSet`)
//!
//! ```text
//! Input  →  Simulate  →  Visual
//! ```
//!
//! * **Input** – Activation toggles (keyboard shortcut, UI checkbox).
//! * **Simulate** – The single `Snowfall::tick` call for this frame.
//! * **Visual** – Read-only consumers: mesh upload, material opacity.

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Simulate` → `Visual`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationUpdateSet {
    /// Per-frame input processing (activation toggles).
    Input,
    /// Advances the particle field by one frame.
    Simulate,
    /// Visual-only updates that read the particle buffer.
    Visual,
}

pub struct SimulationSetsPlugin;

impl Plugin for SimulationSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SimulationUpdateSet::Input,
                SimulationUpdateSet::Simulate,
                SimulationUpdateSet::Visual,
            )
                .chain(),
        );
    }
}
