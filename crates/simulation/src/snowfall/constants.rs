//! Tuning constants for the snowfall simulator.

/// Default number of flakes in the field.
pub const DEFAULT_FLAKE_COUNT: usize = 800;

/// Half-width of the viewing volume on X and Z (world units).
/// Flakes wrap at `±DEFAULT_HALF_EXTENT`.
pub const DEFAULT_HALF_EXTENT: f32 = 15.0;

/// Initial spawn height range (world units).
pub const DEFAULT_SPAWN_HEIGHT_MIN: f32 = 5.0;
pub const DEFAULT_SPAWN_HEIGHT_MAX: f32 = 25.0;

/// Height range a flake is re-inserted at after dropping through the floor.
pub const DEFAULT_RESPAWN_HEIGHT_MIN: f32 = 15.0;
pub const DEFAULT_RESPAWN_HEIGHT_MAX: f32 = 20.0;

/// Flakes below this Y are respawned at the top of the volume.
pub const DEFAULT_FLOOR_Y: f32 = -5.0;

/// Fall speed magnitude range (world units per second).
pub const DEFAULT_FALL_SPEED_MIN: f32 = 0.5;
pub const DEFAULT_FALL_SPEED_MAX: f32 = 2.0;

/// Horizontal drift velocity range on X and Z (world units per second).
pub const DEFAULT_DRIFT_MIN: f32 = -0.15;
pub const DEFAULT_DRIFT_MAX: f32 = 0.15;

/// Per-flake sprite scale range.
pub const DEFAULT_SIZE_MIN: f32 = 0.02;
pub const DEFAULT_SIZE_MAX: f32 = 0.10;

/// Opacity easing rate constant (per second).
pub(crate) const OPACITY_EASE_RATE: f32 = 2.0;

/// Below this opacity the physics pass is skipped and flakes freeze.
pub const VISIBILITY_THRESHOLD: f32 = 0.01;

/// Wind sway amplitude on X and Z (world units per second).
pub(crate) const WIND_AMPLITUDE: f32 = 0.02;

/// Temporal frequency of X sway, and per-index phase step.
pub(crate) const WIND_X_FREQUENCY: f64 = 0.5;
pub(crate) const WIND_X_PHASE_STEP: f64 = 0.1;

/// Temporal frequency of Z sway, and per-index phase step.
pub(crate) const WIND_Z_FREQUENCY: f64 = 0.3;
pub(crate) const WIND_Z_PHASE_STEP: f64 = 0.15;

/// Per-tick X wobble amplitude (world units, applied once per tick).
pub(crate) const SWIRL_AMPLITUDE: f32 = 0.005;
