//! Pure helper functions for the per-frame flake update.
//!
//! These functions are testable without ECS. They take the clock, the flake
//! index and current values, and return the new value.

use bevy::math::Vec2;

use super::constants::*;

/// Ease `current` toward 1.0 (active) or 0.0 (inactive).
///
/// Exponential approach with rate `OPACITY_EASE_RATE` per second. The step
/// fraction is capped at 1.0 so a long frame lands on the target instead of
/// overshooting past it.
pub fn ease_opacity(current: f32, active: bool, delta_secs: f32) -> f32 {
    let target = if active { 1.0 } else { 0.0 };
    let step = (delta_secs * OPACITY_EASE_RATE).clamp(0.0, 1.0);
    (current + (target - current) * step).clamp(0.0, 1.0)
}

/// Wind sway velocity for flake `index` at clock `elapsed` (X in `.x`, Z in `.y`).
///
/// The index-based phase offset decorrelates neighbouring flakes without
/// storing any per-flake random state.
#[inline]
pub fn turbulence(elapsed: f64, index: usize) -> Vec2 {
    let i = index as f64;
    let wind_x = (elapsed * WIND_X_FREQUENCY + i * WIND_X_PHASE_STEP).sin();
    let wind_z = (elapsed * WIND_Z_FREQUENCY + i * WIND_Z_PHASE_STEP).cos();
    Vec2::new(wind_x as f32, wind_z as f32) * WIND_AMPLITUDE
}

/// Per-tick X displacement for flake `index`. Not scaled by frame time.
#[inline]
pub fn swirl(elapsed: f64, index: usize) -> f32 {
    (elapsed + index as f64).sin() as f32 * SWIRL_AMPLITUDE
}

/// Teleport `value` to the opposite edge when it leaves `[-half_extent, half_extent]`.
///
/// Returns true if the coordinate was wrapped.
#[inline]
pub fn wrap_axis(value: &mut f32, half_extent: f32) -> bool {
    if *value > half_extent {
        *value = -half_extent;
        true
    } else if *value < -half_extent {
        *value = half_extent;
        true
    } else {
        false
    }
}
