//! Snowfall simulator, per-frame output, and ECS resources.

use bevy::prelude::*;

use crate::sim_rng::SimRng;

use super::compute::{ease_opacity, swirl, turbulence, wrap_axis};
use super::config::SnowfallConfig;
use super::constants::VISIBILITY_THRESHOLD;
use super::error::SnowfallError;

// =============================================================================
// Simulator
// =============================================================================

/// CPU-simulated snowfall field.
///
/// Owns a fixed population of flakes stored as parallel arrays indexed by
/// flake id. `tick` is the only mutating operation; everything else is a
/// read-only view for the renderer.
#[derive(Resource, Debug, Clone)]
pub struct Snowfall {
    config: SnowfallConfig,
    positions: Vec<Vec3>,
    /// Spawn-time positions. Kept for inspection, never read by `tick`.
    initial_positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    sizes: Vec<f32>,
    opacity: f32,
    /// Accumulated simulated seconds driving the turbulence phase.
    elapsed: f64,
    rng: SimRng,
}

impl Default for Snowfall {
    fn default() -> Self {
        let config = SnowfallConfig::default();
        let rng = SimRng::from_seed_u64(config.seed);
        Self::build(config, rng)
    }
}

impl Snowfall {
    /// Build a field seeded from `config.seed`.
    pub fn new(config: SnowfallConfig) -> Result<Self, SnowfallError> {
        let rng = SimRng::from_seed_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Build a field drawing from an explicit RNG. `config.seed` is ignored.
    pub fn with_rng(config: SnowfallConfig, rng: SimRng) -> Result<Self, SnowfallError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: SnowfallConfig, mut rng: SimRng) -> Self {
        let count = config.count;
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);

        for _ in 0..count {
            positions.push(spawn_position(&config, &mut rng));
            velocities.push(Vec3::new(
                config.drift.sample(&mut rng),
                -config.fall_speed.sample(&mut rng),
                config.drift.sample(&mut rng),
            ));
        }

        let sizes = (0..count).map(|_| config.size.sample(&mut rng)).collect();

        Self {
            initial_positions: positions.clone(),
            positions,
            velocities,
            sizes,
            opacity: 0.0,
            elapsed: 0.0,
            rng,
            config,
        }
    }

    /// Advance the field by `delta_secs` and return this frame's output.
    ///
    /// A non-positive or non-finite delta is a no-op. While the eased
    /// opacity is below `VISIBILITY_THRESHOLD` the physics pass is skipped
    /// and flakes stay where they are.
    pub fn tick(&mut self, delta_secs: f32, active: bool) -> SnowfallFrame<'_> {
        let outcome = self.advance(delta_secs, active);
        SnowfallFrame {
            positions: &self.positions,
            opacity: self.opacity,
            outcome,
        }
    }

    fn advance(&mut self, dt: f32, active: bool) -> TickOutcome {
        if !dt.is_finite() || dt <= 0.0 {
            return TickOutcome::Idle;
        }

        self.elapsed += f64::from(dt);
        self.opacity = ease_opacity(self.opacity, active, dt);

        if self.opacity < VISIBILITY_THRESHOLD {
            return TickOutcome::Hidden;
        }

        let half_extent = self.config.half_extent;
        let floor_y = self.config.floor_y;
        let elapsed = self.elapsed;
        let mut respawned = 0;
        let mut wrapped = 0;

        for (i, (pos, vel)) in self
            .positions
            .iter_mut()
            .zip(self.velocities.iter())
            .enumerate()
        {
            let wind = turbulence(elapsed, i);
            pos.x += (vel.x + wind.x) * dt;
            pos.y += vel.y * dt;
            pos.z += (vel.z + wind.y) * dt;

            pos.x += swirl(elapsed, i);

            if pos.y < floor_y {
                *pos = respawn_position(&self.config, &mut self.rng);
                respawned += 1;
            }

            // Non-short-circuit `|` so both axes are always wrapped.
            if wrap_axis(&mut pos.x, half_extent) | wrap_axis(&mut pos.z, half_extent) {
                wrapped += 1;
            }
        }

        TickOutcome::Simulated { respawned, wrapped }
    }

    /// Scatter every flake to a fresh spawn position and fade out fully.
    ///
    /// Velocities and sizes are kept; the turbulence clock restarts at zero.
    pub fn reset(&mut self) {
        for (pos, initial) in self
            .positions
            .iter_mut()
            .zip(self.initial_positions.iter_mut())
        {
            *pos = spawn_position(&self.config, &mut self.rng);
            *initial = *pos;
        }
        self.opacity = 0.0;
        self.elapsed = 0.0;
    }

    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn config(&self) -> &SnowfallConfig {
        &self.config
    }

    /// Current flake positions, one per flake.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn initial_positions(&self) -> &[Vec3] {
        &self.initial_positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Per-flake sprite scale. Never changes after construction.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Eased render opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Accumulated simulated seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether the field is bright enough to be simulated and drawn.
    pub fn is_visible(&self) -> bool {
        self.opacity >= VISIBILITY_THRESHOLD
    }
}

fn spawn_position(config: &SnowfallConfig, rng: &mut SimRng) -> Vec3 {
    let x = rng.centered(config.half_extent);
    let y = config.spawn_height.sample(rng);
    let z = rng.centered(config.half_extent);
    Vec3::new(x, y, z)
}

fn respawn_position(config: &SnowfallConfig, rng: &mut SimRng) -> Vec3 {
    let x = rng.centered(config.half_extent);
    let y = config.respawn_height.sample(rng);
    let z = rng.centered(config.half_extent);
    Vec3::new(x, y, z)
}

// =============================================================================
// Frame output
// =============================================================================

/// What a single `tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickOutcome {
    /// Delta was zero, negative or non-finite. Nothing changed.
    #[default]
    Idle,
    /// Opacity is below the visibility threshold; positions are frozen.
    Hidden,
    /// Full physics pass ran.
    Simulated { respawned: u32, wrapped: u32 },
}

/// Borrowed view of the field after a `tick`, handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct SnowfallFrame<'a> {
    pub positions: &'a [Vec3],
    pub opacity: f32,
    pub outcome: TickOutcome,
}

// =============================================================================
// Resources
// =============================================================================

/// External activation signal. Written by the UI, read once per frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnowfallActive(pub bool);

/// Aggregate snowfall statistics for the UI.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SnowfallStats {
    /// Outcome of the most recent tick.
    pub last_outcome: TickOutcome,
    /// Opacity after the most recent tick.
    pub opacity: f32,
    /// Total flakes respawned since startup.
    pub total_respawned: u64,
    /// Total wrap teleports since startup.
    pub total_wrapped: u64,
    /// Frames where the physics pass actually ran.
    pub simulated_frames: u64,
}

impl SnowfallStats {
    pub fn record(&mut self, outcome: TickOutcome, opacity: f32) {
        self.last_outcome = outcome;
        self.opacity = opacity;
        if let TickOutcome::Simulated { respawned, wrapped } = outcome {
            self.total_respawned += u64::from(respawned);
            self.total_wrapped += u64::from(wrapped);
            self.simulated_frames += 1;
        }
    }
}
