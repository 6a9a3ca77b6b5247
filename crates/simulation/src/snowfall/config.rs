//! Snowfall configuration.
//!
//! `SnowfallConfig` is read once when the simulator is built. It can be
//! inserted as a resource before `SnowfallPlugin` is added, or loaded from
//! JSON; fields missing from the JSON keep their defaults.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sim_rng::{SimRng, DEFAULT_SEED};

use super::constants::*;
use super::error::SnowfallError;

/// Closed `[min, max]` interval sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    #[inline]
    pub(crate) fn sample(&self, rng: &mut SimRng) -> f32 {
        rng.span(self.min, self.max)
    }

    fn validate(&self, name: &'static str) -> Result<(), SnowfallError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(SnowfallError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Construction parameters for the snowfall field.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowfallConfig {
    /// Number of flakes. Fixed for the simulator's lifetime.
    pub count: usize,
    /// Half-width of the viewing volume on X and Z. Flakes spawn inside
    /// `[-half_extent, half_extent]` and wrap at its edges.
    pub half_extent: f32,
    /// Height range for the initial scatter.
    pub spawn_height: ValueRange,
    /// Height range a flake is moved to after falling through the floor.
    pub respawn_height: ValueRange,
    /// Flakes below this Y are respawned.
    pub floor_y: f32,
    /// Fall speed magnitude; stored velocities are always downward.
    pub fall_speed: ValueRange,
    /// Constant horizontal drift on X and Z.
    pub drift: ValueRange,
    /// Per-flake sprite scale.
    pub size: ValueRange,
    /// Seed for the flake RNG.
    pub seed: u64,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_FLAKE_COUNT,
            half_extent: DEFAULT_HALF_EXTENT,
            spawn_height: ValueRange::new(DEFAULT_SPAWN_HEIGHT_MIN, DEFAULT_SPAWN_HEIGHT_MAX),
            respawn_height: ValueRange::new(DEFAULT_RESPAWN_HEIGHT_MIN, DEFAULT_RESPAWN_HEIGHT_MAX),
            floor_y: DEFAULT_FLOOR_Y,
            fall_speed: ValueRange::new(DEFAULT_FALL_SPEED_MIN, DEFAULT_FALL_SPEED_MAX),
            drift: ValueRange::new(DEFAULT_DRIFT_MIN, DEFAULT_DRIFT_MAX),
            size: ValueRange::new(DEFAULT_SIZE_MIN, DEFAULT_SIZE_MAX),
            seed: DEFAULT_SEED,
        }
    }
}

impl SnowfallConfig {
    /// Check every field; the first violation is returned.
    pub fn validate(&self) -> Result<(), SnowfallError> {
        if self.count == 0 {
            return Err(SnowfallError::EmptyField);
        }
        if !self.half_extent.is_finite() || self.half_extent <= 0.0 {
            return Err(SnowfallError::InvalidValue {
                name: "half_extent",
                value: self.half_extent,
            });
        }
        if !self.floor_y.is_finite() {
            return Err(SnowfallError::InvalidValue {
                name: "floor_y",
                value: self.floor_y,
            });
        }
        self.spawn_height.validate("spawn_height")?;
        self.respawn_height.validate("respawn_height")?;
        self.fall_speed.validate("fall_speed")?;
        self.drift.validate("drift")?;
        self.size.validate("size")?;

        // Negative magnitudes would send flakes upward and never respawn them.
        if self.fall_speed.min < 0.0 {
            return Err(SnowfallError::InvalidRange {
                name: "fall_speed",
                min: self.fall_speed.min,
                max: self.fall_speed.max,
            });
        }
        if self.size.min < 0.0 {
            return Err(SnowfallError::InvalidRange {
                name: "size",
                min: self.size.min,
                max: self.size.max,
            });
        }
        if self.respawn_height.min <= self.floor_y {
            return Err(SnowfallError::InvalidRange {
                name: "respawn_height",
                min: self.respawn_height.min,
                max: self.respawn_height.max,
            });
        }
        Ok(())
    }

    /// Decode and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, SnowfallError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnowfallError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
