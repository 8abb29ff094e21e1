//! Shared configuration for facetweld
//!
//! This crate provides the single source of truth for the smoothing settings
//! used when normals are rebuilt, so every caller (tools, engine plugins,
//! batch jobs) agrees on the same defaults.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default smoothing angle in degrees
pub const DEFAULT_SMOOTHING_ANGLE: f32 = 45.0;

/// Default ignore factor (fraction of the largest face weight at a point)
pub const DEFAULT_IGNORE_FACTOR: f32 = 0.5;

/// Angle at which every face meeting at a point is merged
pub const FULLY_SMOOTH_ANGLE: f32 = 180.0;

/// Settings for area-weighted normal reconstruction.
///
/// Values outside the conventional ranges are accepted as-is. They only move
/// the cutoffs; nothing clamps or rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct SmoothingConfig {
    /// Maximum angle between two face normals for them to be averaged
    pub angle_degrees: f32,
    /// Contributions lighter than `ignore_factor * heaviest` are dropped
    pub ignore_factor: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            angle_degrees: DEFAULT_SMOOTHING_ANGLE,
            ignore_factor: DEFAULT_IGNORE_FACTOR,
        }
    }
}

impl SmoothingConfig {
    /// Create a config with the given angle (degrees) and ignore factor
    pub fn new(angle_degrees: f32, ignore_factor: f32) -> Self {
        Self {
            angle_degrees,
            ignore_factor,
        }
    }

    /// Every face at a logical point contributes, weighted by area
    pub fn fully_smooth() -> Self {
        Self::new(FULLY_SMOOTH_ANGLE, 0.0)
    }

    /// Only faces sharing the exact same vertex-buffer entry are averaged
    pub fn hard_edges() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Smoothing angle converted to radians
    pub fn angle_radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }

    /// Whether both values sit inside their documented ranges.
    ///
    /// Informational only; out-of-range settings still run.
    pub fn is_conventional(&self) -> bool {
        (0.0..=FULLY_SMOOTH_ANGLE).contains(&self.angle_degrees)
            && (0.0..=1.0).contains(&self.ignore_factor)
    }
}
