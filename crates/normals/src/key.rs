//! Quantized position keys for the spatial hash.

use crate::constants::WELD_TOLERANCE;
use glam::Vec3;

/// A position snapped to the [`WELD_TOLERANCE`] grid.
///
/// Two positions share a key iff every coordinate rounds to the same grid
/// step. This is grid equality, not a distance test: points a hair apart on
/// either side of a half-step boundary get different keys, while points
/// almost a full step apart can share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey {
    x: i64,
    y: i64,
    z: i64,
}

impl VertexKey {
    pub fn new(position: Vec3) -> Self {
        Self {
            x: quantize(position.x),
            y: quantize(position.y),
            z: quantize(position.z),
        }
    }
}

// Ties go to even, matching the asset pipeline these keys have to agree with.
fn quantize(coord: f32) -> i64 {
    (coord * WELD_TOLERANCE).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_positions_share_key() {
        let a = VertexKey::new(Vec3::new(1.0, -2.5, 3.25));
        let b = VertexKey::new(Vec3::new(1.0, -2.5, 3.25));
        assert_eq!(a, b);
        assert_eq!([a.x, a.y, a.z], [100_000, -250_000, 325_000]);
    }

    #[test]
    fn test_sub_tolerance_noise_is_welded() {
        let a = VertexKey::new(Vec3::new(1.0, 1.0, 1.0));
        let b = VertexKey::new(Vec3::new(1.000_001, 0.999_999, 1.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_positions_split() {
        let a = VertexKey::new(Vec3::new(1.0, 1.0, 1.0));
        let b = VertexKey::new(Vec3::new(1.000_02, 1.0, 1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_grid_equality_not_distance() {
        // 1.4 and 1.6 grid steps: close together, different cells
        let a = VertexKey::new(Vec3::new(0.000_014, 0.0, 0.0));
        let b = VertexKey::new(Vec3::new(0.000_016, 0.0, 0.0));
        assert_ne!(a, b);

        // 0.6 and 1.4 grid steps: further apart, same cell
        let c = VertexKey::new(Vec3::new(0.000_006, 0.0, 0.0));
        let d = VertexKey::new(Vec3::new(0.000_014, 0.0, 0.0));
        assert_eq!(c, d);
    }
}
