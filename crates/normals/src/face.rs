//! Per-triangle face normals.

use glam::Vec3;

/// Face normal of one triangle, kept in two forms.
///
/// `weighted` is the raw edge cross product, so its length is twice the
/// triangle's area and doubles as the triangle's averaging weight. `unit` is
/// its direction, used for angle comparisons. Degenerate triangles have both
/// set to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaceNormal {
    pub weighted: Vec3,
    pub unit: Vec3,
}

impl FaceNormal {
    /// Face normal of the triangle `(a, b, c)` with counter-clockwise winding.
    pub fn from_triangle(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let weighted = (b - a).cross(c - a);
        Self {
            weighted,
            unit: weighted.normalize_or_zero(),
        }
    }

    /// Compute face normals for every triangle of an index buffer.
    ///
    /// Indices must already be validated against `positions`.
    pub fn for_triangles(positions: &[Vec3], indices: &[u32]) -> Vec<Self> {
        indices
            .chunks_exact(3)
            .map(|tri| {
                Self::from_triangle(
                    positions[tri[0] as usize],
                    positions[tri[1] as usize],
                    positions[tri[2] as usize],
                )
            })
            .collect()
    }

    /// Averaging weight (twice the triangle area).
    #[inline]
    pub fn weight(&self) -> f32 {
        self.weighted.length()
    }

    /// Triangle area.
    pub fn area(&self) -> f32 {
        self.weight() * 0.5
    }

    pub fn is_degenerate(&self) -> bool {
        self.weighted == Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_is_twice_area() {
        let face = FaceNormal::from_triangle(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(face.weighted, Vec3::new(0.0, 0.0, 6.0));
        assert_eq!(face.unit, Vec3::Z);
        assert!((face.weight() - 6.0).abs() < 1e-6);
        assert!((face.area() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_winding_flips_normal() {
        let face = FaceNormal::from_triangle(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert_eq!(face.unit, -Vec3::Z);
    }

    #[test]
    fn test_degenerate_triangles_are_zero() {
        let repeated = FaceNormal::from_triangle(Vec3::ZERO, Vec3::ZERO, Vec3::X);
        assert!(repeated.is_degenerate());
        assert_eq!(repeated.unit, Vec3::ZERO);

        let collinear = FaceNormal::from_triangle(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert!(collinear.is_degenerate());
        assert!(!collinear.unit.is_nan());
    }

    #[test]
    fn test_for_triangles() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
        let faces = FaceNormal::for_triangles(&positions, &[0, 1, 2, 0, 2, 3]);
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].unit, Vec3::Z);
        assert_eq!(faces[1].unit, Vec3::X);
    }
}
