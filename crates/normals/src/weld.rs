//! Spatial grouping of triangle corners into logical points.
//!
//! Meshes duplicate vertices along UV and hard-edge seams, so one point in
//! space can have several vertex-buffer entries. Smoothing has to see those
//! entries together without merging them in the output, so every triangle
//! corner is filed under the [`VertexKey`] of its position.

use crate::key::VertexKey;
use glam::Vec3;
use std::collections::{HashMap, HashSet};

/// One triangle corner: which vertex-buffer entry, in which triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner {
    pub vertex: u32,
    pub triangle: u32,
}

/// Every triangle corner whose position falls into the same grid cell.
#[derive(Debug, Clone)]
pub struct LogicalPoint {
    pub key: VertexKey,
    /// Corners in the order their triangles appear in the index buffer
    pub corners: Vec<Corner>,
}

impl LogicalPoint {
    fn new(key: VertexKey) -> Self {
        Self {
            key,
            corners: Vec::with_capacity(4),
        }
    }

    /// Number of distinct vertex-buffer entries at this point.
    pub fn distinct_vertices(&self) -> usize {
        self.corners
            .iter()
            .map(|c| c.vertex)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Position key -> logical point, with first-seen bucket order.
///
/// Buckets live in a `Vec` and the hash map only stores their index, so
/// iteration order depends on the index buffer alone and two runs over the
/// same mesh walk the points identically.
#[derive(Debug, Default)]
pub struct WeldMap {
    lookup: HashMap<VertexKey, usize>,
    points: Vec<LogicalPoint>,
}

impl WeldMap {
    /// Group all triangle corners of `indices` by position.
    ///
    /// Indices must already be validated against `positions`.
    pub fn build(positions: &[Vec3], indices: &[u32]) -> Self {
        let mut map = Self {
            lookup: HashMap::with_capacity(positions.len()),
            points: Vec::new(),
        };

        for (triangle, tri) in indices.chunks_exact(3).enumerate() {
            for &vertex in tri {
                map.insert(
                    positions[vertex as usize],
                    Corner {
                        vertex,
                        triangle: triangle as u32,
                    },
                );
            }
        }

        map
    }

    /// File a corner under the logical point of `position`.
    pub fn insert(&mut self, position: Vec3, corner: Corner) {
        let key = VertexKey::new(position);
        let points = &mut self.points;
        let index = *self.lookup.entry(key).or_insert_with(|| {
            points.push(LogicalPoint::new(key));
            points.len() - 1
        });
        self.points[index].corners.push(corner);
    }

    /// Logical points in first-seen order.
    pub fn points(&self) -> &[LogicalPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total corners filed (three per triangle).
    pub fn corner_count(&self) -> usize {
        self.points.iter().map(|p| p.corners.len()).sum()
    }

    /// Vertex-buffer entries that share their logical point with another entry.
    pub fn coincident_vertex_count(&self) -> usize {
        self.points
            .iter()
            .map(LogicalPoint::distinct_vertices)
            .filter(|&n| n > 1)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_at(map: &WeldMap, position: Vec3) -> Option<&LogicalPoint> {
        map.points().iter().find(|p| p.key == VertexKey::new(position))
    }

    /// Two triangles forming a quad, with the diagonal vertices duplicated
    /// the way a UV seam would duplicate them.
    fn split_quad() -> (Vec<Vec3>, Vec<u32>) {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        (positions, vec![0, 1, 2, 3, 4, 5])
    }

    #[test]
    fn test_duplicates_share_a_point() {
        let (positions, indices) = split_quad();
        let map = WeldMap::build(&positions, &indices);

        assert_eq!(map.len(), 4);
        assert_eq!(map.corner_count(), 6);
        assert_eq!(map.coincident_vertex_count(), 4);

        let origin = point_at(&map, Vec3::ZERO).unwrap();
        assert_eq!(
            origin.corners,
            vec![
                Corner { vertex: 0, triangle: 0 },
                Corner { vertex: 3, triangle: 1 },
            ]
        );
    }

    #[test]
    fn test_first_seen_order() {
        let (positions, indices) = split_quad();
        let map = WeldMap::build(&positions, &indices);
        let keys: Vec<VertexKey> = map.points().iter().map(|p| p.key).collect();
        assert_eq!(
            keys,
            vec![
                VertexKey::new(positions[0]),
                VertexKey::new(positions[1]),
                VertexKey::new(positions[2]),
                VertexKey::new(positions[5]),
            ]
        );
    }

    #[test]
    fn test_shared_vertex_counts_once() {
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0)];
        let map = WeldMap::build(&positions, &[0, 1, 2, 2, 1, 3]);

        assert_eq!(map.len(), 4);
        assert_eq!(map.coincident_vertex_count(), 0);
        assert_eq!(point_at(&map, Vec3::X).unwrap().corners.len(), 2);
        assert_eq!(point_at(&map, Vec3::X).unwrap().distinct_vertices(), 1);
    }

    #[test]
    fn test_unreferenced_vertices_are_not_filed() {
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::splat(5.0)];
        let map = WeldMap::build(&positions, &[0, 1, 2]);
        assert_eq!(map.len(), 3);
        assert!(point_at(&map, Vec3::splat(5.0)).is_none());
    }

    #[test]
    fn test_empty() {
        let map = WeldMap::build(&[], &[]);
        assert!(map.is_empty());
        assert_eq!(map.corner_count(), 0);
    }
}
