//! Area-weighted vertex normal reconstruction with an angle threshold.
//!
//! For every logical point (see [`crate::weld`]) and every triangle corner
//! filed there, the solver gathers the weighted face normals of the other
//! corners at that point that either
//!
//! 1. belong to the very same vertex-buffer entry, or
//! 2. face within the smoothing angle of the corner's own triangle,
//!
//! drops the ones lighter than `ignore_factor` times the heaviest, and writes
//! the normalized sum to the corner's vertex. Vertices shared between
//! triangles are therefore always smooth, while duplicated seam vertices are
//! smoothed only across gentle angles.
//!
//! A high ignore factor lets big faces stay flat: their own weight dominates
//! and the curvature is pushed onto the smaller neighbors instead.
//!
//! ## Determinism
//!
//! Logical points are visited in first-seen order and corners in index
//! buffer order, so a vertex filed under several corners always ends up with
//! the value of its last corner, and identical inputs give bit-identical
//! output. The `parallel` feature solves points concurrently but applies the
//! results in the same order.

use crate::constants::DOT_CLAMP;
use crate::error::{NormalError, validate_triangles};
use crate::face::FaceNormal;
use crate::weld::{LogicalPoint, WeldMap};
use facetweld_config::SmoothingConfig;
use glam::Vec3;
use tracing::{debug, trace, warn};

/// Counters from one solve, for logging and diagnostics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Triangles in the index buffer
    pub triangles: usize,
    /// Distinct rounded positions referenced by those triangles
    pub logical_points: usize,
    /// Vertex-buffer entries sharing a logical point with another entry
    pub coincident_vertices: usize,
    /// Triangles with zero area
    pub degenerate_triangles: usize,
    /// Referenced vertices whose rebuilt normal is the zero vector
    pub zero_normals: usize,
}

/// Rebuild one normal per vertex from positions and a triangle list.
///
/// The result has the same length and order as `positions`. Vertices no
/// triangle references get the zero vector, as do points where every
/// contribution has zero length.
pub fn recalculate_normals(
    positions: &[Vec3],
    indices: &[u32],
    config: &SmoothingConfig,
) -> Result<Vec<Vec3>, NormalError> {
    recalculate_normals_with_stats(positions, indices, config).map(|(normals, _)| normals)
}

/// Same as [`recalculate_normals`], also returning [`SolveStats`].
pub fn recalculate_normals_with_stats(
    positions: &[Vec3],
    indices: &[u32],
    config: &SmoothingConfig,
) -> Result<(Vec<Vec3>, SolveStats), NormalError> {
    validate_triangles(indices, positions.len())?;

    let mut normals = vec![Vec3::ZERO; positions.len()];
    let mut stats = SolveStats {
        triangles: indices.len() / 3,
        ..Default::default()
    };

    if indices.is_empty() {
        trace!("recalculate_normals: no triangles, {} zero normals", positions.len());
        return Ok((normals, stats));
    }

    trace!("recalculate_normals: computing {} face normals", stats.triangles);
    let faces = FaceNormal::for_triangles(positions, indices);
    stats.degenerate_triangles = faces.iter().filter(|f| f.is_degenerate()).count();

    trace!("recalculate_normals: grouping corners by position");
    let weld = WeldMap::build(positions, indices);
    stats.logical_points = weld.len();
    stats.coincident_vertices = weld.coincident_vertex_count();

    let angle = config.angle_radians();
    let mut referenced = vec![false; positions.len()];
    for (vertex, normal) in solve_points(&weld, &faces, angle, config.ignore_factor) {
        normals[vertex as usize] = normal;
        referenced[vertex as usize] = true;
    }

    stats.zero_normals = normals
        .iter()
        .zip(&referenced)
        .filter(|&(normal, &used)| used && *normal == Vec3::ZERO)
        .count();

    debug!(
        "recalculate_normals: {} vertices, {} triangles, {} logical points ({} coincident vertices), angle={}°, ignore_factor={}",
        positions.len(),
        stats.triangles,
        stats.logical_points,
        stats.coincident_vertices,
        config.angle_degrees,
        config.ignore_factor
    );
    if stats.zero_normals > 0 {
        warn!(
            "recalculate_normals: {} vertices got a zero normal ({} degenerate triangles)",
            stats.zero_normals, stats.degenerate_triangles
        );
    }

    Ok((normals, stats))
}

/// A reusable solver bound to one set of smoothing settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalSolver {
    pub config: SmoothingConfig,
}

impl NormalSolver {
    pub fn new(config: SmoothingConfig) -> Self {
        Self { config }
    }

    pub fn solve(&self, positions: &[Vec3], indices: &[u32]) -> Result<Vec<Vec3>, NormalError> {
        recalculate_normals(positions, indices, &self.config)
    }
}

/// Solve every corner of one logical point.
///
/// Returns `(vertex, normal)` assignments in corner order. `angle` is in
/// radians. A vertex may appear more than once; the last assignment wins.
pub fn solve_point(
    point: &LogicalPoint,
    faces: &[FaceNormal],
    angle: f32,
    ignore_factor: f32,
) -> Vec<(u32, Vec3)> {
    let mut contributions: Vec<Vec3> = Vec::with_capacity(point.corners.len());

    point
        .corners
        .iter()
        .map(|corner| {
            contributions.clear();
            let own = faces[corner.triangle as usize].unit;
            let mut longest = 0.0_f32;

            for other in &point.corners {
                let face = &faces[other.triangle as usize];
                if corner.vertex == other.vertex || face_angle(own, face.unit) <= angle {
                    contributions.push(face.weighted);
                    longest = longest.max(face.weight());
                }
            }

            let threshold = longest * ignore_factor;
            let sum: Vec3 = contributions
                .iter()
                .filter(|n| n.length() >= threshold)
                .sum();

            (corner.vertex, sum.normalize_or_zero())
        })
        .collect()
}

/// Angle between two unit face normals, clamped away from exactly 0 and pi.
#[inline]
fn face_angle(a: Vec3, b: Vec3) -> f32 {
    a.dot(b).clamp(-DOT_CLAMP, DOT_CLAMP).acos()
}

#[cfg(not(feature = "parallel"))]
fn solve_points(
    weld: &WeldMap,
    faces: &[FaceNormal],
    angle: f32,
    ignore_factor: f32,
) -> Vec<(u32, Vec3)> {
    weld.points()
        .iter()
        .flat_map(|point| solve_point(point, faces, angle, ignore_factor))
        .collect()
}

// Points are independent once face normals exist; collecting keeps point order.
#[cfg(feature = "parallel")]
fn solve_points(
    weld: &WeldMap,
    faces: &[FaceNormal],
    angle: f32,
    ignore_factor: f32,
) -> Vec<(u32, Vec3)> {
    use rayon::prelude::*;

    let per_point: Vec<Vec<(u32, Vec3)>> = weld
        .points()
        .par_iter()
        .map(|point| solve_point(point, faces, angle, ignore_factor))
        .collect();
    per_point.into_iter().flatten().collect()
}
