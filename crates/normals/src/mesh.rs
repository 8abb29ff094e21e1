//! Minimal owned triangle mesh that carries its rebuilt normals.
//!
//! Engines and tools keep their own mesh types; this one exists for callers
//! that only have raw buffers (file loaders, GPU readbacks, tests) and want
//! the normals stored next to the geometry they came from.

use crate::error::{NormalError, validate_triangles};
use crate::solver::{SolveStats, recalculate_normals_with_stats};
use facetweld_config::SmoothingConfig;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Triangle-list mesh with one normal slot per vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub positions: Vec<Vec3>,
    /// Flat triangle list: `[t0v0, t0v1, t0v2, t1v0, ...]`
    pub indices: Vec<u32>,
    /// Zero until [`TriangleMesh::recalculate_normals`] runs
    pub normals: Vec<Vec3>,
}

impl TriangleMesh {
    /// Build a mesh, checking that `indices` forms whole in-range triangles.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Result<Self, NormalError> {
        validate_triangles(&indices, positions.len())?;
        let normals = vec![Vec3::ZERO; positions.len()];
        Ok(Self {
            positions,
            indices,
            normals,
        })
    }

    /// Build a mesh from an interleaved `[x0, y0, z0, x1, ...]` buffer.
    pub fn from_flat(positions: &[f32], indices: &[u32]) -> Result<Self, NormalError> {
        let positions: &[Vec3] = bytemuck::try_cast_slice(positions)
            .map_err(|_| NormalError::PositionBufferLength { len: positions.len() })?;
        Self::new(positions.to_vec(), indices.to_vec())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Rebuild `normals` from the current positions and triangles.
    pub fn recalculate_normals(&mut self, config: &SmoothingConfig) -> Result<SolveStats, NormalError> {
        trace!(
            "TriangleMesh::recalculate_normals: {} vertices, {} triangles",
            self.vertex_count(),
            self.triangle_count()
        );
        let (normals, stats) = recalculate_normals_with_stats(&self.positions, &self.indices, config)?;
        self.normals = normals;
        Ok(stats)
    }

    /// Normal buffer as tightly packed `f32` xyz triples, ready for upload.
    pub fn normals_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }
}
