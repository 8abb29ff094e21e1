//! Rebuild normals directly on a Bevy mesh.

use bevy::mesh::{Indices, VertexAttributeValues};
use bevy::prelude::*;
use facetweld_config::SmoothingConfig;

use crate::error::NormalError;
use crate::solver::{SolveStats, recalculate_normals_with_stats};

/// Replace `ATTRIBUTE_NORMAL` of an indexed triangle-list mesh.
///
/// Vertex order and count are left untouched, so UV seams and other
/// duplicated vertices keep their own (possibly smoothed) normal.
pub fn recalculate_bevy_normals(
    mesh: &mut Mesh,
    config: &SmoothingConfig,
) -> Result<SolveStats, NormalError> {
    let positions: Vec<glam::Vec3> = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(values)) => {
            values.iter().map(|p| glam::Vec3::from_array(*p)).collect()
        }
        Some(_) => return Err(NormalError::UnsupportedPositionFormat),
        None => return Err(NormalError::MissingPositions),
    };

    let indices: Vec<u32> = match mesh.indices() {
        Some(Indices::U16(idx)) => idx.iter().map(|&i| i as u32).collect(),
        Some(Indices::U32(idx)) => idx.to_vec(),
        None => return Err(NormalError::MissingIndices),
    };

    let (normals, stats) = recalculate_normals_with_stats(&positions, &indices, config)?;
    let normals: Vec<[f32; 3]> = normals.iter().map(|n| n.to_array()).collect();
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);

    Ok(stats)
}
