//! Errors raised when the input buffers break the triangle-list contract.

use thiserror::Error;

/// Precondition failures for normal reconstruction.
///
/// Numerical edge cases (degenerate faces, odd settings) are never errors;
/// only buffers that would make the solver read out of bounds are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalError {
    #[error("Index count {len} is not divisible by 3")]
    IndexCountNotTriangles { len: usize },
    #[error("Index {index} at position {position} is out of range (vertex count: {vertex_count})")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("Interleaved position buffer length {len} is not divisible by 3")]
    PositionBufferLength { len: usize },
    #[error("Mesh has no position attribute")]
    MissingPositions,
    #[error("Mesh has no indices")]
    MissingIndices,
    #[error("Mesh positions are not Float32x3")]
    UnsupportedPositionFormat,
}

/// Check that `indices` describes whole triangles over `vertex_count` vertices.
pub fn validate_triangles(indices: &[u32], vertex_count: usize) -> Result<(), NormalError> {
    if indices.len() % 3 != 0 {
        return Err(NormalError::IndexCountNotTriangles { len: indices.len() });
    }

    if let Some((position, &index)) = indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index as usize >= vertex_count)
    {
        return Err(NormalError::IndexOutOfRange {
            position,
            index,
            vertex_count,
        });
    }

    Ok(())
}
