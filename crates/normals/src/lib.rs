//! Vertex normal reconstruction for triangle meshes.
//!
//! Given positions and a triangle list, this crate rebuilds one normal per
//! vertex-buffer entry using:
//! - Area-weighted face normals (unnormalized cross products)
//! - Position welding, so seam duplicates are smoothed together without
//!   being merged in the output
//! - A smoothing angle that keeps hard edges hard
//! - An ignore factor that drops light contributions, letting large faces
//!   stay flat while small neighbors take the curvature
//!
//! # Architecture
//!
//! Everything is recomputed per call; no state survives between solves.
//!
//! ## Key Components
//!
//! - **Key**: [`VertexKey`], the rounded position used as spatial hash key
//! - **Face**: [`FaceNormal`], weighted and unit face normal per triangle
//! - **Weld**: [`WeldMap`], triangle corners grouped into logical points
//! - **Solver**: [`recalculate_normals`], the per-point weighted average
//! - **Mesh**: [`TriangleMesh`], an owned mesh that stores its normals
//!
//! The `bevy` feature adds `recalculate_bevy_normals` for Bevy meshes and
//! the `parallel` feature solves logical points on the rayon pool.

pub mod constants;
pub mod error;
pub mod face;
pub mod key;
pub mod mesh;
pub mod solver;
pub mod weld;

#[cfg(feature = "bevy")]
pub mod bevy_mesh;

pub use constants::{DOT_CLAMP, WELD_TOLERANCE};
pub use error::NormalError;
pub use face::FaceNormal;
pub use facetweld_config::SmoothingConfig;
pub use key::VertexKey;
pub use mesh::TriangleMesh;
pub use solver::{NormalSolver, SolveStats, recalculate_normals, recalculate_normals_with_stats};
pub use weld::{Corner, LogicalPoint, WeldMap};

#[cfg(feature = "bevy")]
pub use bevy_mesh::recalculate_bevy_normals;
