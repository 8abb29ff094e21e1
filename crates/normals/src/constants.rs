/// Scale applied to positions before rounding into a [`crate::VertexKey`].
///
/// 100000 keeps 5 decimal digits. This decides which vertex-buffer entries
/// are treated as the same point in space; it is fixed so repeated runs (and
/// other tools sharing the convention) cluster identically.
pub const WELD_TOLERANCE: f32 = 100_000.0;

/// Dot products are clamped to +/- this before `acos`.
pub const DOT_CLAMP: f32 = 0.99999;
