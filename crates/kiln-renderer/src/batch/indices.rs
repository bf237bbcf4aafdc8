use crate::vertex::{INDICES_PER_QUAD, VERTICES_PER_QUAD};

/// Per-quad index pattern: triangles (0, 1, 2) and (2, 3, 0).
pub const QUAD_INDEX_PATTERN: [u32; INDICES_PER_QUAD] = [0, 1, 2, 2, 3, 0];

/// Build the static index sequence for `max_quads` quads.
///
/// Quad `q` uses vertices `4q..4q + 3`. The result has exactly
/// `6 * max_quads` entries and never changes after upload.
pub fn generate_quad_indices(max_quads: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(max_quads as usize * INDICES_PER_QUAD);
    for quad in 0..max_quads {
        let base = quad * VERTICES_PER_QUAD as u32;
        indices.extend(QUAD_INDEX_PATTERN.iter().map(|i| base + i));
    }
    indices
}
