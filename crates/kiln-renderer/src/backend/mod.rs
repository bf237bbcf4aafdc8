//! The seam between the batching core and whatever executes draws.

mod recording;

pub use recording::*;

use kiln_common::TextureId;

use crate::vertex::Vertex;

/// Primitive operations the batch renderer issues.
///
/// Calls arrive in a fixed order: `upload_indices` once at construction,
/// then per batch one `upload_vertices`, zero or more `bind_texture` calls
/// and at most one `draw_indexed`.
pub trait RenderBackend {
    /// Store the static index sequence shared by every batch.
    fn upload_indices(&mut self, indices: &[u32]);

    /// Replace the vertex data for the batch about to be drawn.
    fn upload_vertices(&mut self, vertices: &[Vertex]);

    /// Bind `texture` to `unit` for the next draw.
    fn bind_texture(&mut self, unit: u32, texture: TextureId);

    /// Draw the first `index_count` indices against the uploaded vertices.
    fn draw_indexed(&mut self, index_count: u32);
}
