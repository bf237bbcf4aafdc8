use glam::Vec3;
use kiln_common::{Color, TextureId};
use tracing::{debug, info, trace};

use super::{generate_quad_indices, BatchError, TextureSlot, TextureSlots, VertexStore};
use crate::backend::RenderBackend;
use crate::font::GlyphSource;
use crate::renderable::{Renderable, Sprite};
use crate::vertex::{Vertex, INDICES_PER_QUAD, VERTICES_PER_QUAD};

/// Largest batch whose index count and index values both fit in `u32`.
pub const MAX_QUADS: u32 = u32::MAX / INDICES_PER_QUAD as u32;

/// Counters accumulated since the last [`BatchRenderer::reset_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub flushes: u32,
    pub draw_calls: u32,
    /// Flushes forced by a full texture slot table.
    pub auto_flushes: u32,
    pub quads: u64,
}

/// Accumulates quads into one vertex store and drains them to a backend.
///
/// Lifecycle per batch: `begin`, any number of `submit`/`submit_text`,
/// `end`, `flush`. `flush` is only legal once the batch is closed.
pub struct BatchRenderer<B: RenderBackend> {
    backend: B,
    store: VertexStore,
    slots: TextureSlots,
    index_count: u32,
    max_quads: u32,
    stats: BatchStats,
}

impl<B: RenderBackend> BatchRenderer<B> {
    /// Create a renderer able to hold `max_quads` quads per batch.
    ///
    /// The full index sequence is generated and uploaded here, once.
    pub fn new(mut backend: B, max_quads: u32) -> Result<Self, BatchError> {
        if max_quads == 0 {
            return Err(BatchError::ZeroCapacity);
        }
        if max_quads > MAX_QUADS {
            return Err(BatchError::CapacityTooLarge {
                max_quads,
                limit: MAX_QUADS,
            });
        }
        let store = VertexStore::new(max_quads as usize * VERTICES_PER_QUAD)?;
        let indices = generate_quad_indices(max_quads);
        backend.upload_indices(&indices);

        info!(
            max_quads,
            vertices = store.capacity(),
            indices = indices.len(),
            "Batch renderer created"
        );

        Ok(Self {
            backend,
            store,
            slots: TextureSlots::new(),
            index_count: 0,
            max_quads,
            stats: BatchStats::default(),
        })
    }

    /// Open a batch for writing.
    pub fn begin(&mut self) -> Result<(), BatchError> {
        if self.store.is_mapped() {
            return Err(BatchError::AlreadyBegun);
        }
        self.store.begin_write()
    }

    /// Add one sprite to the open batch.
    pub fn submit(&mut self, sprite: &Sprite) -> Result<(), BatchError> {
        self.ensure_begun()?;
        let slot = self.reserve(sprite.texture, 1)?;
        self.push_quad(&sprite.vertices(slot))
    }

    /// Lay out `text` with `font` starting at `position` (pen on the
    /// baseline) and add one quad per glyph.
    ///
    /// Characters without a glyph are skipped and do not move the pen. The
    /// whole run is checked against remaining capacity after any slot flush,
    /// so a run is either written completely or not at all. Returns the
    /// number of quads written.
    pub fn submit_text(
        &mut self,
        text: &str,
        font: &dyn GlyphSource,
        position: Vec3,
        color: Color,
    ) -> Result<usize, BatchError> {
        self.ensure_begun()?;
        let visible = text.chars().filter(|&c| font.glyph(c).is_some()).count();
        if visible == 0 {
            return Ok(0);
        }
        let slot = self.reserve(Some(font.atlas()), visible)?;
        let texture_slot = slot.as_vertex_value();
        let packed = color.packed();
        let z = position.z;

        let mut x = position.x;
        let mut prev: Option<char> = None;
        for c in text.chars() {
            let previous = prev.replace(c);
            let Some(glyph) = font.glyph(c) else {
                continue;
            };
            if let Some(p) = previous {
                x += font.kerning(p, c);
            }

            let x0 = x + glyph.offset.x;
            let y0 = position.y + glyph.offset.y;
            let x1 = x0 + glyph.size.x;
            let y1 = y0 - glyph.size.y;
            let (u0, v0) = (glyph.uv_min.x, glyph.uv_min.y);
            let (u1, v1) = (glyph.uv_max.x, glyph.uv_max.y);

            let corner = |px: f32, py: f32, u: f32, v: f32| Vertex {
                position: [px, py, z],
                color: packed,
                uv: [u, v],
                texture_slot,
            };
            self.push_quad(&[
                corner(x0, y1, u0, v1),
                corner(x0, y0, u0, v0),
                corner(x1, y0, u1, v0),
                corner(x1, y1, u1, v1),
            ])?;

            x += glyph.advance;
        }
        Ok(visible)
    }

    /// Submit any renderable; groups are walked depth-first in order.
    pub fn submit_renderable(&mut self, renderable: &Renderable) -> Result<(), BatchError> {
        match renderable {
            Renderable::Sprite(sprite) => self.submit(sprite),
            Renderable::Label(label) => self
                .submit_text(&label.text, label.font.as_ref(), label.position, label.color)
                .map(|_| ()),
            Renderable::Group(group) => group.iter().try_for_each(|child| self.submit_renderable(child)),
        }
    }

    /// Close the batch and hand the written vertices to the backend.
    pub fn end(&mut self) -> Result<(), BatchError> {
        if !self.store.is_mapped() {
            return Err(BatchError::NotBegun);
        }
        let written = self.store.end_write()?;
        debug_assert_eq!(
            self.index_count as usize,
            written.len() / VERTICES_PER_QUAD * INDICES_PER_QUAD,
            "index count out of step with written vertices"
        );
        self.backend.upload_vertices(written);
        Ok(())
    }

    /// Bind the batch's textures, draw it and reset for the next batch.
    ///
    /// An empty batch issues no draw but is still reset.
    pub fn flush(&mut self) -> Result<(), BatchError> {
        if self.store.is_mapped() {
            return Err(BatchError::FlushWhileBegun);
        }

        if self.index_count > 0 {
            for (unit, &texture) in self.slots.bound().iter().enumerate() {
                self.backend.bind_texture(unit as u32, texture);
            }
            self.backend.draw_indexed(self.index_count);
            self.stats.draw_calls += 1;
        }

        debug!(
            indices = self.index_count,
            textures = self.slots.len(),
            "Batch flushed"
        );

        self.stats.flushes += 1;
        self.index_count = 0;
        self.slots.clear();
        Ok(())
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn quad_count(&self) -> u32 {
        self.index_count / INDICES_PER_QUAD as u32
    }

    /// Textures referenced by the open batch, in unit order.
    pub fn bound_textures(&self) -> &[TextureId] {
        self.slots.bound()
    }

    pub fn is_begun(&self) -> bool {
        self.store.is_mapped()
    }

    pub fn max_quads(&self) -> u32 {
        self.max_quads
    }

    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = BatchStats::default();
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn ensure_begun(&self) -> Result<(), BatchError> {
        if self.store.is_mapped() {
            Ok(())
        } else {
            Err(BatchError::NotBegun)
        }
    }

    fn ensure_room(&self, quads: usize) -> Result<(), BatchError> {
        if quads > self.store.remaining_quads() {
            return Err(BatchError::VertexOverflow {
                capacity: self.store.capacity(),
            });
        }
        Ok(())
    }

    /// Slot for `texture` with room for `quads` more quads.
    ///
    /// A full slot table is flushed before the room check, so the check sees
    /// the emptied store. Nothing is assigned when the room check fails.
    fn reserve(
        &mut self,
        texture: Option<TextureId>,
        quads: usize,
    ) -> Result<TextureSlot, BatchError> {
        if self.slots.would_overflow(texture) {
            trace!(
                quads = self.quad_count(),
                "Texture slots exhausted, flushing batch"
            );
            self.stats.auto_flushes += 1;
            self.end()?;
            self.flush()?;
            self.begin()?;
        }
        self.ensure_room(quads)?;
        Ok(self.slots.slot_for(texture)?)
    }

    fn push_quad(&mut self, quad: &[Vertex; VERTICES_PER_QUAD]) -> Result<(), BatchError> {
        self.store.write_quad(quad)?;
        self.index_count += INDICES_PER_QUAD as u32;
        self.stats.quads += 1;
        Ok(())
    }
}
