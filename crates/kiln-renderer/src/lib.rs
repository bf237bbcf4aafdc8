//! Batched 2D quad renderer.
//!
//! Quads (sprites and glyph runs) are accumulated into one vertex store and
//! drawn with a single indexed call per batch. Up to [`MAX_TEXTURE_SLOTS`]
//! distinct textures can be referenced by one batch; the renderer flushes
//! and starts over when a new texture would not fit.
//!
//! The batching core is backend-agnostic: it talks to a [`RenderBackend`].
//! [`RecordingBackend`] captures the command stream for tests, and
//! [`WgpuBackend`] drives a real GPU.

pub mod backend;
pub mod batch;
pub mod font;
pub mod gpu;
pub mod layer;
pub mod render_state;
pub mod renderable;
pub mod vertex;
pub mod wgpu_backend;

pub use backend::{BackendCommand, RecordingBackend, RenderBackend};
pub use batch::{
    BatchError, BatchRenderer, BatchStats, TextureSlot, TextureSlots, VertexStore,
    MAX_TEXTURE_SLOTS,
};
pub use font::{BitmapFont, Glyph, GlyphSource, GridLayout};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use layer::Layer;
pub use render_state::RenderState;
pub use renderable::{Group, Label, Renderable, Sprite};
pub use vertex::Vertex;
pub use wgpu_backend::{GpuTextures, WgpuBackend};
