//! [`RenderBackend`](crate::backend::RenderBackend) implementation on wgpu.
//!
//! Batches flushed during a frame are staged on the CPU and replayed into a
//! render pass in flush order, one bind group per batch.

mod backend;
mod pipeline;
mod textures;

pub use backend::*;
pub use textures::*;
