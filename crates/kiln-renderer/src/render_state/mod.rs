//! Top-level render state: GPU context plus the batch renderer.

mod frame;
mod helpers;
mod state;

pub use state::RenderState;
