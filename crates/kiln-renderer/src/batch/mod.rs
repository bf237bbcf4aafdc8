//! Batch accumulation: the vertex store, the shared index pattern, the
//! per-batch texture slot table and the renderer that ties them together.

mod indices;
mod renderer;
mod slots;
mod store;

pub use indices::*;
pub use renderer::*;
pub use slots::*;
pub use store::*;

/// Contract violations reported by the batching core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("batch capacity must be at least one quad")]
    ZeroCapacity,

    #[error("batch capacity of {max_quads} quads exceeds the limit of {limit}")]
    CapacityTooLarge { max_quads: u32, limit: u32 },

    #[error("begin called while a batch is already open")]
    AlreadyBegun,

    #[error("no batch is open")]
    NotBegun,

    #[error("flush called before end")]
    FlushWhileBegun,

    #[error("vertex store is already mapped for writing")]
    AlreadyMapped,

    #[error("vertex store is not mapped for writing")]
    NotMapped,

    #[error("vertex store overflow: capacity is {capacity} vertices")]
    VertexOverflow { capacity: usize },

    #[error(transparent)]
    SlotsFull(#[from] SlotsFull),
}
