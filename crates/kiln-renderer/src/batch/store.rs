use bytemuck::Zeroable;

use super::BatchError;
use crate::vertex::{Vertex, VERTICES_PER_QUAD};

/// Fixed-capacity vertex storage with a bounds-checked write cursor.
///
/// The store is "mapped" between [`begin_write`](Self::begin_write) and
/// [`end_write`](Self::end_write). Writes outside that window, or past
/// capacity, are rejected instead of touching memory they do not own.
#[derive(Debug)]
pub struct VertexStore {
    vertices: Vec<Vertex>,
    cursor: usize,
    mapped: bool,
}

impl VertexStore {
    pub fn new(capacity: usize) -> Result<Self, BatchError> {
        if capacity == 0 {
            return Err(BatchError::ZeroCapacity);
        }
        Ok(Self {
            vertices: vec![Vertex::zeroed(); capacity],
            cursor: 0,
            mapped: false,
        })
    }

    /// Open the store for writing and rewind the cursor to the start.
    pub fn begin_write(&mut self) -> Result<(), BatchError> {
        if self.mapped {
            return Err(BatchError::AlreadyMapped);
        }
        self.mapped = true;
        self.cursor = 0;
        Ok(())
    }

    /// Append the four corners of one quad.
    pub fn write_quad(&mut self, quad: &[Vertex; VERTICES_PER_QUAD]) -> Result<(), BatchError> {
        if !self.mapped {
            return Err(BatchError::NotMapped);
        }
        let end = self.cursor + VERTICES_PER_QUAD;
        if end > self.vertices.len() {
            return Err(BatchError::VertexOverflow {
                capacity: self.vertices.len(),
            });
        }
        self.vertices[self.cursor..end].copy_from_slice(quad);
        self.cursor = end;
        Ok(())
    }

    /// Close the store and return the span written since `begin_write`.
    pub fn end_write(&mut self) -> Result<&[Vertex], BatchError> {
        if !self.mapped {
            return Err(BatchError::NotMapped);
        }
        self.mapped = false;
        Ok(&self.vertices[..self.cursor])
    }

    /// Vertices written in the current (or most recent) pass.
    pub fn written(&self) -> &[Vertex] {
        &self.vertices[..self.cursor]
    }

    pub fn remaining_quads(&self) -> usize {
        (self.vertices.len() - self.cursor) / VERTICES_PER_QUAD
    }

    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(x: f32) -> Vertex {
        Vertex {
            position: [x, 0.0, 0.0],
            ..Vertex::zeroed()
        }
    }

    fn quad(x: f32) -> [Vertex; 4] {
        [corner(x), corner(x + 1.0), corner(x + 2.0), corner(x + 3.0)]
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(VertexStore::new(0).unwrap_err(), BatchError::ZeroCapacity);
    }

    #[test]
    fn write_requires_mapping() {
        let mut store = VertexStore::new(8).unwrap();
        assert_eq!(store.write_quad(&quad(0.0)), Err(BatchError::NotMapped));
        assert_eq!(store.end_write().unwrap_err(), BatchError::NotMapped);
    }

    #[test]
    fn double_begin_rejected() {
        let mut store = VertexStore::new(8).unwrap();
        store.begin_write().unwrap();
        assert_eq!(store.begin_write(), Err(BatchError::AlreadyMapped));
    }

    #[test]
    fn written_span_tracks_cursor() {
        let mut store = VertexStore::new(8).unwrap();
        store.begin_write().unwrap();
        store.write_quad(&quad(0.0)).unwrap();
        assert_eq!(store.remaining_quads(), 1);
        let written = store.end_write().unwrap();
        assert_eq!(written.len(), 4);
        assert_eq!(written[3].position[0], 3.0);
    }

    #[test]
    fn overflow_leaves_store_untouched() {
        let mut store = VertexStore::new(4).unwrap();
        store.begin_write().unwrap();
        store.write_quad(&quad(0.0)).unwrap();
        assert_eq!(
            store.write_quad(&quad(10.0)),
            Err(BatchError::VertexOverflow { capacity: 4 })
        );
        assert_eq!(store.written().len(), 4);
        assert_eq!(store.written()[0].position[0], 0.0);
    }

    #[test]
    fn begin_rewinds_cursor() {
        let mut store = VertexStore::new(8).unwrap();
        store.begin_write().unwrap();
        store.write_quad(&quad(0.0)).unwrap();
        store.end_write().unwrap();
        store.begin_write().unwrap();
        assert!(store.written().is_empty());
        assert_eq!(store.remaining_quads(), 2);
    }

    #[test]
    fn partial_quad_capacity_rounds_down() {
        let store = VertexStore::new(7).unwrap();
        assert_eq!(store.remaining_quads(), 1);
        assert_eq!(store.capacity(), 7);
    }
}
