use kiln_common::TextureId;

use super::RenderBackend;
use crate::vertex::Vertex;

/// One call received by a [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    UploadIndices(Vec<u32>),
    UploadVertices(Vec<Vertex>),
    BindTexture { unit: u32, texture: TextureId },
    DrawIndexed { index_count: u32 },
}

/// Backend that records every call instead of drawing.
///
/// Used for headless runs and for asserting on the exact command stream.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<BackendCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[BackendCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Index counts of every draw, in order.
    pub fn draw_calls(&self) -> Vec<u32> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                BackendCommand::DrawIndexed { index_count } => Some(*index_count),
                _ => None,
            })
            .collect()
    }

    /// The most recent vertex upload, if any.
    pub fn last_vertices(&self) -> Option<&[Vertex]> {
        self.commands.iter().rev().find_map(|c| match c {
            BackendCommand::UploadVertices(v) => Some(v.as_slice()),
            _ => None,
        })
    }

    /// The index sequence uploaded at construction.
    pub fn indices(&self) -> Option<&[u32]> {
        self.commands.iter().find_map(|c| match c {
            BackendCommand::UploadIndices(i) => Some(i.as_slice()),
            _ => None,
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn upload_indices(&mut self, indices: &[u32]) {
        self.commands
            .push(BackendCommand::UploadIndices(indices.to_vec()));
    }

    fn upload_vertices(&mut self, vertices: &[Vertex]) {
        self.commands
            .push(BackendCommand::UploadVertices(vertices.to_vec()));
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureId) {
        self.commands
            .push(BackendCommand::BindTexture { unit, texture });
    }

    fn draw_indexed(&mut self, index_count: u32) {
        self.commands
            .push(BackendCommand::DrawIndexed { index_count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut backend = RecordingBackend::new();
        backend.upload_indices(&[0, 1, 2]);
        backend.bind_texture(0, TextureId::new(4));
        backend.draw_indexed(6);
        assert_eq!(
            backend.commands(),
            &[
                BackendCommand::UploadIndices(vec![0, 1, 2]),
                BackendCommand::BindTexture {
                    unit: 0,
                    texture: TextureId::new(4)
                },
                BackendCommand::DrawIndexed { index_count: 6 },
            ]
        );
        assert_eq!(backend.draw_calls(), vec![6]);
    }

    #[test]
    fn take_drains_commands() {
        let mut backend = RecordingBackend::new();
        backend.draw_indexed(12);
        assert_eq!(backend.take_commands().len(), 1);
        assert!(backend.commands().is_empty());
        assert!(backend.last_vertices().is_none());
    }
}
