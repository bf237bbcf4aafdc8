//! A flat list of renderables drawn as one pass through a batch renderer.

use crate::backend::RenderBackend;
use crate::batch::{BatchError, BatchRenderer};
use crate::renderable::Renderable;

/// Owns its renderables and draws them in insertion order.
#[derive(Debug, Default)]
pub struct Layer {
    renderables: Vec<Renderable>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, renderable: impl Into<Renderable>) {
        self.renderables.push(renderable.into());
    }

    pub fn renderables(&self) -> &[Renderable] {
        &self.renderables
    }

    pub fn renderables_mut(&mut self) -> &mut Vec<Renderable> {
        &mut self.renderables
    }

    pub fn clear(&mut self) {
        self.renderables.clear();
    }

    pub fn len(&self) -> usize {
        self.renderables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }

    /// Run one full batch: begin, submit everything, end, flush.
    ///
    /// If a submit fails the batch is still closed and flushed, so the
    /// renderer is idle again, and the first error is returned.
    pub fn render<B: RenderBackend>(&self, renderer: &mut BatchRenderer<B>) -> Result<(), BatchError> {
        renderer.begin()?;
        let submitted = self
            .renderables
            .iter()
            .try_for_each(|r| renderer.submit_renderable(r));
        renderer.end()?;
        renderer.flush()?;
        if let Err(e) = &submitted {
            tracing::warn!(error = %e, "Layer render stopped early");
        }
        submitted
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};
    use kiln_common::{Color, TextureId};

    use super::*;
    use crate::backend::RecordingBackend;
    use crate::renderable::Sprite;

    fn sprite(texture: Option<u32>) -> Sprite {
        let s = Sprite::colored(Vec3::ZERO, Vec2::ONE, Color::WHITE);
        Sprite {
            texture: texture.map(TextureId::new),
            ..s
        }
    }

    #[test]
    fn render_draws_everything_and_leaves_renderer_idle() {
        let mut layer = Layer::new();
        layer.add(sprite(None));
        layer.add(sprite(Some(1)));
        let mut renderer = BatchRenderer::new(RecordingBackend::new(), 16).unwrap();

        layer.render(&mut renderer).unwrap();

        assert!(!renderer.is_begun());
        assert_eq!(renderer.backend().draw_calls(), vec![12]);
        assert_eq!(renderer.index_count(), 0);
    }

    #[test]
    fn render_twice_draws_twice() {
        let mut layer = Layer::new();
        layer.add(sprite(None));
        let mut renderer = BatchRenderer::new(RecordingBackend::new(), 4).unwrap();
        layer.render(&mut renderer).unwrap();
        layer.render(&mut renderer).unwrap();
        assert_eq!(renderer.backend().draw_calls(), vec![6, 6]);
    }

    #[test]
    fn overflow_still_closes_the_batch() {
        let mut layer = Layer::new();
        for _ in 0..3 {
            layer.add(sprite(None));
        }
        let mut renderer = BatchRenderer::new(RecordingBackend::new(), 2).unwrap();

        let result = layer.render(&mut renderer);

        assert_eq!(result, Err(BatchError::VertexOverflow { capacity: 8 }));
        assert!(!renderer.is_begun());
        assert_eq!(renderer.backend().draw_calls(), vec![12]);
    }

    #[test]
    fn empty_layer_issues_no_draw() {
        let layer = Layer::new();
        let mut renderer = BatchRenderer::new(RecordingBackend::new(), 4).unwrap();
        layer.render(&mut renderer).unwrap();
        assert!(renderer.backend().draw_calls().is_empty());
        assert!(layer.is_empty());
    }
}
