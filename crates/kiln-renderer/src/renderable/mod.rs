//! Things a layer can hold and a batch renderer can draw.

mod group;
mod label;
mod sprite;

pub use group::*;
pub use label::*;
pub use sprite::*;

/// Closed set of drawables.
///
/// The batch renderer dispatches on the variant in
/// [`BatchRenderer::submit_renderable`](crate::batch::BatchRenderer::submit_renderable).
#[derive(Clone)]
pub enum Renderable {
    Sprite(Sprite),
    Label(Label),
    Group(Group),
}

impl Renderable {
    /// Quads this renderable emits when every glyph resolves.
    pub fn quad_estimate(&self) -> usize {
        match self {
            Renderable::Sprite(_) => 1,
            Renderable::Label(label) => label.text.chars().count(),
            Renderable::Group(group) => group.iter().map(Renderable::quad_estimate).sum(),
        }
    }
}

impl From<Sprite> for Renderable {
    fn from(sprite: Sprite) -> Self {
        Renderable::Sprite(sprite)
    }
}

impl From<Label> for Renderable {
    fn from(label: Label) -> Self {
        Renderable::Label(label)
    }
}

impl From<Group> for Renderable {
    fn from(group: Group) -> Self {
        Renderable::Group(group)
    }
}

impl std::fmt::Debug for Renderable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Renderable::Sprite(s) => f.debug_tuple("Sprite").field(s).finish(),
            Renderable::Label(l) => f.debug_tuple("Label").field(l).finish(),
            Renderable::Group(g) => f.debug_tuple("Group").field(g).finish(),
        }
    }
}
