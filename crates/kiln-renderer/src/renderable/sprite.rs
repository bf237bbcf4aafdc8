use glam::{Vec2, Vec3};
use kiln_common::{Color, TextureId};

use crate::batch::TextureSlot;
use crate::vertex::{Vertex, VERTICES_PER_QUAD};

/// Full-texture UVs in emission order: bottom-left, top-left, top-right,
/// bottom-right. Texture space has v pointing down.
pub const DEFAULT_UV: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
];

/// Axis-aligned quad anchored at its bottom-left corner.
///
/// `position.z` is a layering index copied into every vertex; draw order
/// is still submission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub position: Vec3,
    pub size: Vec2,
    pub color: Color,
    pub texture: Option<TextureId>,
    pub uv: [Vec2; 4],
}

impl Sprite {
    pub fn colored(position: Vec3, size: Vec2, color: Color) -> Self {
        Self {
            position,
            size,
            color,
            texture: None,
            uv: DEFAULT_UV,
        }
    }

    /// Textured sprite with a white tint.
    pub fn textured(position: Vec3, size: Vec2, texture: TextureId) -> Self {
        Self {
            position,
            size,
            color: Color::WHITE,
            texture: Some(texture),
            uv: DEFAULT_UV,
        }
    }

    /// Replace the UVs, given in corner emission order.
    pub fn with_uv(mut self, uv: [Vec2; 4]) -> Self {
        self.uv = uv;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The four corners, bottom-left first, going clockwise.
    pub(crate) fn vertices(&self, slot: TextureSlot) -> [Vertex; VERTICES_PER_QUAD] {
        let Vec3 { x, y, z } = self.position;
        let (w, h) = (self.size.x, self.size.y);
        let corners = [[x, y], [x, y + h], [x + w, y + h], [x + w, y]];
        let color = self.color.packed();
        let texture_slot = slot.as_vertex_value();
        std::array::from_fn(|i| Vertex {
            position: [corners[i][0], corners[i][1], z],
            color,
            uv: self.uv[i].to_array(),
            texture_slot,
        })
    }
}
