//! Demo scene: a backdrop of colored sprites, a row of generated textures
//! wide enough to overflow the texture slot table, and an optional label.

use std::rc::Rc;

use glam::{Vec2, Vec3};
use kiln_common::{Color, TextureId};
use kiln_config::schema::{KilnConfig, Projection};
use kiln_renderer::{
    BitmapFont, GlyphSource, GpuTextures, GridLayout, Group, Label, Layer, RendererError, Sprite,
};

/// Generated textures; more than one batch can bind.
pub const DEMO_TEXTURES: usize = 40;

const TEXTURE_SIZE: u32 = 8;
const BACKDROP_CELL: f32 = 48.0;
const TILE_SIZE: f32 = 28.0;
const MARGIN: f32 = 16.0;

pub struct DemoScene {
    textures: Vec<TextureId>,
    font: Option<Rc<dyn GlyphSource>>,
    projection: Projection,
    layer: Layer,
}

impl DemoScene {
    /// Create the scene's textures and font, then lay it out for `size`.
    pub fn new(gpu_textures: &mut GpuTextures, config: &KilnConfig, size: Vec2) -> Result<Self, RendererError> {
        let mut textures = Vec::with_capacity(DEMO_TEXTURES);
        for i in 0..DEMO_TEXTURES {
            let hue = i as f32 / DEMO_TEXTURES as f32;
            let pixels = checker_pixels(TEXTURE_SIZE, hue_color(hue), Color::WHITE);
            textures.push(gpu_textures.create_rgba8(TEXTURE_SIZE, TEXTURE_SIZE, &pixels)?);
        }

        let font: Option<Rc<dyn GlyphSource>> = match &config.font.atlas {
            Some(path) => {
                let atlas = gpu_textures.load(path)?;
                let layout = GridLayout::from_config(&config.font);
                Some(Rc::new(BitmapFont::grid(atlas, layout)))
            }
            None => None,
        };

        let mut scene = Self {
            textures,
            font,
            projection: config.renderer.projection,
            layer: Layer::new(),
        };
        scene.layout(size);
        tracing::info!(
            renderables = scene.layer.len(),
            quads = scene.quad_estimate(),
            "Demo scene built"
        );
        Ok(scene)
    }

    /// Rebuild the layer for a new viewport size.
    pub fn layout(&mut self, size: Vec2) {
        let origin = view_origin(self.projection, size);
        self.layer.clear();

        self.layer.add(backdrop(origin, size));

        let mut tiles = Group::new();
        let per_row = (((size.x - 2.0 * MARGIN) / TILE_SIZE).floor() as usize).max(1);
        for (i, &texture) in self.textures.iter().enumerate() {
            let col = (i % per_row) as f32;
            let row = (i / per_row) as f32;
            let position = origin + Vec2::new(MARGIN + col * TILE_SIZE, MARGIN + row * TILE_SIZE);
            tiles.add(Sprite::textured(
                position.extend(1.0),
                Vec2::splat(TILE_SIZE - 4.0),
                texture,
            ));
        }
        self.layer.add(tiles);

        if let Some(font) = &self.font {
            let pen = origin + Vec2::new(MARGIN, size.y - MARGIN - 32.0);
            self.layer.add(Label::new(
                "Kiln batch renderer",
                font.clone(),
                pen.extend(2.0),
                Color::WHITE,
            ));
        }
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn quad_estimate(&self) -> usize {
        self.layer.renderables().iter().map(|r| r.quad_estimate()).sum()
    }
}

/// World-space position of the viewport's bottom-left corner.
pub fn view_origin(projection: Projection, size: Vec2) -> Vec2 {
    match projection {
        Projection::Pixels => Vec2::ZERO,
        Projection::Centered => -size / 2.0,
    }
}

/// Grid of untextured cells tinted along both axes.
fn backdrop(origin: Vec2, size: Vec2) -> Group {
    let cols = (size.x / BACKDROP_CELL).ceil().max(1.0) as u32;
    let rows = (size.y / BACKDROP_CELL).ceil().max(1.0) as u32;
    let mut group = Group::new();
    for row in 0..rows {
        for col in 0..cols {
            let t = col as f32 / cols as f32;
            let shade = 0.25 + 0.5 * row as f32 / rows as f32;
            let color = scale(hue_color(t), shade);
            let position = origin + Vec2::new(col as f32, row as f32) * BACKDROP_CELL;
            group.add(Sprite::colored(
                Vec3::new(position.x, position.y, 0.0),
                Vec2::splat(BACKDROP_CELL - 2.0),
                color,
            ));
        }
    }
    group
}

/// Fully saturated color for `hue` in `[0, 1)`.
pub fn hue_color(hue: f32) -> Color {
    let h = hue.rem_euclid(1.0) * 6.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let to_u8 = |v: f32| (v * 255.0).round() as u8;
    Color::from_rgba(to_u8(r), to_u8(g), to_u8(b), 255)
}

fn scale(color: Color, factor: f32) -> Color {
    let s = |v: u8| (v as f32 * factor).round().clamp(0.0, 255.0) as u8;
    Color::from_rgba(s(color.r), s(color.g), s(color.b), color.a)
}

/// RGBA8 checkerboard of 1-pixel cells, `a` in the top-left.
pub fn checker_pixels(size: u32, a: Color, b: Color) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let c = if (x + y) % 2 == 0 { a } else { b };
            pixels.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use kiln_renderer::{BatchRenderer, RecordingBackend, Renderable};

    use super::*;

    #[test]
    fn checker_has_rgba_per_pixel() {
        let pixels = checker_pixels(4, Color::BLACK, Color::WHITE);
        assert_eq!(pixels.len(), 64);
        assert_eq!(&pixels[0..4], &[0, 0, 0, 255]);
        assert_eq!(&pixels[4..8], &[255, 255, 255, 255]);
    }

    #[test]
    fn hue_primaries() {
        assert_eq!(hue_color(0.0), Color::from_rgba(255, 0, 0, 255));
        assert_eq!(hue_color(1.0 / 3.0), Color::from_rgba(0, 255, 0, 255));
        assert_eq!(hue_color(2.0 / 3.0), Color::from_rgba(0, 0, 255, 255));
    }

    #[test]
    fn centered_origin_is_half_size_down_left() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(view_origin(Projection::Pixels, size), Vec2::ZERO);
        assert_eq!(view_origin(Projection::Centered, size), Vec2::new(-400.0, -300.0));
    }

    #[test]
    fn backdrop_covers_viewport() {
        let group = backdrop(Vec2::ZERO, Vec2::new(100.0, 50.0));
        // ceil(100 / 48) = 3 columns, ceil(50 / 48) = 2 rows
        assert_eq!(group.len(), 6);
    }

    #[test]
    fn forty_textures_need_two_batches() {
        let tiles: Group = (0..DEMO_TEXTURES as u32)
            .map(|i| Sprite::textured(Vec3::ZERO, Vec2::ONE, TextureId::new(i + 1)))
            .fold(Group::new(), |g, s| g.with(s));
        let mut layer = Layer::new();
        layer.add(Renderable::from(tiles));
        let mut renderer = BatchRenderer::new(RecordingBackend::new(), 1000).unwrap();

        layer.render(&mut renderer).unwrap();

        assert_eq!(renderer.backend().draw_calls(), vec![32 * 6, 8 * 6]);
        assert_eq!(renderer.stats().auto_flushes, 1);
    }
}
