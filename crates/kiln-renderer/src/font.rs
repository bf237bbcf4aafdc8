//! Glyph metrics and the bitmap fonts that provide them.

use std::collections::HashMap;

use glam::Vec2;
use kiln_common::TextureId;

/// Metrics and atlas coordinates for one character.
///
/// `offset` is measured from the pen position to the glyph's top-left
/// corner in world units (y up). `uv_min` is the top-left of the glyph in
/// the atlas and `uv_max` the bottom-right, in texture space (v down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub offset: Vec2,
    pub size: Vec2,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
    pub advance: f32,
}

/// Anything that can lay out text from a single atlas texture.
pub trait GlyphSource {
    /// The atlas texture every glyph samples from.
    fn atlas(&self) -> TextureId;

    /// Metrics for `c`, or `None` if the font has no glyph for it.
    fn glyph(&self, c: char) -> Option<Glyph>;

    /// Horizontal adjustment applied between `prev` and `c`.
    fn kerning(&self, _prev: char, _c: char) -> f32 {
        0.0
    }
}

/// Fixed-cell atlas description: `columns × rows` equally sized cells,
/// filled left to right and top to bottom starting at `first_char`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub first_char: u32,
    /// Glyph quad size in world units.
    pub glyph_size: Vec2,
    pub advance: f32,
}

impl GridLayout {
    pub fn from_config(config: &kiln_config::schema::FontConfig) -> Self {
        let glyph_size = Vec2::new(config.glyph_width as f32, config.glyph_height as f32);
        Self {
            columns: config.columns,
            rows: config.rows,
            first_char: config.first_char,
            glyph_size,
            advance: glyph_size.x + config.tracking as f32,
        }
    }
}

/// In-memory glyph table backed by one atlas texture.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    atlas: TextureId,
    glyphs: HashMap<char, Glyph>,
    kerning: HashMap<(char, char), f32>,
}

impl BitmapFont {
    pub fn new(atlas: TextureId) -> Self {
        Self {
            atlas,
            glyphs: HashMap::new(),
            kerning: HashMap::new(),
        }
    }

    /// Build a font from a grid atlas.
    ///
    /// Cells whose code point is not a valid `char` are left out. Glyphs sit
    /// on the pen's baseline: their top edge is `glyph_size.y` above it.
    pub fn grid(atlas: TextureId, layout: GridLayout) -> Self {
        let mut font = Self::new(atlas);
        if layout.columns == 0 || layout.rows == 0 {
            return font;
        }
        let cell = Vec2::new(1.0 / layout.columns as f32, 1.0 / layout.rows as f32);
        for index in 0..layout.columns * layout.rows {
            let Some(c) = layout
                .first_char
                .checked_add(index)
                .and_then(char::from_u32)
            else {
                continue;
            };
            let col = (index % layout.columns) as f32;
            let row = (index / layout.columns) as f32;
            let uv_min = Vec2::new(col * cell.x, row * cell.y);
            font.insert_glyph(
                c,
                Glyph {
                    offset: Vec2::new(0.0, layout.glyph_size.y),
                    size: layout.glyph_size,
                    uv_min,
                    uv_max: uv_min + cell,
                    advance: layout.advance,
                },
            );
        }
        tracing::debug!(
            atlas = %atlas,
            glyphs = font.len(),
            "built grid font"
        );
        font
    }

    pub fn insert_glyph(&mut self, c: char, glyph: Glyph) {
        self.glyphs.insert(c, glyph);
    }

    pub fn set_kerning(&mut self, prev: char, c: char, amount: f32) {
        self.kerning.insert((prev, c), amount);
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphSource for BitmapFont {
    fn atlas(&self) -> TextureId {
        self.atlas
    }

    fn glyph(&self, c: char) -> Option<Glyph> {
        self.glyphs.get(&c).copied()
    }

    fn kerning(&self, prev: char, c: char) -> f32 {
        self.kerning.get(&(prev, c)).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout {
            columns: 16,
            rows: 16,
            first_char: 0,
            glyph_size: Vec2::new(8.0, 16.0),
            advance: 8.0,
        }
    }

    #[test]
    fn grid_covers_every_cell() {
        let font = BitmapFont::grid(TextureId::new(1), layout());
        assert_eq!(font.len(), 256);
        assert_eq!(font.atlas(), TextureId::new(1));
    }

    #[test]
    fn grid_uv_for_letter_a() {
        // 'A' = 65 -> column 1, row 4.
        let font = BitmapFont::grid(TextureId::new(1), layout());
        let glyph = font.glyph('A').unwrap();
        assert_eq!(glyph.uv_min, Vec2::new(1.0 / 16.0, 4.0 / 16.0));
        assert_eq!(glyph.uv_max, Vec2::new(2.0 / 16.0, 5.0 / 16.0));
        assert_eq!(glyph.offset, Vec2::new(0.0, 16.0));
        assert_eq!(glyph.advance, 8.0);
    }

    #[test]
    fn grid_skips_surrogates() {
        let font = BitmapFont::grid(
            TextureId::new(1),
            GridLayout {
                columns: 4,
                rows: 1,
                first_char: 0xD7FE,
                ..layout()
            },
        );
        // 0xD7FE, 0xD7FF valid; 0xD800, 0xD801 are surrogates.
        assert_eq!(font.len(), 2);
    }

    #[test]
    fn empty_grid_has_no_glyphs() {
        let font = BitmapFont::grid(
            TextureId::new(1),
            GridLayout {
                columns: 0,
                ..layout()
            },
        );
        assert!(font.is_empty());
    }

    #[test]
    fn kerning_defaults_to_zero() {
        let mut font = BitmapFont::new(TextureId::new(2));
        font.set_kerning('A', 'V', -1.5);
        assert_eq!(font.kerning('A', 'V'), -1.5);
        assert_eq!(font.kerning('V', 'A'), 0.0);
    }

    #[test]
    fn missing_glyph_is_none() {
        let font = BitmapFont::new(TextureId::new(2));
        assert!(font.glyph('x').is_none());
    }

    #[test]
    fn layout_from_config_adds_tracking() {
        let config = kiln_config::schema::FontConfig {
            glyph_width: 10.0,
            glyph_height: 20.0,
            tracking: 2.0,
            ..Default::default()
        };
        let layout = GridLayout::from_config(&config);
        assert_eq!(layout.glyph_size, Vec2::new(10.0, 20.0));
        assert_eq!(layout.advance, 12.0);
        assert_eq!(layout.columns, config.columns);
    }
}
