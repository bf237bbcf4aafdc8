use std::fmt;
use std::rc::Rc;

use glam::Vec3;
use kiln_common::Color;

use crate::font::GlyphSource;

/// A run of text drawn from one font atlas.
///
/// `position` is the pen start: the left edge on the baseline.
#[derive(Clone)]
pub struct Label {
    pub text: String,
    pub font: Rc<dyn GlyphSource>,
    pub position: Vec3,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>, font: Rc<dyn GlyphSource>, position: Vec3, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            position,
            color,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("text", &self.text)
            .field("atlas", &self.font.atlas())
            .field("position", &self.position)
            .field("color", &self.color)
            .finish()
    }
}
