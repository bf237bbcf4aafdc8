use std::fmt;

/// Opaque handle to a texture owned by a backend's texture registry.
///
/// Handles are stable for the lifetime of the texture they name. The
/// "no texture" case is expressed as `Option<TextureId>::None`, never as
/// a reserved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(u32);

impl TextureId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tex#{}", self.0)
    }
}
