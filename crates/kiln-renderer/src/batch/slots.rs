use kiln_common::TextureId;

/// Texture units available to a single batch.
pub const MAX_TEXTURE_SLOTS: usize = 32;

/// Returned when a texture needs a slot but all of them are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("all {MAX_TEXTURE_SLOTS} texture slots are in use")]
pub struct SlotsFull;

/// Slot number stored in a vertex.
///
/// Slot 0 is reserved for untextured quads; slot `k > 0` samples texture
/// unit `k - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureSlot(u32);

impl TextureSlot {
    pub const UNTEXTURED: Self = Self(0);

    pub const fn index(self) -> u32 {
        self.0
    }

    /// Texture unit this slot samples, or `None` for untextured.
    pub const fn unit(self) -> Option<u32> {
        self.0.checked_sub(1)
    }

    pub fn as_vertex_value(self) -> f32 {
        self.0 as f32
    }
}

/// Ordered list of textures referenced by the current batch.
///
/// Entry `i` is bound to texture unit `i` at flush time. Entries are unique
/// and the list never exceeds [`MAX_TEXTURE_SLOTS`].
#[derive(Debug, Default)]
pub struct TextureSlots {
    bound: Vec<TextureId>,
}

impl TextureSlots {
    pub fn new() -> Self {
        Self {
            bound: Vec::with_capacity(MAX_TEXTURE_SLOTS),
        }
    }

    /// Find or assign the slot for `texture`.
    ///
    /// `None` always maps to [`TextureSlot::UNTEXTURED`] and never consumes a
    /// slot. A texture already in the table keeps its slot. A new texture is
    /// appended, unless the table is full.
    pub fn slot_for(&mut self, texture: Option<TextureId>) -> Result<TextureSlot, SlotsFull> {
        let Some(texture) = texture else {
            return Ok(TextureSlot::UNTEXTURED);
        };
        if let Some(i) = self.bound.iter().position(|&t| t == texture) {
            return Ok(TextureSlot(i as u32 + 1));
        }
        if self.bound.len() >= MAX_TEXTURE_SLOTS {
            return Err(SlotsFull);
        }
        self.bound.push(texture);
        Ok(TextureSlot(self.bound.len() as u32))
    }

    /// Whether `slot_for(texture)` would fail with [`SlotsFull`].
    pub fn would_overflow(&self, texture: Option<TextureId>) -> bool {
        match texture {
            Some(texture) => {
                self.bound.len() >= MAX_TEXTURE_SLOTS && !self.bound.contains(&texture)
            }
            None => false,
        }
    }

    pub fn bound(&self) -> &[TextureId] {
        &self.bound
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    pub fn clear(&mut self) {
        self.bound.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tex(n: u32) -> Option<TextureId> {
        Some(TextureId::new(n))
    }

    #[test]
    fn untextured_never_consumes_a_slot() {
        let mut slots = TextureSlots::new();
        assert_eq!(slots.slot_for(None), Ok(TextureSlot::UNTEXTURED));
        assert!(slots.is_empty());
    }

    #[test]
    fn slots_are_one_based_in_first_use_order() {
        let mut slots = TextureSlots::new();
        assert_eq!(slots.slot_for(tex(40)).unwrap().index(), 1);
        assert_eq!(slots.slot_for(tex(7)).unwrap().index(), 2);
        assert_eq!(slots.slot_for(tex(40)).unwrap().index(), 1);
        assert_eq!(slots.bound(), &[TextureId::new(40), TextureId::new(7)]);
    }

    #[test]
    fn thirty_third_texture_is_rejected() {
        let mut slots = TextureSlots::new();
        for n in 0..32 {
            slots.slot_for(tex(n)).unwrap();
        }
        assert!(slots.would_overflow(tex(99)));
        assert_eq!(slots.slot_for(tex(99)), Err(SlotsFull));
        assert!(!slots.would_overflow(tex(31)));
        assert!(!slots.would_overflow(None));
        // Existing textures still resolve when full.
        assert_eq!(slots.slot_for(tex(31)).unwrap().index(), 32);
        assert_eq!(slots.slot_for(None), Ok(TextureSlot::UNTEXTURED));
    }

    #[test]
    fn unit_is_slot_minus_one() {
        let mut slots = TextureSlots::new();
        let slot = slots.slot_for(tex(5)).unwrap();
        assert_eq!(slot.unit(), Some(0));
        assert_eq!(TextureSlot::UNTEXTURED.unit(), None);
        assert_eq!(slot.as_vertex_value(), 1.0);
    }

    #[test]
    fn clear_empties_table() {
        let mut slots = TextureSlots::new();
        slots.slot_for(tex(1)).unwrap();
        slots.clear();
        assert_eq!(slots.len(), 0);
        assert_eq!(slots.slot_for(tex(2)).unwrap().index(), 1);
    }
}
