//! Apply mask - per-field "apply this value" selectors
//!
//! The mask mirrors `AppearanceSnapshot` field for field. A cleared bit means
//! the target keeps its own value for that field.

use crate::{CustomizeIndex, EquipSlot, MetaFlag};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApplyMask {
    items: [bool; EquipSlot::COUNT],
    stains: [bool; EquipSlot::COUNT],
    customize: [bool; CustomizeIndex::COUNT],
    model: bool,
    meta: [bool; MetaFlag::COUNT],
    /// Not a merge field: guards the owning design against edits
    pub write_protected: bool,
}

impl ApplyMask {
    /// Nothing applies
    pub fn none() -> Self {
        ApplyMask::default()
    }

    /// Every field applies; not write-protected
    pub fn all() -> Self {
        ApplyMask {
            items: [true; EquipSlot::COUNT],
            stains: [true; EquipSlot::COUNT],
            customize: [true; CustomizeIndex::COUNT],
            model: true,
            meta: [true; MetaFlag::COUNT],
            write_protected: false,
        }
    }

    /// Same apply bits with the given protection flag
    pub fn with_protection(mut self, write_protected: bool) -> Self {
        self.write_protected = write_protected;
        self
    }

    #[inline]
    pub fn item(&self, slot: EquipSlot) -> bool {
        self.items[slot.index()]
    }

    #[inline]
    pub fn set_item(&mut self, slot: EquipSlot, apply: bool) {
        self.items[slot.index()] = apply;
    }

    #[inline]
    pub fn stain(&self, slot: EquipSlot) -> bool {
        self.stains[slot.index()]
    }

    #[inline]
    pub fn set_stain(&mut self, slot: EquipSlot, apply: bool) {
        self.stains[slot.index()] = apply;
    }

    /// Set item and stain bits of a slot together
    #[inline]
    pub fn set_slot(&mut self, slot: EquipSlot, apply: bool) {
        self.set_item(slot, apply);
        self.set_stain(slot, apply);
    }

    #[inline]
    pub fn customize(&self, index: CustomizeIndex) -> bool {
        self.customize[index.index()]
    }

    #[inline]
    pub fn set_customize(&mut self, index: CustomizeIndex, apply: bool) {
        self.customize[index.index()] = apply;
    }

    pub fn set_all_customize(&mut self, apply: bool) {
        self.customize = [apply; CustomizeIndex::COUNT];
    }

    /// True when every index in `indices` applies
    pub fn customize_all_of(&self, indices: &[CustomizeIndex]) -> bool {
        indices.iter().all(|&i| self.customize(i))
    }

    pub fn any_customize(&self) -> bool {
        self.customize.iter().any(|&b| b)
    }

    #[inline]
    pub fn model(&self) -> bool {
        self.model
    }

    #[inline]
    pub fn set_model(&mut self, apply: bool) {
        self.model = apply;
    }

    #[inline]
    pub fn meta(&self, flag: MetaFlag) -> bool {
        self.meta[flag.index()]
    }

    #[inline]
    pub fn set_meta(&mut self, flag: MetaFlag, apply: bool) {
        self.meta[flag.index()] = apply;
    }

    /// No field applies (protection is ignored)
    pub fn is_empty(&self) -> bool {
        !self.items.iter().any(|&b| b)
            && !self.stains.iter().any(|&b| b)
            && !self.any_customize()
            && !self.model
            && !self.meta.iter().any(|&b| b)
    }

    /// Number of applying fields
    pub fn count(&self) -> usize {
        self.items.iter().filter(|&&b| b).count()
            + self.stains.iter().filter(|&&b| b).count()
            + self.customize.iter().filter(|&&b| b).count()
            + usize::from(self.model)
            + self.meta.iter().filter(|&&b| b).count()
    }
}
