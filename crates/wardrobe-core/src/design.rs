//! Designs - named (snapshot, mask) pairs
//!
//! All edits go through methods that refuse to touch a write-protected
//! design. `lock` and `unlock` are the only way to change protection.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    AppearanceSnapshot, ApplyMask, CustomizeIndex, DesignId, EquipSlot, MetaFlag, WardrobeError,
    WardrobeResult,
};

/// Seconds since the unix epoch
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Design {
    id: DesignId,
    name: String,
    description: String,
    tags: Vec<String>,
    created_at: u64,
    modified_at: u64,
    snapshot: AppearanceSnapshot,
    mask: ApplyMask,
}

impl Design {
    pub fn new(
        id: DesignId,
        name: impl Into<String>,
        snapshot: AppearanceSnapshot,
        mask: ApplyMask,
    ) -> Self {
        let now = unix_now();
        Design {
            id,
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            created_at: now,
            modified_at: now,
            snapshot,
            mask,
        }
    }

    /// Build an unnamed design around a decoded pair
    pub fn anonymous(snapshot: AppearanceSnapshot, mask: ApplyMask) -> Self {
        Design::new(DesignId::ZERO, String::new(), snapshot, mask)
    }

    /// Restore stored timestamps (library load)
    pub fn with_timestamps(mut self, created_at: u64, modified_at: u64) -> Self {
        self.created_at = created_at;
        self.modified_at = modified_at;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn id(&self) -> DesignId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[inline]
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    #[inline]
    pub fn modified_at(&self) -> u64 {
        self.modified_at
    }

    #[inline]
    pub fn snapshot(&self) -> &AppearanceSnapshot {
        &self.snapshot
    }

    #[inline]
    pub fn mask(&self) -> &ApplyMask {
        &self.mask
    }

    #[inline]
    pub fn is_write_protected(&self) -> bool {
        self.mask.write_protected
    }

    pub fn lock(&mut self) {
        self.mask.write_protected = true;
    }

    pub fn unlock(&mut self) {
        self.mask.write_protected = false;
    }

    fn edit<F>(&mut self, f: F) -> WardrobeResult<()>
    where
        F: FnOnce(&mut Self),
    {
        if self.mask.write_protected {
            return Err(WardrobeError::DesignProtected(self.id));
        }
        f(self);
        self.modified_at = unix_now().max(self.modified_at);
        Ok(())
    }

    pub fn rename(&mut self, name: impl Into<String>) -> WardrobeResult<()> {
        let name = name.into();
        self.edit(|d| d.name = name)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> WardrobeResult<()> {
        let description = description.into();
        self.edit(|d| d.description = description)
    }

    pub fn set_tags(&mut self, tags: Vec<String>) -> WardrobeResult<()> {
        self.edit(|d| d.tags = tags)
    }

    pub fn set_item(&mut self, slot: EquipSlot, id: u32) -> WardrobeResult<()> {
        self.edit(|d| {
            let item = d.snapshot.item(slot).with_id(id);
            d.snapshot.set_item(slot, item);
        })
    }

    pub fn set_stain(&mut self, slot: EquipSlot, stain: u8) -> WardrobeResult<()> {
        self.edit(|d| {
            let item = d.snapshot.item(slot).with_stain(stain);
            d.snapshot.set_item(slot, item);
        })
    }

    pub fn set_customize(&mut self, index: CustomizeIndex, value: u8) -> WardrobeResult<()> {
        self.edit(|d| d.snapshot.set_customize(index, value))
    }

    pub fn set_model_id(&mut self, model_id: u32) -> WardrobeResult<()> {
        self.edit(|d| d.snapshot.model_id = model_id)
    }

    pub fn set_meta(&mut self, flag: MetaFlag, value: bool) -> WardrobeResult<()> {
        self.edit(|d| d.snapshot.meta.set(flag, value))
    }

    /// Replace the apply bits; protection is kept as is
    pub fn set_mask(&mut self, mask: ApplyMask) -> WardrobeResult<()> {
        self.edit(|d| {
            let protected = d.mask.write_protected;
            d.mask = mask.with_protection(protected);
        })
    }
}
