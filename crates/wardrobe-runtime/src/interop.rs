//! Host collaborator contracts

use wardrobe_core::{
    ActorId, AppearanceSnapshot, CustomizeIndex, EquipSlot, WardrobeResult,
};

/// Reads and writes live actor appearances in the host
pub trait Interop: Send + Sync {
    /// Current appearance. Fails with `ActorUnknown` when the actor is gone.
    fn read_live_snapshot(&self, actor: &ActorId) -> WardrobeResult<AppearanceSnapshot>;

    /// Push an appearance to the actor
    fn write_live_snapshot(
        &self,
        actor: &ActorId,
        snapshot: &AppearanceSnapshot,
    ) -> WardrobeResult<()>;
}

/// Item lookup used to validate and describe equipment
pub trait ItemCatalog: Send + Sync {
    fn contains(&self, slot: EquipSlot, id: u32) -> bool;

    fn item_name(&self, slot: EquipSlot, id: u32) -> Option<String>;
}

/// Validity of customization values for a given appearance
pub trait CustomizeCatalog: Send + Sync {
    fn is_valid(&self, snapshot: &AppearanceSnapshot, index: CustomizeIndex, value: u8) -> bool;
}

impl<T: Interop + ?Sized> Interop for &T {
    fn read_live_snapshot(&self, actor: &ActorId) -> WardrobeResult<AppearanceSnapshot> {
        (**self).read_live_snapshot(actor)
    }

    fn write_live_snapshot(
        &self,
        actor: &ActorId,
        snapshot: &AppearanceSnapshot,
    ) -> WardrobeResult<()> {
        (**self).write_live_snapshot(actor, snapshot)
    }
}

impl<T: Interop + ?Sized> Interop for std::sync::Arc<T> {
    fn read_live_snapshot(&self, actor: &ActorId) -> WardrobeResult<AppearanceSnapshot> {
        (**self).read_live_snapshot(actor)
    }

    fn write_live_snapshot(
        &self,
        actor: &ActorId,
        snapshot: &AppearanceSnapshot,
    ) -> WardrobeResult<()> {
        (**self).write_live_snapshot(actor, snapshot)
    }
}
