//! Revert state store - one pristine baseline per actor
//!
//! Each actor has its own slot behind its own lock, so at most one mutation
//! is in flight per actor while different actors proceed in parallel. The
//! map lock is only held to look a slot up; it is never held while waiting
//! on a slot.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex};
use tracing::debug;
use wardrobe_core::{ActorId, AppearanceSnapshot, DesignId, WardrobeError, WardrobeResult};

#[derive(Debug, Default)]
struct Slot {
    baseline: Option<AppearanceSnapshot>,
    protected_by: Option<DesignId>,
    /// Removed from the map; late waiters must look the actor up again
    retired: bool,
}

impl Slot {
    fn is_untouched(&self) -> bool {
        self.baseline.is_none() && self.protected_by.is_none()
    }
}

type SlotRef = Arc<Mutex<Slot>>;

/// Per-actor baseline store
#[derive(Debug, Default)]
pub struct RevertStateStore {
    slots: Mutex<HashMap<ActorId, SlotRef>>,
}

/// Exclusive access to one actor's slot
///
/// Dropping the guard releases the actor. Slots left untouched are removed
/// from the store on release.
pub struct ActorGuard<'a> {
    store: &'a RevertStateStore,
    actor: ActorId,
    slot_ref: SlotRef,
    slot: ArcMutexGuard<RawMutex, Slot>,
}

impl RevertStateStore {
    pub fn new() -> Self {
        RevertStateStore::default()
    }

    fn existing(&self, actor: &ActorId) -> Option<SlotRef> {
        self.slots.lock().get(actor).cloned()
    }

    /// Lock one actor, blocking while another caller holds it
    pub fn lock(&self, actor: &ActorId) -> ActorGuard<'_> {
        loop {
            let slot_ref = self.slots.lock().entry(actor.clone()).or_default().clone();
            let slot = slot_ref.lock_arc();
            if !slot.retired {
                return ActorGuard {
                    store: self,
                    actor: actor.clone(),
                    slot_ref,
                    slot,
                };
            }
        }
    }

    /// Record `live` as the baseline unless one already exists.
    /// Returns true when a baseline was captured.
    pub fn ensure_baseline(&self, actor: &ActorId, live: &AppearanceSnapshot) -> bool {
        self.lock(actor).ensure_baseline(live)
    }

    /// Take the baseline and return the actor to Untouched
    pub fn revert(&self, actor: &ActorId) -> WardrobeResult<AppearanceSnapshot> {
        self.lock(actor).revert()
    }

    /// Drop any baseline without returning it
    pub fn discard(&self, actor: &ActorId) -> bool {
        match self.existing(actor) {
            Some(_) => self.lock(actor).discard(),
            None => false,
        }
    }

    /// Release a write-protection lock held on the actor
    pub fn unlock(&self, actor: &ActorId) -> Option<DesignId> {
        self.existing(actor)?;
        self.lock(actor).unlock()
    }

    /// Copy of the stored baseline, if any
    pub fn baseline(&self, actor: &ActorId) -> Option<AppearanceSnapshot> {
        let slot_ref = self.existing(actor)?;
        let slot = slot_ref.lock();
        slot.baseline
    }

    pub fn is_overridden(&self, actor: &ActorId) -> bool {
        self.baseline(actor).is_some()
    }

    pub fn protection(&self, actor: &ActorId) -> Option<DesignId> {
        let slot_ref = self.existing(actor)?;
        let slot = slot_ref.lock();
        slot.protected_by
    }

    /// Actors currently holding a baseline
    pub fn actors(&self) -> Vec<ActorId> {
        let slots: Vec<(ActorId, SlotRef)> = self
            .slots
            .lock()
            .iter()
            .map(|(actor, slot)| (actor.clone(), slot.clone()))
            .collect();
        slots
            .into_iter()
            .filter(|(_, slot)| slot.lock().baseline.is_some())
            .map(|(actor, _)| actor)
            .collect()
    }

    /// Number of actors holding a baseline
    pub fn len(&self) -> usize {
        self.actors().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> ActorGuard<'a> {
    #[inline]
    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    pub fn baseline(&self) -> Option<&AppearanceSnapshot> {
        self.slot.baseline.as_ref()
    }

    pub fn is_overridden(&self) -> bool {
        self.slot.baseline.is_some()
    }

    pub fn ensure_baseline(&mut self, live: &AppearanceSnapshot) -> bool {
        if self.slot.baseline.is_some() {
            return false;
        }
        debug!(actor = %self.actor, "captured appearance baseline");
        self.slot.baseline = Some(*live);
        true
    }

    pub fn revert(&mut self) -> WardrobeResult<AppearanceSnapshot> {
        let baseline = self
            .slot
            .baseline
            .take()
            .ok_or_else(|| WardrobeError::RevertMiss(self.actor.clone()))?;
        self.slot.protected_by = None;
        debug!(actor = %self.actor, "released appearance baseline");
        Ok(baseline)
    }

    pub fn discard(&mut self) -> bool {
        self.slot.protected_by = None;
        let existed = self.slot.baseline.take().is_some();
        if existed {
            debug!(actor = %self.actor, "discarded appearance baseline");
        }
        existed
    }

    pub fn protection(&self) -> Option<DesignId> {
        self.slot.protected_by
    }

    /// Hold the actor for a write-protected design
    pub fn protect(&mut self, design: DesignId) {
        self.slot.protected_by = Some(design);
    }

    pub fn unlock(&mut self) -> Option<DesignId> {
        self.slot.protected_by.take()
    }
}

impl Drop for ActorGuard<'_> {
    fn drop(&mut self) {
        if !self.slot.is_untouched() {
            return;
        }
        self.slot.retired = true;
        let mut slots = self.store.slots.lock();
        if slots
            .get(&self.actor)
            .is_some_and(|current| Arc::ptr_eq(current, &self.slot_ref))
        {
            slots.remove(&self.actor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use wardrobe_core::{EquipItem, EquipSlot};

    fn snapshot(id: u32) -> AppearanceSnapshot {
        let mut s = AppearanceSnapshot::default();
        s.set_item(EquipSlot::Body, EquipItem::new(id, 0));
        s
    }

    #[test]
    fn test_idempotent_baseline() {
        let store = RevertStateStore::new();
        let actor = ActorId::new("Minfilia", 1, 0);

        assert!(store.ensure_baseline(&actor, &snapshot(1)));
        assert!(!store.ensure_baseline(&actor, &snapshot(2)));
        assert_eq!(store.baseline(&actor), Some(snapshot(1)));
    }

    #[test]
    fn test_revert_symmetry() {
        let store = RevertStateStore::new();
        let actor = ActorId::new("Minfilia", 1, 0);

        store.ensure_baseline(&actor, &snapshot(1));
        assert_eq!(store.revert(&actor).unwrap(), snapshot(1));

        let err = store.revert(&actor).unwrap_err();
        assert!(matches!(err, WardrobeError::RevertMiss(ref a) if *a == actor));
        assert!(store.is_empty());
    }

    #[test]
    fn test_discard() {
        let store = RevertStateStore::new();
        let actor = ActorId::new("Urianger", 1, 5);

        assert!(!store.discard(&actor));
        store.ensure_baseline(&actor, &snapshot(1));
        assert!(store.discard(&actor));
        assert!(!store.is_overridden(&actor));
    }

    #[test]
    fn test_actors_are_independent() {
        let store = RevertStateStore::new();
        let a = ActorId::new("Guard", 1, 10);
        let b = ActorId::new("Guard", 1, 11);

        store.ensure_baseline(&a, &snapshot(1));
        store.ensure_baseline(&b, &snapshot(2));
        assert_eq!(store.len(), 2);

        store.revert(&a).unwrap();
        assert_eq!(store.actors(), vec![b.clone()]);
        assert_eq!(store.baseline(&b), Some(snapshot(2)));
    }

    #[test]
    fn test_protection_lifecycle() {
        let store = RevertStateStore::new();
        let actor = ActorId::new("Estinien", 1, 1);

        {
            let mut guard = store.lock(&actor);
            guard.ensure_baseline(&snapshot(1));
            guard.protect(DesignId::new(3));
        }
        assert_eq!(store.protection(&actor), Some(DesignId::new(3)));
        assert_eq!(store.unlock(&actor), Some(DesignId::new(3)));
        assert_eq!(store.protection(&actor), None);

        store.lock(&actor).protect(DesignId::new(4));
        store.revert(&actor).unwrap();
        assert_eq!(store.protection(&actor), None);
    }

    #[test]
    fn test_untouched_slots_are_released() {
        let store = RevertStateStore::new();
        let actor = ActorId::new("Alisaie", 1, 2);

        drop(store.lock(&actor));
        assert!(store.slots.lock().is_empty());
    }

    #[test]
    fn test_concurrent_first_capture_wins_once() {
        let store = Arc::new(RevertStateStore::new());
        let actor = ActorId::new("Thancred", 1, 4);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                let actor = actor.clone();
                thread::spawn(move || store.ensure_baseline(&actor, &snapshot(i)))
            })
            .collect();

        let captured = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|c| *c)
            .count();
        assert_eq!(captured, 1);
        assert!(store.is_overridden(&actor));
    }

    #[test]
    fn test_concurrent_capture_and_revert_cycles() {
        let store = Arc::new(RevertStateStore::new());
        let actor = ActorId::new("Y'shtola", 1, 9);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                let actor = actor.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        let mut guard = store.lock(&actor);
                        guard.ensure_baseline(&snapshot(i));
                        let taken = guard.revert().unwrap();
                        assert_eq!(taken, snapshot(i));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert!(store.is_empty());
        assert!(store.slots.lock().is_empty());
    }
}
