//! Overlay merge - apply a design's masked fields onto a target snapshot

use tracing::debug;
use wardrobe_core::{
    ActorId, AppearanceSnapshot, ApplyMask, CustomizeIndex, Design, DesignId, EquipItem,
    EquipSlot, MetaFlag, WardrobeError, WardrobeResult,
};

/// Merge behaviour switches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    /// A nonzero, applied model id suppresses every customize field
    pub model_overrides_customize: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            model_overrides_customize: true,
        }
    }
}

/// Overlay engine
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayEngine {
    config: OverlayConfig,
}

impl OverlayEngine {
    pub fn new(config: OverlayConfig) -> Self {
        OverlayEngine { config }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Merge `design` onto `target`. Pure; never fails.
    pub fn apply(&self, target: &AppearanceSnapshot, design: &Design) -> AppearanceSnapshot {
        self.merge(target, design.snapshot(), design.mask())
    }

    /// Merge, refusing when the target actor is held by a write-protected design
    pub fn apply_guarded(
        &self,
        actor: &ActorId,
        target: &AppearanceSnapshot,
        protection: Option<DesignId>,
        design: &Design,
    ) -> WardrobeResult<AppearanceSnapshot> {
        if let Some(holder) = protection {
            return Err(WardrobeError::Protected {
                actor: actor.clone(),
                design: holder,
            });
        }
        Ok(self.apply(target, design))
    }

    /// Field-by-field merge in canonical order
    pub fn merge(
        &self,
        target: &AppearanceSnapshot,
        source: &AppearanceSnapshot,
        mask: &ApplyMask,
    ) -> AppearanceSnapshot {
        let mut result = *target;

        for slot in EquipSlot::ALL {
            let current = target.item(slot);
            let incoming = source.item(slot);
            let id = if mask.item(slot) { incoming.id } else { current.id };
            let stain = if mask.stain(slot) {
                incoming.stain
            } else {
                current.stain
            };
            result.set_item(slot, EquipItem::new(id, stain));
        }

        let model_override =
            self.config.model_overrides_customize && mask.model() && source.model_id != 0;
        if model_override {
            debug!(
                model = source.model_id,
                "non-human model applied, keeping target customization"
            );
        } else {
            for index in CustomizeIndex::ALL {
                if mask.customize(index) {
                    result.set_customize(index, source.customize(index));
                }
            }
        }

        if mask.model() {
            result.model_id = source.model_id;
        }

        for flag in MetaFlag::ALL {
            if mask.meta(flag) {
                result.meta.set(flag, source.meta.get(flag));
            }
        }

        result
    }
}

/// Number of fields that differ between two snapshots
pub fn changed_fields(a: &AppearanceSnapshot, b: &AppearanceSnapshot) -> usize {
    let equip = EquipSlot::ALL
        .iter()
        .map(|&s| {
            let (x, y) = (a.item(s), b.item(s));
            usize::from(x.id != y.id) + usize::from(x.stain != y.stain)
        })
        .sum::<usize>();
    let customize = CustomizeIndex::ALL
        .iter()
        .filter(|&&i| a.customize(i) != b.customize(i))
        .count();
    let meta = MetaFlag::ALL
        .iter()
        .filter(|&&f| a.meta.get(f) != b.meta.get(f))
        .count();
    equip + customize + usize::from(a.model_id != b.model_id) + meta
}
