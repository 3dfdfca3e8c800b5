//! Wardrobe service - apply, snapshot and revert against live actors

use std::borrow::Cow;

use tracing::{debug, info, warn};
use wardrobe_core::{
    ActorId, AppearanceSnapshot, ApplyMask, CustomizeIndex, DecodeError, Design, DesignId,
    EquipItem, EquipSlot, WardrobeError, WardrobeResult,
};
use wardrobe_state::{changed_fields, OverlayEngine, RevertStateStore};
use wardrobe_wire::{Codec, WireVersion};

use crate::{CustomizeCatalog, Interop, ItemCatalog, WardrobeConfig};

/// What an apply merges onto
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplyMode {
    /// Layer over whatever the actor currently shows
    #[default]
    Layer,
    /// Start from the recorded baseline, dropping earlier overrides
    Fresh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevertOutcome {
    /// The baseline was written back
    Reverted(AppearanceSnapshot),
    /// The actor carried no override
    NothingToRevert,
}

impl RevertOutcome {
    pub fn is_reverted(&self) -> bool {
        matches!(self, RevertOutcome::Reverted(_))
    }
}

/// Wardrobe service
pub struct Wardrobe<I: Interop> {
    interop: I,
    items: Option<Box<dyn ItemCatalog>>,
    customize: Option<Box<dyn CustomizeCatalog>>,
    codec: Codec,
    overlay: OverlayEngine,
    store: RevertStateStore,
    export_version: WireVersion,
}

impl<I: Interop> Wardrobe<I> {
    pub fn new(interop: I, config: &WardrobeConfig) -> WardrobeResult<Self> {
        config.validate()?;
        Ok(Wardrobe {
            interop,
            items: None,
            customize: None,
            codec: Codec::new(config.decode_options()),
            overlay: OverlayEngine::new(config.overlay_config()),
            store: RevertStateStore::new(),
            export_version: config.wire_version()?,
        })
    }

    pub fn with_item_catalog(mut self, catalog: impl ItemCatalog + 'static) -> Self {
        self.items = Some(Box::new(catalog));
        self
    }

    pub fn with_customize_catalog(mut self, catalog: impl CustomizeCatalog + 'static) -> Self {
        self.customize = Some(Box::new(catalog));
        self
    }

    /// Payload version this build writes by default
    pub fn api_version() -> u8 {
        WireVersion::CURRENT.to_byte()
    }

    pub fn interop(&self) -> &I {
        &self.interop
    }

    pub fn store(&self) -> &RevertStateStore {
        &self.store
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Live appearance as text, every field applied, under the configured
    /// application id
    pub fn get_snapshot(&self, actor: &ActorId) -> WardrobeResult<String> {
        let live = self.interop.read_live_snapshot(actor)?;
        Ok(self
            .codec
            .to_text_with(&live, &ApplyMask::all(), self.export_version))
    }

    /// Decode a text payload and apply it
    pub fn apply_text(
        &self,
        text: &str,
        actor: &ActorId,
        mode: ApplyMode,
    ) -> WardrobeResult<AppearanceSnapshot> {
        let decoded = self.codec.from_text(text)?;
        debug!(%actor, version = %decoded.version, "applying text payload");
        self.apply_design(actor, &decoded.into_design(), mode)
    }

    /// Merge `design` onto the actor and write the result back.
    ///
    /// The actor stays locked for the whole read-merge-write sequence. A
    /// failed write leaves the captured baseline in place.
    pub fn apply_design(
        &self,
        actor: &ActorId,
        design: &Design,
        mode: ApplyMode,
    ) -> WardrobeResult<AppearanceSnapshot> {
        let mut guard = self.store.lock(actor);
        let live = self.interop.read_live_snapshot(actor)?;

        guard.ensure_baseline(&live);
        let base = match mode {
            ApplyMode::Layer => live,
            ApplyMode::Fresh => guard.baseline().copied().unwrap_or(live),
        };

        let design = self.sanitize(design);
        let result = self
            .overlay
            .apply_guarded(actor, &base, guard.protection(), &design)?;

        self.interop.write_live_snapshot(actor, &result)?;
        if design.is_write_protected() {
            guard.protect(design.id());
        }

        info!(
            %actor,
            design = %design.id(),
            ?mode,
            changed = changed_fields(&live, &result),
            "applied design"
        );
        Ok(result)
    }

    /// Write the baseline back and return the actor to untouched
    pub fn revert_actor(&self, actor: &ActorId) -> WardrobeResult<RevertOutcome> {
        let mut guard = self.store.lock(actor);
        let protection = guard.protection();
        let baseline = match guard.revert() {
            Ok(baseline) => baseline,
            Err(err) if err.is_benign() => {
                warn!(%actor, "revert requested without an override");
                return Ok(RevertOutcome::NothingToRevert);
            }
            Err(err) => return Err(err),
        };

        if let Err(err) = self.interop.write_live_snapshot(actor, &baseline) {
            guard.ensure_baseline(&baseline);
            if let Some(design) = protection {
                guard.protect(design);
            }
            return Err(err);
        }

        info!(%actor, "reverted actor to baseline");
        Ok(RevertOutcome::Reverted(baseline))
    }

    /// The host no longer tracks the actor; forget its baseline.
    pub fn actor_removed(&self, actor: &ActorId) -> bool {
        let discarded = self.store.discard(actor);
        if discarded {
            debug!(%actor, "actor removed, baseline discarded");
        }
        discarded
    }

    /// Release a write-protection hold without reverting
    pub fn unlock_actor(&self, actor: &ActorId) -> Option<DesignId> {
        let released = self.store.unlock(actor);
        if let Some(design) = released {
            info!(%actor, %design, "released write protection");
        }
        released
    }

    pub fn is_overridden(&self, actor: &ActorId) -> bool {
        self.store.is_overridden(actor)
    }

    /// Re-encode a payload of any known version at `version`
    pub fn migrate(&self, text: &str, version: u8) -> WardrobeResult<String> {
        let target = WireVersion::from_byte(version)
            .ok_or(DecodeError::UnknownVersion(version))?;
        Ok(self.codec.migrate_text(text, target)?)
    }

    /// Display names of the items a design applies, when an item catalog is set
    pub fn item_names(&self, design: &Design) -> Vec<(EquipSlot, String)> {
        let Some(items) = self.items.as_deref() else {
            return Vec::new();
        };
        EquipSlot::ALL
            .into_iter()
            .filter(|&slot| design.mask().item(slot))
            .filter_map(|slot| {
                items
                    .item_name(slot, design.snapshot().item(slot).id)
                    .map(|name| (slot, name))
            })
            .collect()
    }

    /// Drop unknown items and invalid customization values from the applied
    /// copy. The design itself is left as is.
    fn sanitize<'d>(&self, design: &'d Design) -> Cow<'d, Design> {
        if self.items.is_none() && self.customize.is_none() {
            return Cow::Borrowed(design);
        }

        let mut snapshot = *design.snapshot();
        let mut mask = *design.mask();
        let mut corrected = false;

        if let Some(items) = self.items.as_deref() {
            for slot in EquipSlot::ALL {
                let item = snapshot.item(slot);
                if mask.item(slot) && !item.is_empty() && !items.contains(slot, item.id) {
                    warn!(
                        design = %design.id(),
                        %slot,
                        item = item.id,
                        "unknown item replaced with nothing"
                    );
                    snapshot.set_item(slot, EquipItem::NOTHING);
                    corrected = true;
                }
            }
        }

        if let Some(catalog) = self.customize.as_deref() {
            for index in CustomizeIndex::ALL {
                let value = snapshot.customize(index);
                if mask.customize(index) && !catalog.is_valid(&snapshot, index, value) {
                    warn!(
                        design = %design.id(),
                        index = index.name(),
                        value,
                        "invalid customization dropped"
                    );
                    mask.set_customize(index, false);
                    corrected = true;
                }
            }
        }

        if !corrected {
            return Cow::Borrowed(design);
        }
        Cow::Owned(Design::new(design.id(), design.name(), snapshot, mask))
    }
}
