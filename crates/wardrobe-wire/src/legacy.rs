//! Legacy layouts (V1-V3)
//!
//! Common layout, all integers little-endian:
//! - Byte 0: Version
//! - Byte 1: Application flags
//! - Bytes 2-3: Equipment flags, bit i = slot i (item and stain together)
//! - Customize block (24 bytes in V1, 26 afterwards)
//! - 12 x (item id, stain); item ids are u16 in V1, u32 afterwards
//! - V3 only: model id (u32)
//! - State byte
//!
//! Apply flags are grouped, so decoding fans a single flag out to every
//! field it covers and encoding folds the mask back.

use tracing::{debug, warn};
use wardrobe_core::{
    AppearanceSnapshot, ApplyMask, DecodeError, EquipItem, EquipSlot, MetaFlag, MetaFlags,
};

use crate::reader::ByteReader;
use crate::{ApplicationFlags, StateFlags, WireVersion};

/// Meta flags with a legacy application bit, and the version that introduced it
const META_APPLICATION: [(MetaFlag, u8); 4] = [
    (MetaFlag::HatVisible, ApplicationFlags::HAT),
    (MetaFlag::VisorToggled, ApplicationFlags::VISOR),
    (MetaFlag::WeaponVisible, ApplicationFlags::WEAPON),
    (MetaFlag::Wet, ApplicationFlags::WETNESS),
];

fn application_flags(mask: &ApplyMask, version: WireVersion) -> ApplicationFlags {
    let mut flags = ApplicationFlags::NONE;
    flags.set(
        ApplicationFlags::CUSTOMIZE,
        mask.customize_all_of(version.customize_indices()),
    );
    for (meta, bit) in META_APPLICATION {
        if meta == MetaFlag::Wet && !version.has_wetness() {
            continue;
        }
        flags.set(bit, mask.meta(meta));
    }
    flags.set(ApplicationFlags::WRITE_PROTECTED, mask.write_protected);
    flags
}

fn state_flags(meta: MetaFlags, version: WireVersion) -> StateFlags {
    let mut flags = StateFlags::NONE;
    flags.set(StateFlags::HAT_HIDDEN, !meta.hat_visible);
    flags.set(StateFlags::VISOR_TOGGLED, meta.visor_toggled);
    flags.set(StateFlags::WEAPON_HIDDEN, !meta.weapon_visible);
    if version.has_wetness() {
        flags.set(StateFlags::WET, meta.is_wet);
    }
    flags
}

pub(crate) fn encode(
    snapshot: &AppearanceSnapshot,
    mask: &ApplyMask,
    version: WireVersion,
    buf: &mut Vec<u8>,
) {
    debug_assert!(version.is_legacy());

    buf.push(version.to_byte());
    buf.push(application_flags(mask, version).0);

    let equip_flags = EquipSlot::ALL
        .iter()
        .filter(|slot| mask.item(**slot))
        .fold(0u16, |bits, slot| bits | (1 << slot.index()));
    buf.extend_from_slice(&equip_flags.to_le_bytes());

    for &index in version.customize_indices() {
        buf.push(snapshot.customize(index));
    }

    for (slot, item) in snapshot.equipment() {
        let id = if item.id > version.max_item_id() {
            warn!(
                %slot,
                item = item.id,
                %version,
                "item id does not fit the legacy layout, writing an empty slot"
            );
            0
        } else {
            item.id
        };
        match version {
            WireVersion::V1 => buf.extend_from_slice(&(id as u16).to_le_bytes()),
            _ => buf.extend_from_slice(&id.to_le_bytes()),
        }
        buf.push(item.stain);
    }

    if version.has_model_id() {
        buf.extend_from_slice(&snapshot.model_id.to_le_bytes());
    } else if snapshot.model_id != 0 {
        warn!(
            model = snapshot.model_id,
            %version,
            "model id is not representable in the legacy layout, dropping it"
        );
    }

    buf.push(state_flags(snapshot.meta, version).0);
}

pub(crate) fn decode(
    data: &[u8],
    version: WireVersion,
) -> Result<(AppearanceSnapshot, ApplyMask), DecodeError> {
    let mut r = ByteReader::new(data, version);
    let mut snapshot = AppearanceSnapshot::default();
    let mut mask = ApplyMask::none();

    let _tag = r.read_u8()?;
    let application = ApplicationFlags::new(r.read_u8()?);
    let equip_flags = r.read_u16_le()?;

    for &index in version.customize_indices() {
        snapshot.set_customize(index, r.read_u8()?);
    }

    for slot in EquipSlot::ALL {
        let id = match version {
            WireVersion::V1 => r.read_u16_le()? as u32,
            _ => r.read_u32_le()?,
        };
        let stain = r.read_u8()?;
        snapshot.set_item(slot, EquipItem::new(id, stain));
        mask.set_slot(slot, equip_flags & (1 << slot.index()) != 0);
    }

    if version.has_model_id() {
        snapshot.model_id = r.read_u32_le()?;
    }

    let state = StateFlags::new(r.read_u8()?);
    snapshot.meta = MetaFlags {
        hat_visible: !state.contains(StateFlags::HAT_HIDDEN),
        visor_toggled: state.contains(StateFlags::VISOR_TOGGLED),
        weapon_visible: !state.contains(StateFlags::WEAPON_HIDDEN),
        is_wet: version.has_wetness() && state.contains(StateFlags::WET),
    };

    let apply_customize = application.contains(ApplicationFlags::CUSTOMIZE);
    for &index in version.customize_indices() {
        mask.set_customize(index, apply_customize);
    }
    if version.has_model_id() {
        mask.set_model(apply_customize);
    }
    for (meta, bit) in META_APPLICATION {
        if meta == MetaFlag::Wet && !version.has_wetness() {
            continue;
        }
        mask.set_meta(meta, application.contains(bit));
    }
    mask.write_protected = application.contains(ApplicationFlags::WRITE_PROTECTED);

    debug!(
        %version,
        consumed = r.position(),
        fields = mask.count(),
        "decoded legacy design"
    );
    Ok((snapshot, mask))
}
