//! Current layout (V4), 101 bytes:
//! - Byte 0: Version
//! - Byte 1: Application identifier
//! - Byte 2: Protection flags (bit 0 = write protected)
//! - Bytes 3-62: 12 x (item id u32 LE, stain u8)
//! - Bytes 63-88: Customize block
//! - Bytes 89-92: Model id (u32 LE)
//! - Byte 93: Meta flags
//! - Bytes 94-100: Mask bits, LSB-first: per slot (item, stain),
//!   customize, model, meta

use wardrobe_core::{
    AppearanceSnapshot, ApplyMask, CustomizeIndex, DecodeError, EquipItem, EquipSlot, MetaFlag,
    MetaFlags,
};

use crate::reader::ByteReader;
use crate::{MaskBits, WireVersion};

/// Identifies payloads written by this crate
pub const APPLICATION_ID: u8 = 0x47;

/// Number of mask bytes
pub const MASK_BYTES: usize = 7;

const PROTECTED: u8 = 0b0000_0001;

/// Decoded body plus the producer's application byte
pub(crate) type CurrentBody = (AppearanceSnapshot, ApplyMask, u8);

/// Decoding switches supplied by the caller's configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Application identifier this process expects
    pub application_id: u8,
    /// Accept payloads written by other applications
    pub accept_foreign: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            application_id: APPLICATION_ID,
            accept_foreign: false,
        }
    }
}

fn pack_mask(mask: &ApplyMask) -> MaskBits<MASK_BYTES> {
    let mut bits = MaskBits::new();
    for slot in EquipSlot::ALL {
        bits.push(mask.item(slot));
        bits.push(mask.stain(slot));
    }
    for index in CustomizeIndex::ALL {
        bits.push(mask.customize(index));
    }
    bits.push(mask.model());
    for flag in MetaFlag::ALL {
        bits.push(mask.meta(flag));
    }
    bits
}

fn unpack_mask(mut bits: MaskBits<MASK_BYTES>, write_protected: bool) -> ApplyMask {
    let mut mask = ApplyMask::none();
    for slot in EquipSlot::ALL {
        mask.set_item(slot, bits.read());
        mask.set_stain(slot, bits.read());
    }
    for index in CustomizeIndex::ALL {
        mask.set_customize(index, bits.read());
    }
    mask.set_model(bits.read());
    for flag in MetaFlag::ALL {
        mask.set_meta(flag, bits.read());
    }
    mask.write_protected = write_protected;
    mask
}

pub(crate) fn encode(
    snapshot: &AppearanceSnapshot,
    mask: &ApplyMask,
    application_id: u8,
    buf: &mut Vec<u8>,
) {
    buf.push(WireVersion::V4.to_byte());
    buf.push(application_id);
    buf.push(if mask.write_protected { PROTECTED } else { 0 });

    for (_, item) in snapshot.equipment() {
        buf.extend_from_slice(&item.id.to_le_bytes());
        buf.push(item.stain);
    }

    buf.extend_from_slice(snapshot.customize.as_bytes());
    buf.extend_from_slice(&snapshot.model_id.to_le_bytes());
    buf.push(snapshot.meta.to_bits());
    buf.extend_from_slice(pack_mask(mask).as_bytes());
}

pub(crate) fn decode(
    data: &[u8],
    options: &DecodeOptions,
) -> Result<CurrentBody, DecodeError> {
    let mut r = ByteReader::new(data, WireVersion::V4);
    let mut snapshot = AppearanceSnapshot::default();

    let _tag = r.read_u8()?;
    let application = r.read_u8()?;
    if application != options.application_id && !options.accept_foreign {
        return Err(DecodeError::ForeignApplication(application));
    }
    let protection = r.read_u8()?;

    for slot in EquipSlot::ALL {
        let id = r.read_u32_le()?;
        let stain = r.read_u8()?;
        snapshot.set_item(slot, EquipItem::new(id, stain));
    }

    snapshot.customize.0 = r.read_array()?;
    snapshot.model_id = r.read_u32_le()?;
    snapshot.meta = MetaFlags::from_bits(r.read_u8()?);

    let bits = MaskBits::from_bytes(r.read_array()?);
    let mask = unpack_mask(bits, protection & PROTECTED != 0);

    Ok((snapshot, mask, application))
}
