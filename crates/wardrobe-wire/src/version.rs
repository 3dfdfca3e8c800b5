//! Wire format versions
//!
//! Every supported layout is one variant. The leading byte of a payload
//! selects the variant before anything else is parsed.

use std::fmt;

use wardrobe_core::CustomizeIndex;

/// Customize indices stored by V1 (face paint came later)
const V1_CUSTOMIZE: &[CustomizeIndex] = &[
    CustomizeIndex::Race,
    CustomizeIndex::Gender,
    CustomizeIndex::BodyType,
    CustomizeIndex::Height,
    CustomizeIndex::Clan,
    CustomizeIndex::Face,
    CustomizeIndex::Hairstyle,
    CustomizeIndex::Highlights,
    CustomizeIndex::SkinColor,
    CustomizeIndex::EyeColorRight,
    CustomizeIndex::HairColor,
    CustomizeIndex::HighlightsColor,
    CustomizeIndex::FacialFeatures,
    CustomizeIndex::TattooColor,
    CustomizeIndex::Eyebrows,
    CustomizeIndex::EyeColorLeft,
    CustomizeIndex::EyeShape,
    CustomizeIndex::Nose,
    CustomizeIndex::Jaw,
    CustomizeIndex::Mouth,
    CustomizeIndex::LipColor,
    CustomizeIndex::MuscleMass,
    CustomizeIndex::TailShape,
    CustomizeIndex::BustSize,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WireVersion {
    /// Character save: 16-bit items, no face paint, no wetness, no model
    V1,
    /// 32-bit items, full customize block, wetness
    V2,
    /// V2 plus model id
    V3,
    /// Per-field mask bits and application identifier
    V4,
}

impl WireVersion {
    pub const CURRENT: WireVersion = WireVersion::V4;

    pub const ALL: [WireVersion; 4] = [
        WireVersion::V1,
        WireVersion::V2,
        WireVersion::V3,
        WireVersion::V4,
    ];

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            1 => Some(WireVersion::V1),
            2 => Some(WireVersion::V2),
            3 => Some(WireVersion::V3),
            4 => Some(WireVersion::V4),
            _ => None,
        }
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        match self {
            WireVersion::V1 => 1,
            WireVersion::V2 => 2,
            WireVersion::V3 => 3,
            WireVersion::V4 => 4,
        }
    }

    /// Exact payload length in bytes
    pub fn encoded_len(self) -> usize {
        match self {
            WireVersion::V1 => 65,
            WireVersion::V2 => 91,
            WireVersion::V3 => 95,
            WireVersion::V4 => 101,
        }
    }

    /// Customize indices present in this layout, in wire order
    pub fn customize_indices(self) -> &'static [CustomizeIndex] {
        match self {
            WireVersion::V1 => V1_CUSTOMIZE,
            WireVersion::V2 | WireVersion::V3 | WireVersion::V4 => &CustomizeIndex::ALL,
        }
    }

    #[inline]
    pub fn has_wetness(self) -> bool {
        !matches!(self, WireVersion::V1)
    }

    #[inline]
    pub fn has_model_id(self) -> bool {
        matches!(self, WireVersion::V3 | WireVersion::V4)
    }

    /// Largest item id the layout can hold
    pub fn max_item_id(self) -> u32 {
        match self {
            WireVersion::V1 => u16::MAX as u32,
            WireVersion::V2 | WireVersion::V3 | WireVersion::V4 => u32::MAX,
        }
    }

    /// Legacy layouts group apply flags per slot and for all customization
    #[inline]
    pub fn is_legacy(self) -> bool {
        self != WireVersion::CURRENT
    }
}

impl fmt::Display for WireVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.to_byte())
    }
}
