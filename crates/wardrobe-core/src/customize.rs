//! Body customization indices
//!
//! Every index is stored as one opaque byte. Which values are legal depends on
//! race, clan and gender and is decided by an external catalog.

use std::fmt;

/// Customization index, in canonical wire order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CustomizeIndex {
    Race = 0,
    Gender = 1,
    BodyType = 2,
    Height = 3,
    Clan = 4,
    Face = 5,
    Hairstyle = 6,
    Highlights = 7,
    SkinColor = 8,
    EyeColorRight = 9,
    HairColor = 10,
    HighlightsColor = 11,
    FacialFeatures = 12,
    TattooColor = 13,
    Eyebrows = 14,
    EyeColorLeft = 15,
    EyeShape = 16,
    Nose = 17,
    Jaw = 18,
    Mouth = 19,
    LipColor = 20,
    MuscleMass = 21,
    TailShape = 22,
    BustSize = 23,
    FacePaint = 24,
    FacePaintColor = 25,
}

impl CustomizeIndex {
    pub const COUNT: usize = 26;

    pub const ALL: [CustomizeIndex; Self::COUNT] = [
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
        CustomizeIndex::FacePaint,
        CustomizeIndex::FacePaintColor,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            CustomizeIndex::Race => "Race",
            CustomizeIndex::Gender => "Gender",
            CustomizeIndex::BodyType => "Body Type",
            CustomizeIndex::Height => "Height",
            CustomizeIndex::Clan => "Clan",
            CustomizeIndex::Face => "Face",
            CustomizeIndex::Hairstyle => "Hair Style",
            CustomizeIndex::Highlights => "Highlights",
            CustomizeIndex::SkinColor => "Skin Color",
            CustomizeIndex::EyeColorRight => "Right Eye Color",
            CustomizeIndex::HairColor => "Hair Color",
            CustomizeIndex::HighlightsColor => "Highlights Color",
            CustomizeIndex::FacialFeatures => "Facial Features",
            CustomizeIndex::TattooColor => "Tattoo Color",
            CustomizeIndex::Eyebrows => "Eyebrows",
            CustomizeIndex::EyeColorLeft => "Left Eye Color",
            CustomizeIndex::EyeShape => "Eye Shape",
            CustomizeIndex::Nose => "Nose",
            CustomizeIndex::Jaw => "Jaw",
            CustomizeIndex::Mouth => "Mouth",
            CustomizeIndex::LipColor => "Lip Color",
            CustomizeIndex::MuscleMass => "Muscle Mass",
            CustomizeIndex::TailShape => "Tail Shape",
            CustomizeIndex::BustSize => "Bust Size",
            CustomizeIndex::FacePaint => "Face Paint",
            CustomizeIndex::FacePaintColor => "Face Paint Color",
        }
    }
}

impl fmt::Display for CustomizeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full customization block, one byte per index
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Customize(pub [u8; CustomizeIndex::COUNT]);

impl Customize {
    #[inline]
    pub fn get(&self, index: CustomizeIndex) -> u8 {
        self.0[index.index()]
    }

    #[inline]
    pub fn set(&mut self, index: CustomizeIndex, value: u8) {
        self.0[index.index()] = value;
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; CustomizeIndex::COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (CustomizeIndex, u8)> + '_ {
        CustomizeIndex::ALL.iter().map(move |&i| (i, self.get(i)))
    }
}

impl fmt::Debug for Customize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customize(")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}
