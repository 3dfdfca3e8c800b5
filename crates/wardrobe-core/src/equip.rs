//! Equipment slots and items

use std::fmt;

/// Gear position on an avatar
///
/// Declaration order is the canonical order used by every wire layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum EquipSlot {
    MainHand = 0,
    OffHand = 1,
    Head = 2,
    Body = 3,
    Hands = 4,
    Legs = 5,
    Feet = 6,
    Ears = 7,
    Neck = 8,
    Wrists = 9,
    RFinger = 10,
    LFinger = 11,
}

impl EquipSlot {
    pub const COUNT: usize = 12;

    pub const ALL: [EquipSlot; Self::COUNT] = [
        EquipSlot::MainHand,
        EquipSlot::OffHand,
        EquipSlot::Head,
        EquipSlot::Body,
        EquipSlot::Hands,
        EquipSlot::Legs,
        EquipSlot::Feet,
        EquipSlot::Ears,
        EquipSlot::Neck,
        EquipSlot::Wrists,
        EquipSlot::RFinger,
        EquipSlot::LFinger,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Weapon slots carry their own model and are hidden by the weapon flag
    #[inline]
    pub fn is_weapon(self) -> bool {
        matches!(self, EquipSlot::MainHand | EquipSlot::OffHand)
    }

    pub fn name(self) -> &'static str {
        match self {
            EquipSlot::MainHand => "Main Hand",
            EquipSlot::OffHand => "Off Hand",
            EquipSlot::Head => "Head",
            EquipSlot::Body => "Body",
            EquipSlot::Hands => "Hands",
            EquipSlot::Legs => "Legs",
            EquipSlot::Feet => "Feet",
            EquipSlot::Ears => "Ears",
            EquipSlot::Neck => "Neck",
            EquipSlot::Wrists => "Wrists",
            EquipSlot::RFinger => "Right Ring",
            EquipSlot::LFinger => "Left Ring",
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Item identifier plus dye for one slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EquipItem {
    /// Catalog item id, 0 = empty slot
    pub id: u32,
    /// Stain id, 0 = undyed
    pub stain: u8,
}

impl EquipItem {
    pub const NOTHING: EquipItem = EquipItem { id: 0, stain: 0 };

    #[inline]
    pub const fn new(id: u32, stain: u8) -> Self {
        EquipItem { id, stain }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.id == 0
    }

    #[inline]
    pub fn with_stain(self, stain: u8) -> Self {
        EquipItem { stain, ..self }
    }

    #[inline]
    pub fn with_id(self, id: u32) -> Self {
        EquipItem { id, ..self }
    }
}
