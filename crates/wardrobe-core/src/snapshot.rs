//! Appearance snapshot - the full visual state of one actor
//!
//! A snapshot is always fully populated: every slot, every customize index,
//! the model id and all four meta flags carry a value.

use crate::{Customize, CustomizeIndex, EquipItem, EquipSlot};

/// Boolean display flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MetaFlag {
    HatVisible = 0,
    VisorToggled = 1,
    WeaponVisible = 2,
    Wet = 3,
}

impl MetaFlag {
    pub const COUNT: usize = 4;

    pub const ALL: [MetaFlag; Self::COUNT] = [
        MetaFlag::HatVisible,
        MetaFlag::VisorToggled,
        MetaFlag::WeaponVisible,
        MetaFlag::Wet,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bit used for this flag in packed meta bytes
    #[inline]
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Meta display flags of a snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MetaFlags {
    pub hat_visible: bool,
    pub visor_toggled: bool,
    pub weapon_visible: bool,
    pub is_wet: bool,
}

impl MetaFlags {
    pub const NONE: MetaFlags = MetaFlags {
        hat_visible: false,
        visor_toggled: false,
        weapon_visible: false,
        is_wet: false,
    };

    #[inline]
    pub fn get(&self, flag: MetaFlag) -> bool {
        match flag {
            MetaFlag::HatVisible => self.hat_visible,
            MetaFlag::VisorToggled => self.visor_toggled,
            MetaFlag::WeaponVisible => self.weapon_visible,
            MetaFlag::Wet => self.is_wet,
        }
    }

    #[inline]
    pub fn set(&mut self, flag: MetaFlag, value: bool) {
        match flag {
            MetaFlag::HatVisible => self.hat_visible = value,
            MetaFlag::VisorToggled => self.visor_toggled = value,
            MetaFlag::WeaponVisible => self.weapon_visible = value,
            MetaFlag::Wet => self.is_wet = value,
        }
    }

    /// Pack into one byte using `MetaFlag::bit`
    pub fn to_bits(self) -> u8 {
        MetaFlag::ALL
            .iter()
            .filter(|f| self.get(**f))
            .fold(0, |bits, f| bits | f.bit())
    }

    /// Unpack from one byte, ignoring unused bits
    pub fn from_bits(bits: u8) -> Self {
        let mut flags = MetaFlags::NONE;
        for flag in MetaFlag::ALL {
            flags.set(flag, bits & flag.bit() != 0);
        }
        flags
    }
}

/// Full appearance state of one actor at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AppearanceSnapshot {
    /// One item per slot, indexed by `EquipSlot::index`
    pub equipment: [EquipItem; EquipSlot::COUNT],
    pub customize: Customize,
    /// 0 = humanoid; anything else is a monster or NPC model
    pub model_id: u32,
    pub meta: MetaFlags,
}

impl AppearanceSnapshot {
    #[inline]
    pub fn item(&self, slot: EquipSlot) -> EquipItem {
        self.equipment[slot.index()]
    }

    #[inline]
    pub fn set_item(&mut self, slot: EquipSlot, item: EquipItem) {
        self.equipment[slot.index()] = item;
    }

    #[inline]
    pub fn customize(&self, index: CustomizeIndex) -> u8 {
        self.customize.get(index)
    }

    #[inline]
    pub fn set_customize(&mut self, index: CustomizeIndex, value: u8) {
        self.customize.set(index, value);
    }

    /// Customization only has meaning on the humanoid model
    #[inline]
    pub fn is_human(&self) -> bool {
        self.model_id == 0
    }

    pub fn equipment(&self) -> impl Iterator<Item = (EquipSlot, EquipItem)> + '_ {
        EquipSlot::ALL.iter().map(move |&s| (s, self.item(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let s = AppearanceSnapshot::default();
        assert!(s.equipment().all(|(_, item)| item == EquipItem::NOTHING));
        assert!(s.customize.iter().all(|(_, v)| v == 0));
        assert_eq!(s.model_id, 0);
        assert_eq!(s.meta, MetaFlags::NONE);
        assert!(s.is_human());
    }

    #[test]
    fn test_meta_bits_roundtrip() {
        let flags = MetaFlags {
            hat_visible: true,
            visor_toggled: false,
            weapon_visible: true,
            is_wet: true,
        };
        assert_eq!(flags.to_bits(), 0b1101);
        assert_eq!(MetaFlags::from_bits(flags.to_bits()), flags);
    }

    #[test]
    fn test_meta_from_bits_ignores_unused() {
        assert_eq!(MetaFlags::from_bits(0xF0), MetaFlags::NONE);
    }

    #[test]
    fn test_item_access() {
        let mut s = AppearanceSnapshot::default();
        s.set_item(EquipSlot::Hands, EquipItem::new(6064, 3));
        assert_eq!(s.item(EquipSlot::Hands), EquipItem::new(6064, 3));
        assert_eq!(s.item(EquipSlot::Feet), EquipItem::NOTHING);
    }
}
