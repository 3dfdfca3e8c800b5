//! Bit-packed flag bytes used by the wire layouts

/// Legacy application flags (1 byte, V1-V3)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplicationFlags(pub u8);

impl ApplicationFlags {
    pub const NONE: ApplicationFlags = ApplicationFlags(0);

    // Flag bits
    pub const CUSTOMIZE: u8 = 0b0000_0001;
    pub const HAT: u8 = 0b0000_0010;
    pub const VISOR: u8 = 0b0000_0100;
    pub const WEAPON: u8 = 0b0000_1000;
    pub const WRITE_PROTECTED: u8 = 0b0001_0000;
    /// V2 and later
    pub const WETNESS: u8 = 0b0010_0000;

    #[inline]
    pub fn new(bits: u8) -> Self {
        ApplicationFlags(bits)
    }

    #[inline]
    pub fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    #[inline]
    pub fn set(&mut self, bit: u8, value: bool) {
        if value {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

/// Legacy state byte (V1-V3). Visibility is stored inverted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateFlags(pub u8);

impl StateFlags {
    pub const NONE: StateFlags = StateFlags(0);

    pub const HAT_HIDDEN: u8 = 0b0000_0001;
    pub const VISOR_TOGGLED: u8 = 0b0000_0010;
    pub const WEAPON_HIDDEN: u8 = 0b0000_0100;
    /// V2 and later
    pub const WET: u8 = 0b0000_1000;

    #[inline]
    pub fn new(bits: u8) -> Self {
        StateFlags(bits)
    }

    #[inline]
    pub fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    #[inline]
    pub fn set(&mut self, bit: u8, value: bool) {
        if value {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

/// Fixed-width bit vector packed LSB-first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskBits<const N: usize> {
    bytes: [u8; N],
    cursor: usize,
}

impl<const N: usize> MaskBits<N> {
    pub fn new() -> Self {
        MaskBits {
            bytes: [0; N],
            cursor: 0,
        }
    }

    pub fn from_bytes(bytes: [u8; N]) -> Self {
        MaskBits { bytes, cursor: 0 }
    }

    /// Append the next bit; bits past `8 * N` are dropped
    pub fn push(&mut self, value: bool) {
        if self.cursor < N * 8 && value {
            self.bytes[self.cursor / 8] |= 1 << (self.cursor % 8);
        }
        self.cursor += 1;
    }

    /// Read the next bit; reads past the end yield false
    pub fn read(&mut self) -> bool {
        let bit = self.cursor < N * 8 && self.bytes[self.cursor / 8] & (1 << (self.cursor % 8)) != 0;
        self.cursor += 1;
        bit
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> Default for MaskBits<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_flag_operations() {
        let mut flags = ApplicationFlags::NONE;

        assert!(!flags.contains(ApplicationFlags::HAT));
        flags.set(ApplicationFlags::HAT, true);
        flags.set(ApplicationFlags::WRITE_PROTECTED, true);
        assert!(flags.contains(ApplicationFlags::HAT));
        assert!(flags.contains(ApplicationFlags::WRITE_PROTECTED));

        flags.set(ApplicationFlags::HAT, false);
        assert!(!flags.contains(ApplicationFlags::HAT));
        assert_eq!(flags.0, ApplicationFlags::WRITE_PROTECTED);
    }

    #[test]
    fn test_state_flag_bits() {
        let flags = StateFlags(StateFlags::HAT_HIDDEN | StateFlags::WET);
        assert!(flags.contains(StateFlags::HAT_HIDDEN));
        assert!(flags.contains(StateFlags::WET));
        assert!(!flags.contains(StateFlags::WEAPON_HIDDEN));
    }

    #[test]
    fn test_mask_bits_lsb_first() {
        let mut bits = MaskBits::<2>::new();
        for i in 0..10 {
            bits.push(i == 0 || i == 9);
        }
        assert_eq!(bits.as_bytes(), &[0b0000_0001, 0b0000_0010]);

        let mut read = MaskBits::from_bytes(*bits.as_bytes());
        let decoded: Vec<bool> = (0..10).map(|_| read.read()).collect();
        assert!(decoded[0] && decoded[9]);
        assert_eq!(decoded.iter().filter(|b| **b).count(), 2);
    }

    #[test]
    fn test_mask_bits_overflow_is_ignored() {
        let mut bits = MaskBits::<1>::new();
        for _ in 0..12 {
            bits.push(true);
        }
        assert_eq!(bits.as_bytes(), &[0xFF]);

        let mut read = MaskBits::from_bytes([0xFF]);
        for _ in 0..8 {
            assert!(read.read());
        }
        assert!(!read.read());
    }
}
