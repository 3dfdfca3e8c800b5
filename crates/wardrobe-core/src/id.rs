//! Identity types for actors and designs
//!
//! Actor identities are built by the host from whatever it can observe about
//! an avatar. The core only compares and hashes them.

use std::fmt;
use std::sync::Arc;

/// Actor identity - disambiguates avatars that share a display name
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ActorId {
    name: Arc<str>,
    world: u16,
    index: u16,
}

impl ActorId {
    #[inline]
    pub fn new(name: impl Into<Arc<str>>, world: u16, index: u16) -> Self {
        ActorId {
            name: name.into(),
            world,
            index,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn world(&self) -> u16 {
        self.world
    }

    /// Object table index
    #[inline]
    pub fn index(&self) -> u16 {
        self.index
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Actor({}@{}#{})", self.name, self.world, self.index)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}#{}", self.name, self.world, self.index)
    }
}

/// Design identity - 128-bit, unique across a design library
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct DesignId(pub u128);

impl DesignId {
    pub const ZERO: DesignId = DesignId(0);

    #[inline]
    pub fn new(id: u128) -> Self {
        DesignId(id)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        DesignId(u128::from_le_bytes(bytes))
    }

    /// Parse the hex form produced by `Display`
    pub fn parse_hex(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text.len() > 32 {
            return None;
        }
        u128::from_str_radix(text, 16).ok().map(DesignId)
    }
}

impl fmt::Debug for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Design({:032x})", self.0)
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}
