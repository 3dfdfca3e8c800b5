//! Error types for wardrobe

use thiserror::Error;

use crate::{ActorId, DesignId};

/// Codec failures. All are terminal; no partial decode is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    #[error("Empty payload")]
    Empty,

    #[error("Unknown version: {0}")]
    UnknownVersion(u8),

    #[error("Truncated payload for version {version}: expected {expected} bytes, got {actual}")]
    Truncated {
        version: u8,
        expected: usize,
        actual: usize,
    },

    #[error("Trailing bytes for version {version}: expected {expected} bytes, got {actual}")]
    TrailingBytes {
        version: u8,
        expected: usize,
        actual: usize,
    },

    #[error("Foreign application identifier: {0:#04x}")]
    ForeignApplication(u8),
}

/// Core wardrobe errors
#[derive(Error, Debug)]
pub enum WardrobeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    // Protection errors
    #[error("Actor {actor} is locked by write-protected design {design}")]
    Protected { actor: ActorId, design: DesignId },

    #[error("Design {0} is write-protected")]
    DesignProtected(DesignId),

    // State errors
    #[error("Nothing to revert for actor {0}")]
    RevertMiss(ActorId),

    // Interop errors
    #[error("Actor not found: {0}")]
    ActorUnknown(ActorId),

    #[error("Interop error: {0}")]
    Interop(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl WardrobeError {
    /// Benign conditions the caller may treat as a no-op
    pub fn is_benign(&self) -> bool {
        matches!(self, WardrobeError::RevertMiss(_))
    }
}

/// Result type for wardrobe operations
pub type WardrobeResult<T> = Result<T, WardrobeError>;
