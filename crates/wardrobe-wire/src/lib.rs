//! Wardrobe Wire - Versioned design payloads
//!
//! This crate implements the binary and text forms of a design:
//! - Version dispatch over every historical layout
//! - Legacy migration (V1-V3) with grouped apply flags
//! - The current per-field layout (V4)
//! - Base64 envelope

pub mod codec;
pub mod current;
pub mod flags;
mod legacy;
mod reader;
pub mod text;
pub mod version;

pub use codec::*;
pub use current::{DecodeOptions, APPLICATION_ID, MASK_BYTES};
pub use flags::*;
pub use text::*;
pub use version::*;
