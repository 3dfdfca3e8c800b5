//! Wardrobe Core - Fundamental types
//!
//! This crate defines the data model shared by every wardrobe crate:
//! - Identifiers (ActorId, DesignId)
//! - Equipment and customization values
//! - Appearance snapshots and apply masks
//! - Designs and the error taxonomy

pub mod customize;
pub mod design;
pub mod equip;
pub mod error;
pub mod id;
pub mod mask;
pub mod snapshot;

pub use customize::*;
pub use design::*;
pub use equip::*;
pub use error::*;
pub use id::*;
pub use mask::*;
pub use snapshot::*;
