//! Wardrobe State - Overlay merge and revert bookkeeping
//!
//! This crate implements the mutable side of wardrobe:
//! - Field-by-field overlay of a design onto a live snapshot
//! - Per-actor baselines captured before the first override
//! - Per-actor serialization of overrides and reverts

pub mod overlay;
pub mod revert;

pub use overlay::*;
pub use revert::*;
