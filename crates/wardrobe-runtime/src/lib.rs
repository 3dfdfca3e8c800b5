//! Wardrobe Runtime - Orchestration over a host
//!
//! This crate ties the codec, overlay and revert store to live actors:
//! - Apply designs or text payloads to actors through [`Interop`]
//! - Export live appearances and migrate payload versions
//! - Revert actors to the appearance they had before the first override
//! - Configuration and tracing setup

pub mod config;
pub mod interop;
pub mod telemetry;
pub mod wardrobe;

pub use config::*;
pub use interop::*;
pub use wardrobe::*;
