//! Tracing subscriber setup

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use wardrobe_core::{WardrobeError, WardrobeResult};

use crate::LogConfig;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over
/// `config.level`. Calling this again after a successful install is a no-op.
pub fn init(config: &LogConfig) -> WardrobeResult<()> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.level.trim())
            .map_err(|e| WardrobeError::Config(format!("invalid log level: {e}")))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| WardrobeError::Config(format!("tracing subscriber: {e}")))?;

    let _ = INSTALLED.set(());
    Ok(())
}

/// Whether [`init`] has installed the subscriber
pub fn is_initialized() -> bool {
    INSTALLED.get().is_some()
}
