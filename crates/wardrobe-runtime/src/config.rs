//! Wardrobe configuration

use serde::{Deserialize, Serialize};
use wardrobe_core::{WardrobeError, WardrobeResult};
use wardrobe_state::OverlayConfig;
use wardrobe_wire::{DecodeOptions, WireVersion, APPLICATION_ID};

/// Logging setup consumed by [`crate::telemetry::init`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, e.g. `info` or `wardrobe_state=debug`
    pub level: String,
    /// Emit one JSON object per event instead of human-readable lines
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub model_overrides_customize: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        OverlaySettings {
            model_overrides_customize: OverlayConfig::default().model_overrides_customize,
        }
    }
}

/// Wardrobe configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardrobeConfig {
    /// Version tag used when exporting live appearances
    pub encode_version: u8,
    /// Application identifier expected in current-version payloads
    pub application_id: u8,
    /// Accept current-version payloads written by other applications
    pub accept_foreign: bool,
    pub overlay: OverlaySettings,
    pub logging: LogConfig,
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        WardrobeConfig {
            encode_version: WireVersion::CURRENT.to_byte(),
            application_id: APPLICATION_ID,
            accept_foreign: false,
            overlay: OverlaySettings::default(),
            logging: LogConfig::default(),
        }
    }
}

impl WardrobeConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(input: &str) -> WardrobeResult<Self> {
        let config: WardrobeConfig =
            serde_json::from_str(input).map_err(|e| WardrobeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> WardrobeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WardrobeError::Config(e.to_string()))
    }

    pub fn validate(&self) -> WardrobeResult<()> {
        self.wire_version()?;
        if self.logging.level.trim().is_empty() {
            return Err(WardrobeError::Config("logging.level must not be empty".into()));
        }
        Ok(())
    }

    /// Export version as a [`WireVersion`]
    pub fn wire_version(&self) -> WardrobeResult<WireVersion> {
        WireVersion::from_byte(self.encode_version).ok_or_else(|| {
            WardrobeError::Config(format!(
                "encode_version {} is not a known payload version",
                self.encode_version
            ))
        })
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            application_id: self.application_id,
            accept_foreign: self.accept_foreign,
        }
    }

    pub fn overlay_config(&self) -> OverlayConfig {
        OverlayConfig {
            model_overrides_customize: self.overlay.model_overrides_customize,
        }
    }
}
