// In: src/config.rs

//! The single source of truth for deck code configuration.
//!
//! `DeckCodeConfig` is created once at the application boundary (for example
//! from a JSON settings blob) and passed by reference into the config-driven
//! entry points of the `bridge`. The plain `encode`/`decode` functions take the
//! two relevant flags directly and never need it.

use serde::{Deserialize, Serialize};

use crate::error::DeckCodeError;

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Selects which payload layout sits under the text framing.
///
/// The wire format carries no marker for this, so a code can only be decoded
/// with the mode it was written in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EncodeMode {
    /// **Default:** a 553-bit stream of slot modifiers, one header bit plus
    /// twelve fixed-width slot groups.
    #[default]
    BitPacked,

    /// Raw little-endian `i32` ids, seven per supplied slot.
    OutOfRule,
}

/// The highest level accepted by the gzip encoder.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

//==================================================================================
// II. The Unified DeckCodeConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DeckCodeConfig {
    /// Payload layout used by encode and expected by decode.
    #[serde(default)]
    pub mode: EncodeMode,

    /// If true, decoded ids and slot types are range-checked and zeroed when
    /// outside their documented domains.
    #[serde(default)]
    pub validate: bool,

    /// Gzip level (0-9) for the outer framing layer.
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
}

impl Default for DeckCodeConfig {
    fn default() -> Self {
        Self {
            mode: EncodeMode::default(),
            validate: false,
            compression_level: default_compression_level(),
        }
    }
}

impl DeckCodeConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DeckCodeError> {
        let config: DeckCodeConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Rejects settings the codec cannot honour.
    pub fn check(&self) -> Result<(), DeckCodeError> {
        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(DeckCodeError::InvalidConfig(format!(
                "compression_level must be between 0 and {}, got {}",
                MAX_COMPRESSION_LEVEL, self.compression_level
            )));
        }
        Ok(())
    }
}

/// Matches `flate2::Compression::default()`.
fn default_compression_level() -> u32 {
    6
}
