// In: src/bridge/stateless_api.rs

use crate::config::{DeckCodeConfig, EncodeMode};
use crate::deck_pipeline::orchestrator;
use crate::error::DeckCodeError;
use crate::frame_pipeline::DEFAULT_COMPRESSION_LEVEL;
use crate::types::{DecodedDeck, SlotRecord};

/// Encodes a deck into a code string.
///
/// With `out_of_rule == false` the deck is bit-packed into the standard
/// 553-bit layout; otherwise every supplied slot is written as seven raw ids.
/// An empty deck encodes to the empty string.
pub fn encode(slots: &[SlotRecord], out_of_rule: bool) -> String {
    if out_of_rule {
        orchestrator::encode_out_of_rule(slots, DEFAULT_COMPRESSION_LEVEL)
    } else {
        orchestrator::encode_bit_packed(slots, DEFAULT_COMPRESSION_LEVEL)
    }
}

/// Decodes a bit-packed code string.
///
/// Malformed codes yield an empty deck with `had_errors == false`. With
/// `validate`, out-of-range fields are zeroed and `had_errors` is set.
pub fn decode(code: &str, validate: bool) -> DecodedDeck {
    orchestrator::decode_bit_packed(code, validate)
}

/// Decodes a code produced with `out_of_rule == true`.
///
/// The flat layout carries no slot numbers, so slots are numbered by their
/// position in the code.
pub fn decode_out_of_rule(code: &str, validate: bool) -> DecodedDeck {
    orchestrator::decode_out_of_rule(code, validate)
}

/// Encodes with every setting taken from `config`.
pub fn encode_with_config(
    slots: &[SlotRecord],
    config: &DeckCodeConfig,
) -> Result<String, DeckCodeError> {
    config.check()?;
    Ok(match config.mode {
        EncodeMode::BitPacked => orchestrator::encode_bit_packed(slots, config.compression_level),
        EncodeMode::OutOfRule => orchestrator::encode_out_of_rule(slots, config.compression_level),
    })
}

/// Decodes with the mode and validation flag taken from `config`.
pub fn decode_with_config(code: &str, config: &DeckCodeConfig) -> Result<DecodedDeck, DeckCodeError> {
    config.check()?;
    Ok(match config.mode {
        EncodeMode::BitPacked => orchestrator::decode_bit_packed(code, config.validate),
        EncodeMode::OutOfRule => orchestrator::decode_out_of_rule(code, config.validate),
    })
}
