//! Standard-alphabet, padded base64 for both framing layers.
//!
//! A thin wrapper around the `base64` crate so the rest of the codec does not
//! depend on its engine API.

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine;

use crate::error::DeckCodeError;

pub fn encode(input_bytes: &[u8]) -> String {
    STANDARD.encode(input_bytes)
}

/// Decodes `text`, rejecting characters outside the standard alphabet and
/// missing or malformed padding.
pub fn decode(text: &str) -> Result<Vec<u8>, DeckCodeError> {
    Ok(STANDARD.decode(text)?)
}
