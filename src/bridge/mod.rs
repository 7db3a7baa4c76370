// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the library. Callers hand it
// slot records or a code string; it never exposes modifiers, bit streams or
// intermediate base64.
//
// Data Flow (Encode):
//
//   1. [Stateless API (encode)]          -> Receives `&[SlotRecord]` and the mode
//         |
//   2. [Deck Pipeline (orchestrator)]    -> slot transform -> bitstream | int32 kernel
//         |
//   3. [Frame Pipeline]                  -> base64 -> gzip -> base64 -> `String`
//
// Data Flow (Decode):
//
//   1. [Frame Pipeline]                  -> `&str` -> payload bytes (empty on failure)
//         |
//   2. [Deck Pipeline (orchestrator)]    -> 553 bits -> 12 slot groups -> records
//         |
//   3. [Stateless API (decode)]          -> Returns `DecodedDeck { slots, had_errors }`
//
// ====================================================================================
pub mod format;
pub mod stateless_api;

pub use stateless_api::{decode, decode_out_of_rule, decode_with_config, encode, encode_with_config};

#[cfg(test)]
mod tests;
