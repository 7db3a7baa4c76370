// In: src/frame_pipeline/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Text Framing Layer
// ====================================================================================
//
// Every deck code is framed twice:
//
//   payload bytes --base64--> inner text --utf8--> gzip --base64--> code string
//
//   1. [Inner layer]  `bools_to_base64` / `ints_to_base64` turn the packed payload
//                     into a base64 string.
//   2. [Outer layer]  `compress_text` gzips that string and base64-encodes the
//                     compressed bytes.
//
// Decoding runs the same stages backwards. This is the error boundary of the
// codec: a failure in any stage is logged and reported as an empty result, so a
// malformed code can never surface as an `Err` from the public decode.
// ====================================================================================

use bitvec::prelude::*;

use crate::error::DeckCodeError;
use crate::kernels::{base64, bitstream, gzip, int32};

/// Gzip level used when the caller does not supply a config.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

//==================================================================================
// 1. Outer Layer
//==================================================================================

/// Gzips the UTF-8 bytes of `text` and base64-encodes the result.
///
/// Empty text maps to the empty string.
pub fn compress_text(text: &str) -> String {
    compress_text_with_level(text, DEFAULT_COMPRESSION_LEVEL)
}

pub fn compress_text_with_level(text: &str, level: u32) -> String {
    if text.is_empty() {
        return String::new();
    }
    match try_compress_text(text, level) {
        Ok(code) => code,
        Err(e) => {
            log::warn!("Compression error: {}", e);
            String::new()
        }
    }
}

/// Reverses [`compress_text`]. ASCII whitespace anywhere in `code` is ignored;
/// any other malformed input yields the empty string.
pub fn decompress_text(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    match try_decompress_text(code) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Decompression error: {}", e);
            String::new()
        }
    }
}

fn try_compress_text(text: &str, level: u32) -> Result<String, DeckCodeError> {
    let compressed = gzip::compress(text.as_bytes(), level)?;
    log::debug!(
        "outer layer: {} text bytes -> {} gzip bytes",
        text.len(),
        compressed.len()
    );
    Ok(base64::encode(&compressed))
}

fn try_decompress_text(code: &str) -> Result<String, DeckCodeError> {
    // Codes pasted from chat or mail may be wrapped across lines.
    let compact: String = code.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let compressed = base64::decode(&compact)?;
    let decompressed = gzip::decompress(&compressed)?;
    Ok(String::from_utf8(decompressed)?)
}

//==================================================================================
// 2. Inner Layer: Bit-Packed Payload
//==================================================================================

/// Packs `bits` MSB-first and base64-encodes the bytes.
pub fn bits_to_base64(bits: &BitSlice<u8, Msb0>) -> String {
    if bits.is_empty() {
        return String::new();
    }
    base64::encode(&bitstream::pack(bits))
}

/// Decodes `text` and unpacks at most `expected_bits` bits.
///
/// `expected_bits == 0` means every bit in the buffer. Malformed base64 yields
/// an empty stream.
pub fn bits_from_base64(text: &str, expected_bits: usize) -> bitstream::BitStream {
    if text.is_empty() {
        return bitstream::BitStream::new();
    }
    match base64::decode(text) {
        Ok(bytes) => {
            let limit = if expected_bits > 0 {
                expected_bits
            } else {
                bytes.len() * 8
            };
            bitstream::unpack(&bytes, limit)
        }
        Err(e) => {
            log::warn!("Base64 decode error: {}", e);
            bitstream::BitStream::new()
        }
    }
}

/// `bool` slice convenience over [`bits_to_base64`].
pub fn bools_to_base64(bools: &[bool]) -> String {
    let bits: bitstream::BitStream = bools.iter().copied().collect();
    bits_to_base64(&bits)
}

/// `bool` convenience over [`bits_from_base64`].
pub fn bools_from_base64(text: &str, expected_count: usize) -> Vec<bool> {
    bits_from_base64(text, expected_count)
        .iter()
        .by_vals()
        .collect()
}

//==================================================================================
// 3. Inner Layer: Flat Integer Payload
//==================================================================================

/// Packs `values` as little-endian `i32`s and base64-encodes the bytes.
pub fn ints_to_base64(values: &[i32]) -> String {
    if values.is_empty() {
        return String::new();
    }
    base64::encode(&int32::pack(values))
}

/// Decodes `text` into `i32`s; a trailing partial group is dropped and
/// malformed base64 yields an empty list.
pub fn ints_from_base64(text: &str) -> Vec<i32> {
    if text.is_empty() {
        return Vec::new();
    }
    match base64::decode(text) {
        Ok(bytes) => int32::unpack(&bytes),
        Err(e) => {
            log::warn!("Decoding error: {}", e);
            Vec::new()
        }
    }
}
