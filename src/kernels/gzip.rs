//! This module contains the pure, stateless kernels for gzip compression and
//! decompression of the outer framing layer.
//!
//! It is a safe, panic-free wrapper around the `flate2` crate. Unlike a
//! self-describing container there is no size header: the output is a bare
//! gzip member, which is what the external consumer expects.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::DeckCodeError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Compresses `input_bytes` into a single gzip member at `level` (0-9).
///
/// Empty input still produces a valid (header-only) gzip member.
pub fn compress(input_bytes: &[u8], level: u32) -> Result<Vec<u8>, DeckCodeError> {
    let mut encoder = GzEncoder::new(
        Vec::with_capacity(input_bytes.len() / 2 + 32),
        Compression::new(level),
    );
    encoder
        .write_all(input_bytes)
        .map_err(|e| DeckCodeError::GzipError(e.to_string()))?;

    // `finish` writes the CRC32 and ISIZE trailer.
    encoder
        .finish()
        .map_err(|e| DeckCodeError::GzipError(e.to_string()))
}

/// Decompresses a gzip member, failing on a corrupt header, body or trailer.
pub fn decompress(input_bytes: &[u8]) -> Result<Vec<u8>, DeckCodeError> {
    let mut decoder = GzDecoder::new(input_bytes);
    let mut output_buf = Vec::new();
    decoder
        .read_to_end(&mut output_buf)
        .map_err(|e| DeckCodeError::GzipError(e.to_string()))?;
    Ok(output_buf)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_roundtrip_simple_text() {
        let original_bytes =
            b"This is a longer piece of text that should compress well. This is a longer piece."
                .to_vec();
        let compressed_bytes = compress(&original_bytes, 6).unwrap();
        assert_eq!(&compressed_bytes[..2], &[0x1F, 0x8B]);
        assert_eq!(decompress(&compressed_bytes).unwrap(), original_bytes);
    }

    #[test]
    fn test_gzip_roundtrip_empty() {
        let compressed_bytes = compress(&[], 6).unwrap();
        assert!(!compressed_bytes.is_empty());
        assert!(decompress(&compressed_bytes).unwrap().is_empty());
    }

    #[test]
    fn test_gzip_highly_compressible_data() {
        let original_bytes = vec![42u8; 10_000];
        let compressed_bytes = compress(&original_bytes, 9).unwrap();
        assert!(compressed_bytes.len() < 100);
        assert_eq!(decompress(&compressed_bytes).unwrap(), original_bytes);
    }

    #[test]
    fn test_gzip_decompress_invalid_data() {
        let result = decompress(b"not-valid-gzip-data");
        assert!(matches!(result, Err(DeckCodeError::GzipError(_))));
    }

    #[test]
    fn test_gzip_decompress_truncated_member() {
        let mut compressed_bytes = compress(b"hello hello hello", 6).unwrap();
        compressed_bytes.truncate(compressed_bytes.len() - 6);
        assert!(decompress(&compressed_bytes).is_err());
    }
}
