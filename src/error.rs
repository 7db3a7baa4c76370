// In: src/error.rs

//! This module defines the single, unified error type for the deck code library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Kernels return these errors and propagate them with `?`. The text framing
//! layer is the only place that swallows them, turning a malformed code into an
//! empty decode result.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckCodeError {
    // =========================================================================
    // === High-Level, Semantic Errors
    // =========================================================================
    #[error("Invalid codec configuration: {0}")]
    InvalidConfig(String),

    #[error("Gzip operation failed: {0}")]
    GzipError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// A string that is not valid standard-alphabet, padded base64.
    #[error("Base64 decoding failed: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Decompressed bytes that are not valid UTF-8 text.
    #[error("UTF-8 decoding failed: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
