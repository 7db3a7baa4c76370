//! Pure, stateless kernels. Each one converts between two representations and
//! knows nothing about decks or slots.
//!
//! - `bitstream`: MSB-first bit packing and fixed-width integer embedding.
//! - `int32`: flat little-endian `i32` packing.
//! - `base64` / `gzip`: the two primitives of the text framing layer.

pub mod base64;
pub mod bitstream;
pub mod gzip;
pub mod int32;
