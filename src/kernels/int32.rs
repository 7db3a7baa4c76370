//! This module contains the pure, stateless kernels for the flat integer layout:
//! each value is written as a fixed four-byte, little-endian `i32`.
//!
//! This is the payload of out-of-rule deck codes. The layout is explicit
//! little-endian regardless of the host, and `bytemuck` provides the safe,
//! unaligned reads and writes.

const INT_WIDTH: usize = std::mem::size_of::<i32>();

/// Writes every value as four little-endian bytes, in input order.
///
/// An empty slice produces an empty buffer.
pub fn pack(values: &[i32]) -> Vec<u8> {
    let mut output_buf = Vec::with_capacity(values.len() * INT_WIDTH);
    for &value in values {
        output_buf.extend_from_slice(bytemuck::bytes_of(&value.to_le()));
    }
    output_buf
}

/// Reads as many complete four-byte groups as `bytes` holds.
///
/// A trailing partial group of one to three bytes is dropped without error.
pub fn unpack(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks_exact(INT_WIDTH)
        .map(|chunk| i32::from_le(bytemuck::pod_read_unaligned::<i32>(chunk)))
        .collect()
}
