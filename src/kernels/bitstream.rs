//! This module contains the pure, stateless kernels for MSB-first bit packing.
//!
//! Bit `0` of every group of eight becomes the most-significant bit of its
//! byte, and fixed-width integers are embedded most-significant bit first. This
//! is the layout the external deck code consumer reads, so the padding and
//! truncation rules below are part of the wire format and must not change.

use bitvec::prelude::*;
use num_traits::{PrimInt, Unsigned};

/// An owned, MSB-first bit sequence backed by bytes.
pub type BitStream = BitVec<u8, Msb0>;

//==================================================================================
// 1. Byte Packing
//==================================================================================

/// Packs `bits` into bytes, eight at a time, MSB-first.
///
/// A short final group is padded with `0` in its low-order positions.
pub fn pack(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    bytes.view_bits_mut::<Msb0>()[..bits.len()].copy_from_bitslice(bits);
    bytes
}

/// Unpacks up to `expected_bits` bits from `bytes`, MSB-first.
///
/// If the buffer holds fewer bits than requested the result is simply shorter;
/// it is never padded. Callers must treat a short result as insufficient data.
pub fn unpack(bytes: &[u8], expected_bits: usize) -> BitStream {
    let available = bytes.view_bits::<Msb0>();
    let take = expected_bits.min(available.len());
    available[..take].to_bitvec()
}

//==================================================================================
// 2. Fixed-Width Integer Embedding
//==================================================================================

/// Appends the low `width` bits of `value` to `bits`, most-significant first.
///
/// High bits that do not fit in `width` are silently dropped; callers clamp to
/// the field's domain beforehand. `width` is capped at 32.
pub fn push_int(bits: &mut BitStream, value: u32, width: usize) {
    let width = width.min(u32::BITS as usize);
    let view = value.view_bits::<Msb0>();
    bits.extend_from_bitslice(&view[u32::BITS as usize - width..]);
}

/// Returns `value` as a `width`-bit sequence, most-significant first.
pub fn int_to_bits(value: u32, width: usize) -> BitStream {
    let mut bits = BitStream::with_capacity(width);
    push_int(&mut bits, value, width);
    bits
}

/// Folds `bits` into an integer in stream order: `acc = acc * 2 | bit`.
///
/// This is the exact inverse of [`int_to_bits`] for any value that fits.
pub fn bits_to_int<T>(bits: &BitSlice<u8, Msb0>) -> T
where
    T: PrimInt + Unsigned,
{
    bits.iter().by_vals().fold(T::zero(), |acc, bit| {
        let next = if bit { T::one() } else { T::zero() };
        (acc << 1) | next
    })
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
