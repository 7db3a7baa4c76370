// In: src/bridge/format.rs

//! Defines every wire-level constant of the deck code format.
//! This is the single source of truth shared by the slot transform and the
//! orchestrator. None of these values may change without breaking codes
//! produced by, or destined for, the external consumer.

use std::ops::RangeInclusive;

use crate::types::{EGO_COUNT, SLOT_COUNT};

//==================================================================================
// I. Bit-Packed Layout
//==================================================================================

/// The single leading bit written before the slot groups.
pub const HEADER_BIT: bool = true;
pub const HEADER_BITS: usize = 1;

pub const PERSONALITY_BITS: usize = 7;
pub const SLOT_TYPE_BITS: usize = 4;
pub const EGO_BITS: usize = 7;

/// Bits per slot group: personality, slot type, then five egos.
pub const SLOT_GROUP_BITS: usize = PERSONALITY_BITS + SLOT_TYPE_BITS + EGO_COUNT * EGO_BITS;

/// 1 + 12 * 46 = 553.
pub const TOTAL_BITS: usize = HEADER_BITS + SLOT_COUNT as usize * SLOT_GROUP_BITS;

//==================================================================================
// II. Id Reconstruction
//==================================================================================

pub const PERSONALITY_BASE: i32 = 10_000;
pub const EGO_BASE: i32 = 20_000;
/// `slot * SLOT_OFFSET_STEP` is added to every reconstructed id.
pub const SLOT_OFFSET_STEP: i32 = 100;
/// Encoding keeps only `id % MODIFIER_RADIX`.
pub const MODIFIER_RADIX: i32 = 100;

//==================================================================================
// III. Validation Domains
//==================================================================================

pub const PERSONALITY_ID_RANGE: RangeInclusive<i32> = 10_000..=99_999;
pub const EGO_ID_RANGE: RangeInclusive<i32> = 20_000..=99_999;
pub const SLOT_TYPE_RANGE: RangeInclusive<i32> = 0..=15;

//==================================================================================
// IV. Out-of-Rule Layout
//==================================================================================

/// personality id, slot type, five ego ids.
pub const INTS_PER_SLOT: usize = 2 + EGO_COUNT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sizes() {
        assert_eq!(SLOT_GROUP_BITS, 46);
        assert_eq!(TOTAL_BITS, 553);
        assert_eq!(TOTAL_BITS, 0x229);
        assert_eq!(INTS_PER_SLOT, 7);
    }

    #[test]
    fn test_field_widths_cover_domains() {
        assert!(MODIFIER_RADIX - 1 < 1 << PERSONALITY_BITS);
        assert!(MODIFIER_RADIX - 1 < 1 << EGO_BITS);
        assert_eq!(*SLOT_TYPE_RANGE.end(), (1 << SLOT_TYPE_BITS) - 1);
    }
}
