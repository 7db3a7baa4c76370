//! Maps slot records to and from the two-digit modifiers stored in the
//! bit-packed layout, and owns the range validation applied on decode.
//!
//! The offset formula is applied identically in both directions:
//!
//! ```text
//! encode: modifier = id % 100                      (id > 0, else 0)
//! decode: id = modifier + base + slot * 100        (modifier > 0, else 0)
//! ```
//!
//! Everything above the last two decimal digits is discarded on encode, so ids
//! whose remainder does not belong to their slot do not survive a round trip.

use crate::bridge::format::{
    EGO_BASE, EGO_ID_RANGE, MODIFIER_RADIX, PERSONALITY_BASE, PERSONALITY_ID_RANGE,
    SLOT_OFFSET_STEP, SLOT_TYPE_RANGE,
};
use crate::types::{SlotRecord, EGO_COUNT};

/// The raw field values of one slot group, before bit embedding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotModifiers {
    pub personality: u32,
    pub slot_type: u32,
    pub egos: [u32; EGO_COUNT],
}

//==================================================================================
// 1. Encode Direction
//==================================================================================

/// Reduces every id to its modifier. No range check happens here; the slot
/// type passes through and is truncated to its field width by the bit writer.
pub fn to_modifiers(record: &SlotRecord) -> SlotModifiers {
    SlotModifiers {
        personality: id_to_modifier(record.personality_id),
        // Two's-complement reinterpretation; only the low bits reach the wire.
        slot_type: record.slot_type as u32,
        egos: record.egos.map(id_to_modifier),
    }
}

fn id_to_modifier(id: i32) -> u32 {
    if id > 0 {
        (id % MODIFIER_RADIX) as u32
    } else {
        0
    }
}

//==================================================================================
// 2. Decode Direction
//==================================================================================

/// Rebuilds the record at position `slot` from its modifiers.
///
/// Returns the record (or `None` if it is empty after validation) together
/// with a flag that is true when validation zeroed any field.
pub fn from_modifiers(
    slot: u8,
    modifiers: &SlotModifiers,
    validate: bool,
) -> (Option<SlotRecord>, bool) {
    let mut record = SlotRecord {
        slot,
        personality_id: modifier_to_id(modifiers.personality, PERSONALITY_BASE, slot),
        egos: modifiers
            .egos
            .map(|modifier| modifier_to_id(modifier, EGO_BASE, slot)),
        slot_type: modifiers.slot_type as i32,
    };

    let had_error = validate && validate_record(&mut record);

    if record.is_empty() {
        (None, had_error)
    } else {
        (Some(record), had_error)
    }
}

fn modifier_to_id(modifier: u32, base: i32, slot: u8) -> i32 {
    if modifier > 0 {
        modifier as i32 + base + i32::from(slot) * SLOT_OFFSET_STEP
    } else {
        0
    }
}

//==================================================================================
// 3. Validation
//==================================================================================

/// Zeroes every field outside its documented domain.
///
/// Personality ids must be `0` or in `[10000, 99999]`, ego ids `0` or in
/// `[20000, 99999]`, and the slot type in `[0, 15]`. Returns true if anything
/// was zeroed.
pub fn validate_record(record: &mut SlotRecord) -> bool {
    let mut had_error = false;

    if record.personality_id != 0 && !PERSONALITY_ID_RANGE.contains(&record.personality_id) {
        log::debug!(
            "slot {}: personality id {} out of range",
            record.slot,
            record.personality_id
        );
        record.personality_id = 0;
        had_error = true;
    }

    for ego in record.egos.iter_mut() {
        if *ego != 0 && !EGO_ID_RANGE.contains(&*ego) {
            log::debug!("slot {}: ego id {} out of range", record.slot, ego);
            *ego = 0;
            had_error = true;
        }
    }

    if !SLOT_TYPE_RANGE.contains(&record.slot_type) {
        log::debug!("slot {}: slot type {} out of range", record.slot, record.slot_type);
        record.slot_type = 0;
        had_error = true;
    }

    had_error
}

//==================================================================================
// 4. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_modifiers_keeps_last_two_digits() {
        let record = SlotRecord::new(3, 10305, [20301, 0, 20399, 0, 0], 2);
        let modifiers = to_modifiers(&record);
        assert_eq!(modifiers.personality, 5);
        assert_eq!(modifiers.slot_type, 2);
        assert_eq!(modifiers.egos, [1, 0, 99, 0, 0]);
    }

    #[test]
    fn test_to_modifiers_non_positive_ids_are_zero() {
        let record = SlotRecord::new(1, -10101, [0, -5, 0, 0, 0], 0);
        let modifiers = to_modifiers(&record);
        assert_eq!(modifiers.personality, 0);
        assert_eq!(modifiers.egos, [0; EGO_COUNT]);
    }

    #[test]
    fn test_from_modifiers_applies_slot_offset() {
        let modifiers = SlotModifiers {
            personality: 1,
            slot_type: 1,
            egos: [1, 2, 0, 0, 0],
        };
        let (record, had_error) = from_modifiers(7, &modifiers, false);
        let record = record.unwrap();
        assert_eq!(record.personality_id, 10701);
        assert_eq!(record.egos, [20701, 20702, 0, 0, 0]);
        assert!(record.enabled());
        assert!(!had_error);
    }

    #[test]
    fn test_from_modifiers_roundtrips_matching_ids() {
        let original = SlotRecord::new(12, 11242, [21201, 21202, 21203, 21204, 21205], 15);
        let (decoded, _) = from_modifiers(12, &to_modifiers(&original), true);
        assert_eq!(decoded, Some(original));
    }

    #[test]
    fn test_from_modifiers_drops_empty_slot() {
        let modifiers = SlotModifiers {
            slot_type: 9,
            ..Default::default()
        };
        assert_eq!(from_modifiers(2, &modifiers, true), (None, false));
    }

    #[test]
    fn test_foreign_remainder_is_rebased_to_slot() {
        // 10101 in slot 2 keeps modifier 1 and comes back as 10201.
        let original = SlotRecord::new(2, 10101, [0; EGO_COUNT], 1);
        let (decoded, _) = from_modifiers(2, &to_modifiers(&original), false);
        assert_eq!(decoded.unwrap().personality_id, 10201);
    }

    #[test]
    fn test_validate_zeroes_out_of_range_personality() {
        let mut record = SlotRecord::new(1, 5, [20101, 0, 0, 0, 0], 1);
        assert!(validate_record(&mut record));
        assert_eq!(record.personality_id, 0);
        assert_eq!(record.egos[0], 20101);
    }

    #[test]
    fn test_validate_zeroes_each_bad_field() {
        let mut record = SlotRecord::new(1, 100_000, [19_999, 20_000, 99_999, 100_000, -1], 16);
        assert!(validate_record(&mut record));
        assert_eq!(record.personality_id, 0);
        assert_eq!(record.egos, [0, 20_000, 99_999, 0, 0]);
        assert_eq!(record.slot_type, 0);
    }

    #[test]
    fn test_validate_accepts_boundaries_and_zero() {
        let mut record = SlotRecord::new(1, 10_000, [0, 20_000, 0, 99_999, 0], 0);
        let before = record;
        assert!(!validate_record(&mut record));
        assert_eq!(record, before);

        let mut record = SlotRecord::new(1, 99_999, [0; EGO_COUNT], 15);
        assert!(!validate_record(&mut record));
    }
}
