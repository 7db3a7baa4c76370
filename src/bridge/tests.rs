use super::*;
use crate::config::{DeckCodeConfig, EncodeMode};
use crate::types::{DecodedDeck, SlotRecord, EGO_COUNT};

const GAME_CODE: &str = "H4sIAAAAAAAACnMMdEx3BAInR2cQ5ejq6AmmqSLsaGsLANDKykhgAAAA";

fn sample_formation() -> SlotRecord {
    SlotRecord::new(1, 10101, [20101, 20102, 20103, 0, 0], 1)
}

fn slots_with_first_ego(count: u8) -> Vec<SlotRecord> {
    (1..=count)
        .map(|slot| {
            let offset = i32::from(slot) * 100;
            SlotRecord::new(slot, 10_000 + offset + 1, [20_000 + offset + 1, 0, 0, 0, 0], 1)
        })
        .collect()
}

#[test]
fn test_decode_original_code() {
    let deck = decode(GAME_CODE, false);
    assert!(!deck.slots.is_empty(), "No formations decoded from game code");
    assert!(!deck.had_errors);
    assert_eq!(deck.slot(12).map(|record| record.personality_id), Some(11201));
}

#[test]
fn test_encode_decode_roundtrip_from_game_code() {
    let original = decode(GAME_CODE, false);
    let re_encoded = encode(&original.slots, false);
    assert!(!re_encoded.is_empty());

    let final_deck = decode(&re_encoded, false);
    for slot in 1..=12 {
        assert_eq!(original.slot(slot), final_deck.slot(slot), "slot {slot}");
    }
}

#[test]
fn test_concrete_single_slot_scenario() {
    let record = SlotRecord::new(1, 10101, [20101, 0, 0, 0, 0], 1);
    let deck = decode(&encode(&[record], false), false);
    assert_eq!(deck, DecodedDeck { slots: vec![record], had_errors: false });
}

#[test]
fn test_encode_single_formation() {
    let code = encode(&[sample_formation()], false);
    assert!(!code.is_empty());
    assert!(code.is_ascii());
    assert_eq!(decode(&code, false).slots, vec![sample_formation()]);
}

#[test]
fn test_encode_multiple_slots() {
    let slots = slots_with_first_ego(5);
    let deck = decode(&encode(&slots, false), false);
    assert_eq!(deck.slots.len(), 5);
    assert_eq!(deck.slots, slots);
}

#[test]
fn test_encode_all_12_slots() {
    let slots = slots_with_first_ego(12);
    assert_eq!(decode(&encode(&slots, false), true).slots, slots);
}

#[test]
fn test_empty_input_laws() {
    assert_eq!(encode(&[], false), "");
    assert_eq!(encode(&[], true), "");
    assert_eq!(decode("", false), DecodedDeck::default());
    assert_eq!(decode("", true), DecodedDeck::default());
}

#[test]
fn test_encode_out_of_rule_mode() {
    let original = decode(GAME_CODE, false);
    let out_of_rule_code = encode(&original.slots, true);
    assert!(!out_of_rule_code.is_empty());
    assert_ne!(out_of_rule_code, encode(&original.slots, false));
    assert_eq!(decode_out_of_rule(&out_of_rule_code, false), original);
}

#[test]
fn test_out_of_rule_is_not_auto_detected() {
    let record = SlotRecord::new(1, 10101, [20101, 0, 0, 0, 0], 1);
    let code = encode(&[record], true);
    assert_ne!(decode(&code, false).slots, vec![record]);
}

#[test]
fn test_validation_flags_out_of_range_ids() {
    // Far outside any domain; encode keeps only the last two digits.
    let record = SlotRecord::new(1, 99_999_999, [0; EGO_COUNT], 1);
    let deck = decode(&encode(&[record], false), true);
    assert!(!deck.had_errors);
    assert_eq!(deck.slots[0].personality_id, 10_199);

    let flat = decode_out_of_rule(&encode(&[record], true), true);
    assert!(flat.had_errors);
    assert!(flat.slots.is_empty());
}

#[test]
fn test_disabled_slot_roundtrips() {
    let record = SlotRecord::new(1, 10101, [0; EGO_COUNT], 0);
    let deck = decode(&encode(&[record], false), false);
    assert_eq!(deck.slots, vec![record]);
    assert!(!deck.slots[0].enabled());
}

#[test]
fn test_garbage_never_errors() {
    for garbage in ["!", "====", "H4sI", "AQAgAAAABACA", "ZGVjaw=="] {
        let deck = decode(garbage, true);
        assert!(deck.slots.is_empty(), "input {garbage:?}");
        assert!(!deck.had_errors, "input {garbage:?}");
    }
}

#[test]
fn test_config_driven_roundtrip_for_both_modes() {
    let slots = slots_with_first_ego(3);
    for mode in [EncodeMode::BitPacked, EncodeMode::OutOfRule] {
        let config = DeckCodeConfig {
            mode,
            validate: true,
            compression_level: 9,
        };
        let code = encode_with_config(&slots, &config).unwrap();
        let deck = decode_with_config(&code, &config).unwrap();
        assert_eq!(deck.slots, slots, "mode {mode:?}");
        assert!(!deck.had_errors);
    }
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (1..=8u8)
        .map(|count| {
            std::thread::spawn(move || {
                let slots = slots_with_first_ego(count);
                let deck = decode(&encode(&slots, false), true);
                assert_eq!(deck.slots, slots);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
