// In: src/deck_pipeline/orchestrator.rs

//! Assembles and disassembles whole decks.
//!
//! Encoding turns a slice of slot records into either the 553-bit stream or
//! the flat integer list and hands it to the framing layer. Decoding runs the
//! framing layer backwards and rebuilds the records. Nothing here fails: a
//! code that cannot be unframed decodes to an empty deck, and range problems
//! are reported through `DecodedDeck::had_errors`.

use bitvec::prelude::*;

use crate::bridge::format::{
    EGO_BITS, HEADER_BIT, HEADER_BITS, INTS_PER_SLOT, PERSONALITY_BITS, SLOT_TYPE_BITS,
    TOTAL_BITS,
};
use crate::deck_pipeline::slot_transform::{
    from_modifiers, to_modifiers, validate_record, SlotModifiers,
};
use crate::frame_pipeline;
use crate::kernels::bitstream::{bits_to_int, push_int, BitStream};
use crate::types::{DecodedDeck, SlotRecord, EGO_COUNT, SLOT_COUNT};

//==================================================================================
// 1. Bit-Packed Mode
//==================================================================================

/// Encodes `slots` into a bit-packed deck code.
///
/// An empty slice yields the empty string without touching the framing layer.
pub fn encode_bit_packed(slots: &[SlotRecord], compression_level: u32) -> String {
    if slots.is_empty() {
        return String::new();
    }
    let bits = build_bitstream(slots);
    let inner = frame_pipeline::bits_to_base64(&bits);
    frame_pipeline::compress_text_with_level(&inner, compression_level)
}

/// Decodes a bit-packed deck code.
///
/// There is no mode marker on the wire, so out-of-rule codes are misread
/// rather than rejected.
pub fn decode_bit_packed(code: &str, validate: bool) -> DecodedDeck {
    let code = code.trim();
    if code.is_empty() {
        return DecodedDeck::default();
    }

    let inner = frame_pipeline::decompress_text(code);
    if inner.is_empty() {
        return DecodedDeck::default();
    }

    let bits = frame_pipeline::bits_from_base64(&inner, TOTAL_BITS);
    if bits.is_empty() {
        return DecodedDeck::default();
    }
    if bits.len() < TOTAL_BITS {
        log::warn!(
            "deck code carries {} of {} bits; missing fields read as zero",
            bits.len(),
            TOTAL_BITS
        );
    }

    parse_bitstream(&bits, validate)
}

/// Lays out the header bit and all twelve slot groups.
///
/// Positions absent from `slots` are written as zero groups. When a slot number
/// repeats, the last record wins; slot numbers outside 1..=12 are skipped.
pub(crate) fn build_bitstream(slots: &[SlotRecord]) -> BitStream {
    let mut by_position: [Option<&SlotRecord>; SLOT_COUNT as usize] = [None; SLOT_COUNT as usize];
    for record in slots {
        if record.has_valid_position() {
            by_position[usize::from(record.slot) - 1] = Some(record);
        } else {
            log::warn!("skipping record with slot {} outside 1..=12", record.slot);
        }
    }

    let mut bits = BitStream::with_capacity(TOTAL_BITS);
    bits.push(HEADER_BIT);

    for record in by_position {
        let modifiers = record.map(to_modifiers).unwrap_or_default();
        push_int(&mut bits, modifiers.personality, PERSONALITY_BITS);
        push_int(&mut bits, modifiers.slot_type, SLOT_TYPE_BITS);
        for ego in modifiers.egos {
            push_int(&mut bits, ego, EGO_BITS);
        }
    }

    debug_assert_eq!(bits.len(), TOTAL_BITS);
    bits
}

/// Reads the twelve slot groups that follow the header bit.
pub(crate) fn parse_bitstream(bits: &BitSlice<u8, Msb0>, validate: bool) -> DecodedDeck {
    let mut reader = FieldReader::new(bits);
    let mut deck = DecodedDeck::default();

    for slot in 1..=SLOT_COUNT {
        let personality = reader.read(PERSONALITY_BITS);
        let slot_type = reader.read(SLOT_TYPE_BITS);
        let mut egos = [0u32; EGO_COUNT];
        for ego in egos.iter_mut() {
            *ego = reader.read(EGO_BITS);
        }

        let modifiers = SlotModifiers {
            personality,
            slot_type,
            egos,
        };
        let (record, had_error) = from_modifiers(slot, &modifiers, validate);
        deck.had_errors |= had_error;
        deck.slots.extend(record);
    }

    log::debug!(
        "decoded {} non-empty slots (had_errors = {})",
        deck.slots.len(),
        deck.had_errors
    );
    deck
}

/// Sequential fixed-width reads over a bit stream, starting after the header.
///
/// A field that runs past the end accumulates only the bits that exist.
struct FieldReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    position: usize,
}

impl<'a> FieldReader<'a> {
    fn new(bits: &'a BitSlice<u8, Msb0>) -> Self {
        Self {
            bits,
            position: HEADER_BITS.min(bits.len()),
        }
    }

    fn read(&mut self, width: usize) -> u32 {
        let end = (self.position + width).min(self.bits.len());
        let value = bits_to_int::<u32>(&self.bits[self.position..end]);
        self.position = end;
        value
    }
}

//==================================================================================
// 2. Out-of-Rule Mode
//==================================================================================

/// Encodes `slots` as raw ids, seven `i32`s per record, in input order.
pub fn encode_out_of_rule(slots: &[SlotRecord], compression_level: u32) -> String {
    if slots.is_empty() {
        return String::new();
    }
    let ints = build_int_list(slots);
    let inner = frame_pipeline::ints_to_base64(&ints);
    frame_pipeline::compress_text_with_level(&inner, compression_level)
}

/// Decodes an out-of-rule deck code.
///
/// The flat layout stores no slot numbers, so the `n`th group of seven becomes
/// slot `n + 1`. Only the first twelve groups are read; an incomplete trailing
/// group is dropped.
pub fn decode_out_of_rule(code: &str, validate: bool) -> DecodedDeck {
    let code = code.trim();
    if code.is_empty() {
        return DecodedDeck::default();
    }

    let inner = frame_pipeline::decompress_text(code);
    if inner.is_empty() {
        return DecodedDeck::default();
    }

    parse_int_list(&frame_pipeline::ints_from_base64(&inner), validate)
}

pub(crate) fn build_int_list(slots: &[SlotRecord]) -> Vec<i32> {
    let mut ints = Vec::with_capacity(slots.len() * INTS_PER_SLOT);
    for record in slots {
        ints.push(record.personality_id);
        ints.push(record.slot_type);
        ints.extend_from_slice(&record.egos);
    }
    ints
}

pub(crate) fn parse_int_list(ints: &[i32], validate: bool) -> DecodedDeck {
    let groups = ints.chunks_exact(INTS_PER_SLOT);
    if !groups.remainder().is_empty() {
        log::warn!(
            "dropping {} trailing integers that do not form a full slot",
            groups.remainder().len()
        );
    }

    let group_count = groups.len();
    if group_count > usize::from(SLOT_COUNT) {
        log::warn!(
            "dropping {} slot groups beyond slot {}",
            group_count - usize::from(SLOT_COUNT),
            SLOT_COUNT
        );
    }

    let mut deck = DecodedDeck::default();
    for (slot, group) in (1..=SLOT_COUNT).zip(groups) {
        let mut egos = [0i32; EGO_COUNT];
        egos.copy_from_slice(&group[2..]);
        let mut record = SlotRecord {
            slot,
            personality_id: group[0],
            egos,
            slot_type: group[1],
        };

        if validate {
            deck.had_errors |= validate_record(&mut record);
        }
        if !record.is_empty() {
            deck.slots.push(record);
        }
    }
    deck
}
