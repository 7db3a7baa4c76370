//! The caller-facing record for one formation slot, and the result of a decode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fixed slot positions in a formation deck.
pub const SLOT_COUNT: u8 = 12;
/// Number of ego reference ids carried by each slot.
pub const EGO_COUNT: usize = 5;

/// One of the twelve fixed positions of a formation deck.
///
/// Ids are signed because the out-of-rule layout stores them as raw `i32`s.
/// A record whose personality and ego ids are all zero is "empty" and never
/// appears in decode output.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotRecord {
    /// Position in the deck, 1 through 12.
    pub slot: u8,
    pub personality_id: i32,
    pub egos: [i32; EGO_COUNT],
    /// 0..=15 in the bit-packed layout.
    pub slot_type: i32,
}

impl SlotRecord {
    pub fn new(slot: u8, personality_id: i32, egos: [i32; EGO_COUNT], slot_type: i32) -> Self {
        Self {
            slot,
            personality_id,
            egos,
            slot_type,
        }
    }

    /// Derived, never stored: a slot is enabled iff its slot type is positive.
    pub fn enabled(&self) -> bool {
        self.slot_type > 0
    }

    pub fn is_empty(&self) -> bool {
        self.personality_id == 0 && self.egos.iter().all(|&ego| ego == 0)
    }

    /// Whether `slot` names one of the twelve deck positions.
    pub fn has_valid_position(&self) -> bool {
        (1..=SLOT_COUNT).contains(&self.slot)
    }
}

impl fmt::Display for SlotRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot {:>2}: personality {} egos {:?} type {}{}",
            self.slot,
            self.personality_id,
            self.egos,
            self.slot_type,
            if self.enabled() { "" } else { " (disabled)" }
        )
    }
}

/// The outcome of a decode call.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedDeck {
    /// Non-empty slots in ascending slot order.
    pub slots: Vec<SlotRecord>,
    /// True if validation zeroed at least one field anywhere in the deck.
    pub had_errors: bool,
}

impl DecodedDeck {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, slot: u8) -> Option<&SlotRecord> {
        self.slots.iter().find(|record| record.slot == slot)
    }
}
