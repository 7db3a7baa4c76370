//! This module defines the core, strongly-typed data representations shared by
//! the deck pipeline and the public bridge.

pub mod slot_record;

// Re-export the main type(s) for easier access.
pub use slot_record::{DecodedDeck, SlotRecord, EGO_COUNT, SLOT_COUNT};
