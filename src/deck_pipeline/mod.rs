//! The deck-level engine: the slot transform and the orchestrator that drives
//! the kernels and the framing layer for whole decks.

pub mod orchestrator;
pub mod slot_transform;
