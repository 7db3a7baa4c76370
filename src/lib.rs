//! This file is the root of the `formation_deck_code` Rust crate.
//!
//! The crate encodes a twelve-slot formation deck into the compact text code
//! shared with the game client, and decodes such codes back into slot records.
//! Its responsibilities here are limited to declaring the modules and
//! re-exporting the public surface of the `bridge`.
//!
//! ```
//! use formation_deck_code::{decode, encode, SlotRecord};
//!
//! let slot = SlotRecord::new(1, 10101, [20101, 0, 0, 0, 0], 1);
//! let code = encode(&[slot], false);
//! let deck = decode(&code, false);
//! assert_eq!(deck.slots, vec![slot]);
//! assert!(!deck.had_errors);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod error;
pub mod frame_pipeline;
pub mod kernels;
pub mod observability;
pub mod types;

mod deck_pipeline;

//==================================================================================
// 2. Public Surface
//==================================================================================
pub use bridge::{decode, decode_out_of_rule, decode_with_config, encode, encode_with_config};
pub use config::{DeckCodeConfig, EncodeMode};
pub use error::DeckCodeError;
pub use observability::enable_verbose_logging;
pub use types::{DecodedDeck, SlotRecord};
