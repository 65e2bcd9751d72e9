//! Adapter module - talking to the CODEVS judge
//!
//! The judge drives the client over stdin/stdout with whitespace-separated
//! integers and `END` terminators. This crate turns that stream into
//! [`codevs_core`] values, asks a [`Policy`] for a move each turn and writes
//! the answer back.
//!
//! # Protocol Overview
//!
//! 1. **Handshake**: client prints its name on one line
//! 2. **Packs**: judge sends `max_turn` packs, each closed by `END`
//! 3. **Turns**: judge sends the turn index and both players' status and
//!    fields; client answers `"<column> <rotation>"`
//! 4. **Shutdown**: judge closes stdin; the loop ends cleanly
//!
//! Any malformed or truncated input is a [`ProtocolError`] and ends the game.
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Judge: codevs-client
//! Judge -> Client: 1 2 / 3 4 / END   (x max_turn)
//! Judge -> Client: 0 / 180000 0 0 0 / <16 rows> / END / 180000 0 0 0 / <16 rows> / END
//! Client -> Judge: 4 1
//! ```
//!
//! # Implementation
//!
//! - See [`protocol`] for parsing and writing
//! - See [`runtime`] for the turn loop
//! - See [`bench`] for deciding a single recorded turn

pub mod bench;
pub mod error;
pub mod policy;
pub mod protocol;
pub mod runtime;
pub mod scanner;

pub use codevs_core as core;
pub use codevs_types as types;

pub use bench::{decide_once, Decision};
pub use error::{ProtocolError, Result};
pub use policy::{Policy, RandomPolicy};
pub use protocol::{read_field, read_pack, read_packs, read_player, read_turn, write_line, write_move};
pub use runtime::{ClientOptions, RunSummary, TurnLoop, TurnOutcome};
pub use scanner::TokenReader;
