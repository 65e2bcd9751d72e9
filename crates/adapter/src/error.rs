//! Protocol errors
//!
//! Every variant is fatal: the judge is the only source of truth and a
//! desynchronized token stream cannot be recovered.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("invalid token {token:?} while reading {expected}")]
    InvalidToken {
        token: String,
        expected: &'static str,
    },
    #[error("expected END terminator, found {found:?}")]
    MissingTerminator { found: String },
    #[error("pack of size {size} cannot be built")]
    InvalidPack { size: usize },
    #[error("field of {width}x{height} cannot be built")]
    InvalidField { width: usize, height: usize },
    #[error("turn {turn} has no announced pack ({max_turn} packs known)")]
    TurnOutOfRange { turn: usize, max_turn: usize },
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
