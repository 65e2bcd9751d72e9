//! One-shot decision from recorded input files.
//!
//! Feeds a pack file (every announced pack) and an info file (a single turn)
//! through the same decision path as the live loop and returns a
//! serializable record of what the client would answer.

use std::io::BufRead;

use serde::Serialize;

use crate::core::Placement;
use crate::error::{ProtocolError, Result};
use crate::policy::Policy;
use crate::protocol::{read_packs, read_turn};
use crate::runtime::TurnLoop;
use crate::scanner::TokenReader;
use crate::types::Block;

/// What the client decided for the recorded turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub turn: usize,
    pub column: usize,
    pub rotation: u8,
    /// Pack after rotation, top row first
    pub pack: Vec<Vec<Block>>,
    pub fits: bool,
    pub score: u32,
    pub enemy_score: u32,
}

/// Decide the recorded turn in `info` using the packs in `packs`
pub fn decide_once<P, A, B>(driver: &mut TurnLoop<P>, packs: A, info: B) -> Result<Decision>
where
    P: Policy,
    A: BufRead,
    B: BufRead,
{
    let config = *driver.config();
    let packs = read_packs(&mut TokenReader::new(packs), &config)?;
    let turn = read_turn(&mut TokenReader::new(info), &config)?.ok_or(
        ProtocolError::UnexpectedEof {
            expected: "turn index",
        },
    )?;

    let outcome = driver.decide(&turn, &packs)?;
    Ok(Decision {
        turn: turn.turn,
        column: outcome.mv.column,
        rotation: outcome.mv.rotation.count(),
        pack: outcome.rotated.to_rows(),
        fits: outcome.placement == Placement::Fits,
        score: turn.player.score,
        enemy_score: turn.enemy.score,
    })
}
