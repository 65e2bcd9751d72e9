//! Turn loop driver.
//!
//! Strict request/response with the judge: announce the name, read every
//! pack, then per turn read a snapshot, answer one move and flush before
//! reading again. Diagnostics go to a separate writer (stderr in the binary)
//! and are best-effort.

use std::io::{BufRead, Write};

use crate::core::{Pack, PackQueue, Placement, TurnSnapshot};
use crate::error::{ProtocolError, Result};
use crate::policy::Policy;
use crate::protocol::{read_packs, read_turn, write_line, write_move};
use crate::scanner::TokenReader;
use crate::types::{GameConfig, Move, DEFAULT_AI_NAME};

/// Runtime knobs that are not game dimensions
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Identity line sent before anything is read
    pub name: String,
    /// Dump turn, pack and field to the diagnostic writer every turn
    pub diagnostics: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_AI_NAME.to_string(),
            diagnostics: true,
        }
    }
}

/// Result of deciding one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub mv: Move,
    /// The turn's pack after the chosen rotation
    pub rotated: Pack,
    pub placement: Placement,
}

/// Totals for a finished game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub turns_played: usize,
    /// Moves the policy picked that do not fit the field
    pub misfits: usize,
}

pub struct TurnLoop<P> {
    config: GameConfig,
    policy: P,
    options: ClientOptions,
}

impl<P: Policy> TurnLoop<P> {
    pub fn new(config: GameConfig, policy: P, options: ClientOptions) -> Self {
        Self {
            config,
            policy,
            options,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Pick and validate the move for one turn
    pub fn decide(&mut self, turn: &TurnSnapshot, packs: &PackQueue) -> Result<TurnOutcome> {
        let pack = packs
            .get(turn.turn)
            .ok_or(ProtocolError::TurnOutOfRange {
                turn: turn.turn,
                max_turn: packs.len(),
            })?;
        let mv = self.policy.choose(turn, pack, &self.config);
        let rotated = pack.rotated(mv.rotation);
        let placement = turn.player.field.check_placement(&rotated, mv.column);
        Ok(TurnOutcome {
            mv,
            rotated,
            placement,
        })
    }

    /// Play until the judge closes the input.
    ///
    /// The first protocol error ends the game and is returned.
    pub fn run<R, W, E>(&mut self, input: R, output: &mut W, diag: &mut E) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        write_line(output, &self.options.name)?;

        let mut sc = TokenReader::new(input);
        let packs = read_packs(&mut sc, &self.config)?;
        if self.options.diagnostics {
            let _ = writeln!(diag, "[Client] {} packs received", packs.len());
        }

        let mut summary = RunSummary::default();
        while let Some(turn) = read_turn(&mut sc, &self.config)? {
            let outcome = self.decide(&turn, &packs)?;

            if !outcome.placement.fits() {
                summary.misfits += 1;
                if self.options.diagnostics {
                    let _ = writeln!(
                        diag,
                        "[Client] turn {}: move {} does not fit: {:?}",
                        turn.turn, outcome.mv, outcome.placement
                    );
                }
            }
            if self.options.diagnostics {
                let _ = writeln!(diag, "turn: {}", turn.turn);
                let _ = writeln!(diag, "{}", outcome.rotated);
                let _ = writeln!(diag, "{}", turn.player.field);
                let _ = diag.flush();
            }

            write_move(output, outcome.mv)?;
            summary.turns_played += 1;
        }

        if self.options.diagnostics {
            let _ = writeln!(
                diag,
                "[Client] input closed after {} turns",
                summary.turns_played
            );
        }
        Ok(summary)
    }
}
