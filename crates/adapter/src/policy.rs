//! Move selection
//!
//! The turn loop only needs a `(column, rotation)` pair per turn; how it is
//! chosen sits behind [`Policy`].

use crate::core::{Pack, SimpleRng, TurnSnapshot};
use crate::types::{GameConfig, Move, Rotation};

pub trait Policy {
    /// Pick a move for `pack` given the current turn
    fn choose(&mut self, turn: &TurnSnapshot, pack: &Pack, config: &GameConfig) -> Move;
}

/// Uniform random rotation and column, no lookahead.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: SimpleRng,
}

impl RandomPolicy {
    pub fn new(rng: SimpleRng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _turn: &TurnSnapshot, _pack: &Pack, config: &GameConfig) -> Move {
        let rotation = Rotation::from_count(self.rng.next_range(4));
        let column = self.rng.next_inclusive(0, config.max_column());
        Move::new(column, rotation)
    }
}
