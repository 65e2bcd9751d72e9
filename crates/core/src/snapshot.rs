//! Turn snapshot - everything the judge tells us about one turn

use crate::field::Field;

/// One side of a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStatus {
    pub rest_time_ms: u32,
    /// Pending obstacle blocks not yet dropped
    pub obstacle_count: u32,
    pub skill_point: u32,
    pub score: u32,
    /// Field with pending obstacles already applied
    pub field: Field,
}

/// A full turn: own status first, then the opponent's
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSnapshot {
    pub turn: usize,
    pub player: PlayerStatus,
    pub enemy: PlayerStatus,
}
