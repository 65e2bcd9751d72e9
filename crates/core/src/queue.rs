//! Pack queue - every pack of the game, announced before the first turn
//!
//! Indexed by turn number. Written once at startup, read-only afterwards.

use crate::pack::Pack;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackQueue {
    packs: Vec<Pack>,
}

impl PackQueue {
    pub fn new(packs: Vec<Pack>) -> Self {
        Self { packs }
    }

    /// Pack dropped on turn `turn`
    pub fn get(&self, turn: usize) -> Option<&Pack> {
        self.packs.get(turn)
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pack> {
        self.packs.iter()
    }
}

impl FromIterator<Pack> for PackQueue {
    fn from_iter<I: IntoIterator<Item = Pack>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
