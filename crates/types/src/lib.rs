//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the client.
//! Everything here is plain data: the simulation core, the protocol adapter
//! and the binary all agree on these definitions.
//!
//! # Game Dimensions
//!
//! CODEVS Reborn defaults:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 10 | Field columns |
//! | `DEFAULT_HEIGHT` | 16 | Visible field rows |
//! | `DEFAULT_PACK_SIZE` | 2 | Side length of a pack |
//! | `DEFAULT_SUMMATION` | 10 | Erasing sum; obstacle sentinel is `summation + 1` |
//! | `DEFAULT_MAX_TURN` | 500 | Packs announced before the first turn |
//!
//! The field used for simulation is taller than the visible one: it carries
//! `pack_size + 1` hidden rows on top where packs spawn and fall.
//!
//! # Examples
//!
//! ```
//! use codevs_types::{GameConfig, Move, Rotation};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.simulation_height(), 19);
//! assert_eq!(config.obstacle_block(), 11);
//! assert_eq!(config.max_column(), 8);
//!
//! let mv = Move::new(3, Rotation::from_count(5));
//! assert_eq!(mv.to_string(), "3 1");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field or pack cell value.
pub type Block = u8;

/// Empty cell marker
pub const EMPTY_BLOCK: Block = 0;

/// Field width in columns
pub const DEFAULT_WIDTH: usize = 10;

/// Visible field height in rows
pub const DEFAULT_HEIGHT: usize = 16;

/// Pack side length
pub const DEFAULT_PACK_SIZE: usize = 2;

/// Sum of two adjacent blocks that erases them
pub const DEFAULT_SUMMATION: u8 = 10;

/// Number of packs announced before the first turn
pub const DEFAULT_MAX_TURN: usize = 500;

/// Largest pack side length the inline pack storage supports
pub const MAX_PACK_SIZE: usize = 4;

/// Token closing every pack and field block on the wire
pub const END_TOKEN: &str = "END";

/// Identity announced to the judge when no name is configured
pub const DEFAULT_AI_NAME: &str = "codevs-client";

/// Quarter-turn orientation of a pack.
///
/// - **North**: as announced (0 turns)
/// - **East**: 90° clockwise (1 turn)
/// - **South**: 180° (2 turns)
/// - **West**: 270° clockwise (3 turns)
///
/// The cycle goes North → East → South → West → North. On the wire a
/// rotation is its clockwise turn count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All orientations in turn-count order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Build from any clockwise turn count (taken modulo 4)
    ///
    /// # Examples
    ///
    /// ```
    /// use codevs_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_count(0), Rotation::North);
    /// assert_eq!(Rotation::from_count(3), Rotation::West);
    /// assert_eq!(Rotation::from_count(6), Rotation::South);
    /// ```
    pub fn from_count(times: u32) -> Self {
        Self::ALL[(times % 4) as usize]
    }

    /// Clockwise quarter turns from North (0..=3)
    pub fn count(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use codevs_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation that undoes this one
    pub fn inverse(&self) -> Self {
        Self::from_count(4 - self.count() as u32)
    }
}

/// A move sent to the judge: drop the pack at `column` after `rotation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Leftmost field column covered by the pack
    pub column: usize,
    pub rotation: Rotation,
}

impl Move {
    pub fn new(column: usize, rotation: Rotation) -> Self {
        Self { column, rotation }
    }
}

impl fmt::Display for Move {
    /// Wire format: `"<column> <rotation count>"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.rotation.count())
    }
}

/// Configuration errors reported by [`GameConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pack size must be between 1 and 4, got {0}")]
    PackSize(usize),
    #[error("pack size {pack_size} does not fit a field {width} columns wide")]
    PackWiderThanField { pack_size: usize, width: usize },
    #[error("field height must be positive")]
    ZeroHeight,
    #[error("summation {0} leaves no room for the obstacle sentinel")]
    Summation(u8),
    #[error("max turn must be positive")]
    ZeroMaxTurn,
}

/// Game dimensions and sentinels shared by every component.
///
/// Replaces the sample clients' global constants; construct once and pass
/// by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub pack_size: usize,
    pub summation: u8,
    pub max_turn: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pack_size: DEFAULT_PACK_SIZE,
            summation: DEFAULT_SUMMATION,
            max_turn: DEFAULT_MAX_TURN,
        }
    }
}

impl GameConfig {
    /// Apply `CODEVS_*` environment overrides on top of `self`.
    ///
    /// Unset or unparsable variables leave the current value in place.
    pub fn with_env_overrides(self) -> Self {
        use std::env;

        fn read<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        Self {
            width: read("CODEVS_WIDTH").unwrap_or(self.width),
            height: read("CODEVS_HEIGHT").unwrap_or(self.height),
            pack_size: read("CODEVS_PACK_SIZE").unwrap_or(self.pack_size),
            summation: read("CODEVS_SUMMATION").unwrap_or(self.summation),
            max_turn: read("CODEVS_MAX_TURN").unwrap_or(self.max_turn),
        }
    }

    /// Defaults overlaid with environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pack_size == 0 || self.pack_size > MAX_PACK_SIZE {
            return Err(ConfigError::PackSize(self.pack_size));
        }
        if self.pack_size > self.width {
            return Err(ConfigError::PackWiderThanField {
                pack_size: self.pack_size,
                width: self.width,
            });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.summation == Block::MAX {
            return Err(ConfigError::Summation(self.summation));
        }
        if self.max_turn == 0 {
            return Err(ConfigError::ZeroMaxTurn);
        }
        Ok(())
    }

    /// Rows above the visible field reserved for falling packs
    pub fn hidden_rows(&self) -> usize {
        self.pack_size + 1
    }

    /// Total rows of the simulated field (hidden + visible)
    pub fn simulation_height(&self) -> usize {
        self.height + self.hidden_rows()
    }

    /// Sentinel value of an obstacle block
    pub fn obstacle_block(&self) -> Block {
        self.summation + 1
    }

    /// Rightmost column a pack may be dropped at
    pub fn max_column(&self) -> usize {
        self.width - self.pack_size
    }
}
