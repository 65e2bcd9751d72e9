//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the turn-protocol simulation layer of the client: packs
//! and their rotations, fields, and the obstacle-drop rule the judge applies
//! before every turn. It has **no** I/O; parsing and the turn loop live in
//! `codevs-adapter`.
//!
//! # Module Structure
//!
//! - [`pack`]: square packs and 90° rotations
//! - [`field`]: a player's grid with hidden buffer rows, move validation
//! - [`obstacle`]: dropping pending obstacle blocks onto a field
//! - [`queue`]: the packs announced before the first turn
//! - [`snapshot`]: per-turn status for both players
//! - [`rng`]: seeded random source for the move policy
//!
//! # Example
//!
//! ```
//! use codevs_core::{fall_obstacle, Field, Pack};
//! use codevs_core::types::{GameConfig, Rotation};
//!
//! let config = GameConfig::default();
//!
//! let pack = Pack::from_rows(&[[1, 2], [3, 4]]).unwrap();
//! let east = pack.rotated(Rotation::East);
//! assert_eq!(east.to_rows(), vec![vec![3, 1], vec![4, 2]]);
//!
//! let field = Field::empty(&config);
//! let after = fall_obstacle(&field, 10, &config);
//! assert_eq!(after.count(config.obstacle_block()), 10);
//! assert!(after.check_placement(&east, 0).fits());
//! ```

pub mod field;
pub mod obstacle;
pub mod pack;
pub mod queue;
pub mod rng;
pub mod snapshot;

pub use codevs_types as types;

// Re-export commonly used types for convenience
pub use field::{Field, Placement};
pub use obstacle::fall_obstacle;
pub use pack::Pack;
pub use queue::PackQueue;
pub use rng::SimpleRng;
pub use snapshot::{PlayerStatus, TurnSnapshot};
