//! Protocol module - the judge's line-oriented text format
//!
//! Startup (after we announce our name):
//!
//! ```text
//! <pack_size rows of pack_size ints>
//! END
//! ... repeated max_turn times
//! ```
//!
//! Every turn:
//!
//! ```text
//! <turn index>
//! <rest time ms> <obstacle count> <skill point> <score>     (own side)
//! <height rows of width ints>
//! END
//! <rest time ms> <obstacle count> <skill point> <score>     (opponent)
//! <height rows of width ints>
//! END
//! ```
//!
//! Answer: one line `"<column> <rotation>"`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::core::{fall_obstacle, Field, Pack, PackQueue, PlayerStatus, TurnSnapshot};
use crate::error::{ProtocolError, Result};
use crate::scanner::TokenReader;
use crate::types::{Block, GameConfig, Move};

/// Read one pack block (`pack_size` rows, then `END`)
pub fn read_pack<R: BufRead>(sc: &mut TokenReader<R>, config: &GameConfig) -> Result<Pack> {
    let size = config.pack_size;
    let mut cells: Vec<Block> = Vec::with_capacity(size * size);
    for _ in 0..size * size {
        cells.push(sc.read("pack cell")?);
    }
    sc.expect_end()?;
    Pack::new(size, &cells).ok_or(ProtocolError::InvalidPack { size })
}

/// Read the `max_turn` packs announced before the first turn
pub fn read_packs<R: BufRead>(sc: &mut TokenReader<R>, config: &GameConfig) -> Result<PackQueue> {
    (0..config.max_turn)
        .map(|_| read_pack(sc, config))
        .collect::<Result<Vec<_>>>()
        .map(PackQueue::new)
}

/// Read the visible rows of a field (then `END`); hidden rows come back empty
pub fn read_field<R: BufRead>(sc: &mut TokenReader<R>, config: &GameConfig) -> Result<Field> {
    let mut visible: Vec<Block> = Vec::with_capacity(config.width * config.height);
    for _ in 0..config.width * config.height {
        visible.push(sc.read("field cell")?);
    }
    sc.expect_end()?;
    Field::from_visible(config, &visible).ok_or(ProtocolError::InvalidField {
        width: config.width,
        height: config.height,
    })
}

/// Read one side's status; pending obstacles are dropped onto the field
pub fn read_player<R: BufRead>(
    sc: &mut TokenReader<R>,
    config: &GameConfig,
) -> Result<PlayerStatus> {
    let rest_time_ms = sc.read("remaining time")?;
    let obstacle_count = sc.read("obstacle count")?;
    let skill_point = sc.read("skill point")?;
    let score = sc.read("score")?;
    let field = read_field(sc, config)?;
    let field = fall_obstacle(&field, obstacle_count, config);
    Ok(PlayerStatus {
        rest_time_ms,
        obstacle_count,
        skill_point,
        score,
        field,
    })
}

/// Read a full turn.
///
/// Returns `Ok(None)` when the input ends cleanly before the turn index;
/// running out anywhere later is a protocol error.
pub fn read_turn<R: BufRead>(
    sc: &mut TokenReader<R>,
    config: &GameConfig,
) -> Result<Option<TurnSnapshot>> {
    if sc.at_eof()? {
        return Ok(None);
    }
    let turn = sc.read("turn index")?;
    let player = read_player(sc, config)?;
    let enemy = read_player(sc, config)?;
    Ok(Some(TurnSnapshot {
        turn,
        player,
        enemy,
    }))
}

/// Write one line and flush so the judge sees it before our next read
pub fn write_line<W: Write>(out: &mut W, line: impl Display) -> Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}

/// Write a move as `"<column> <rotation>"`
pub fn write_move<W: Write>(out: &mut W, mv: Move) -> Result<()> {
    write_line(out, mv)
}
