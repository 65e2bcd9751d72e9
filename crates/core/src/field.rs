//! Field module - one player's grid
//!
//! The field is `width` columns by `simulation_height` rows, where the top
//! `pack_size + 1` rows are a hidden buffer above the visible area.
//! Uses a flat vector, row-major.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom,
//! so "lower" cells have higher y.

use std::fmt;

use crate::pack::{write_grid, Pack};
use crate::types::{Block, GameConfig, EMPTY_BLOCK};

/// Outcome of checking a move against a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Every pack column has room in the field
    Fits,
    /// The pack would stick out past the right edge
    ColumnOutOfRange { column: usize, max: usize },
    /// Field column `column` has fewer empty cells than the pack drops into it
    ColumnOverflow { column: usize },
}

impl Placement {
    pub fn fits(&self) -> bool {
        matches!(self, Placement::Fits)
    }
}

/// A player's field, hidden buffer rows included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    cells: Vec<Block>,
}

impl Field {
    /// Create an empty simulation-height field
    pub fn empty(config: &GameConfig) -> Self {
        let height = config.simulation_height();
        Self {
            width: config.width,
            height,
            cells: vec![EMPTY_BLOCK; config.width * height],
        }
    }

    /// Build from the visible rows read off the wire.
    ///
    /// `visible` holds `height * width` cells row-major; the hidden rows are
    /// prepended as empty. Returns None on a cell count mismatch.
    pub fn from_visible(config: &GameConfig, visible: &[Block]) -> Option<Self> {
        if visible.len() != config.width * config.height {
            return None;
        }
        let mut field = Self::empty(config);
        let offset = config.hidden_rows() * config.width;
        field.cells[offset..].copy_from_slice(visible);
        Some(field)
    }

    /// Build from full simulation-height rows (tests and benches)
    pub fn from_rows<R: AsRef<[Block]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first().map(|r| r.as_ref().len())?;
        if width == 0 || rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }
        let cells = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Some(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count including the hidden buffer
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Get cell at (x, y), None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Block> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, block: Block) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = block;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Block] {
        &self.cells
    }

    /// Rows from top (hidden buffer) to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Lowest empty cell of column `x`, scanning from the bottom row up
    pub fn lowest_empty(&self, x: usize) -> Option<usize> {
        if x >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&y| self.cells[y * self.width + x] == EMPTY_BLOCK)
    }

    /// Row of the topmost block in column `x`, or `height` if the column is empty
    pub fn column_top(&self, x: usize) -> usize {
        (0..self.height)
            .find(|&y| self.get(x, y).is_some_and(|b| b != EMPTY_BLOCK))
            .unwrap_or(self.height)
    }

    /// Empty cells in column `x`
    pub fn free_cells(&self, x: usize) -> usize {
        if x >= self.width {
            return 0;
        }
        (0..self.height)
            .filter(|&y| self.cells[y * self.width + x] == EMPTY_BLOCK)
            .count()
    }

    /// Number of cells holding `block`
    pub fn count(&self, block: Block) -> usize {
        self.cells.iter().filter(|&&b| b == block).count()
    }

    /// Check whether dropping `pack` with its left edge at `column` stays in bounds
    pub fn check_placement(&self, pack: &Pack, column: usize) -> Placement {
        let max = self.width.saturating_sub(pack.size());
        if column > max {
            return Placement::ColumnOutOfRange { column, max };
        }
        for dx in 0..pack.size() {
            let x = column + dx;
            if pack.column_block_count(dx) > self.free_cells(x) {
                return Placement::ColumnOverflow { column: x };
            }
        }
        Placement::Fits
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.rows())
    }
}
