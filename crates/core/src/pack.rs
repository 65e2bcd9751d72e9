//! Pack module - the square piece dropped each turn
//!
//! A pack is a `size x size` grid of blocks stored row-major in an inline
//! array (no heap allocation). Coordinates: `(row, col)` where row 0 is the
//! top of the pack.
//!
//! Rotation never mutates a pack; every transform returns a new one so the
//! announced pack in the queue stays untouched for the whole game.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Block, Rotation, EMPTY_BLOCK, MAX_PACK_SIZE};

/// Inline cell capacity of the largest supported pack
pub const MAX_PACK_CELLS: usize = MAX_PACK_SIZE * MAX_PACK_SIZE;

/// A square piece of blocks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pack {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: ArrayVec<Block, MAX_PACK_CELLS>,
}

impl Pack {
    /// Build a pack from row-major cells.
    ///
    /// Returns None unless `size` is in `1..=MAX_PACK_SIZE` and exactly
    /// `size * size` cells are given.
    pub fn new(size: usize, cells: &[Block]) -> Option<Self> {
        if size == 0 || size > MAX_PACK_SIZE || cells.len() != size * size {
            return None;
        }
        let mut flat = ArrayVec::new();
        flat.try_extend_from_slice(cells).ok()?;
        Some(Self { size, cells: flat })
    }

    /// Build a pack from nested rows (handy in tests and benches)
    pub fn from_rows<R: AsRef<[Block]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.as_ref().len() != size) {
            return None;
        }
        let flat: Vec<Block> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(size, &flat)
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at (row, col), None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Block> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Block] {
        &self.cells
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Nested copy of the rows
    pub fn to_rows(&self) -> Vec<Vec<Block>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// One 90° clockwise turn: input `(i, j)` lands at output `(j, size - 1 - i)`.
    fn rotate_once(&self) -> Self {
        let n = self.size;
        let mut cells: ArrayVec<Block, MAX_PACK_CELLS> = ArrayVec::new();
        for _ in 0..n * n {
            cells.push(EMPTY_BLOCK);
        }
        for i in 0..n {
            for j in 0..n {
                cells[j * n + (n - 1 - i)] = self.cells[self.index(i, j)];
            }
        }
        Self { size: n, cells }
    }

    /// Rotate 90° clockwise `times` times (taken modulo 4)
    pub fn rotate(&self, times: u32) -> Self {
        let mut rotated = self.clone();
        for _ in 0..times % 4 {
            rotated = rotated.rotate_once();
        }
        rotated
    }

    /// Rotate to the given orientation
    pub fn rotated(&self, rotation: Rotation) -> Self {
        self.rotate(rotation.count() as u32)
    }

    /// Pack as it looks once landed: blocks sink to the bottom of each pack column.
    pub fn settled(&self) -> Self {
        let n = self.size;
        let mut settled = self.clone();
        for col in 0..n {
            let mut write = n;
            for row in (0..n).rev() {
                let block = self.cells[self.index(row, col)];
                if block != EMPTY_BLOCK {
                    write -= 1;
                    settled.cells[write * n + col] = block;
                }
            }
            for row in 0..write {
                settled.cells[row * n + col] = EMPTY_BLOCK;
            }
        }
        settled
    }

    /// Rotations that land differently, in turn-count order.
    ///
    /// Two rotations are equivalent when their settled forms match, e.g.
    /// `[[5, 8], [0, 5]]` and `[[0, 8], [5, 5]]`.
    pub fn distinct_rotations(&self) -> ArrayVec<(Rotation, Pack), 4> {
        let mut out: ArrayVec<(Rotation, Pack), 4> = ArrayVec::new();
        let mut seen: ArrayVec<Pack, 4> = ArrayVec::new();
        for rotation in Rotation::ALL {
            let rotated = self.rotated(rotation);
            let settled = rotated.settled();
            if seen.contains(&settled) {
                continue;
            }
            seen.push(settled);
            out.push((rotation, rotated));
        }
        out
    }

    /// Non-empty cells in pack column `col`
    pub fn column_block_count(&self, col: usize) -> usize {
        if col >= self.size {
            return 0;
        }
        (0..self.size)
            .filter(|&row| self.cells[self.index(row, col)] != EMPTY_BLOCK)
            .count()
    }
}

/// Write a grid as right-aligned 2-wide cells, one row per line.
pub(crate) fn write_grid<'a>(
    f: &mut fmt::Formatter<'_>,
    rows: impl Iterator<Item = &'a [Block]>,
) -> fmt::Result {
    for (y, row) in rows.enumerate() {
        if y > 0 {
            writeln!(f)?;
        }
        for (x, block) in row.iter().enumerate() {
            if x > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>2}", block)?;
        }
    }
    Ok(())
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.rows())
    }
}
