//! Grid module - the bit-packed playfield
//!
//! Each row is a `u32`: ten 3-bit cells holding a color code, with one padding
//! bit on each side. Column 0 is the leftmost cell (highest cell bits).
//!
//! ```text
//! bit  31 | 30..28 | 27..25 | ... | 3..1 | 0
//!     pad | col 0  | col 1  | ... | col 9| pad
//! ```
//!
//! The grid holds `BOARD_HEIGHT + 1` rows. The last one is the phantom row:
//! every bit set, never rendered, so that it acts as a floor for collisions
//! without any bounds checks.

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH, CELL_BITS};

/// One packed board row
pub type Row = u32;

/// Number of rows stored, including the phantom row
pub const GRID_ROWS: usize = BOARD_HEIGHT as usize + 1;

/// Index of the phantom row
pub const PHANTOM_ROW_INDEX: usize = BOARD_HEIGHT as usize;

/// Every cell set to `0b111`, padding clear
pub const FULL_ROW: Row = 0x7FFF_FFFE;

/// The always-set floor row
pub const PHANTOM_ROW: Row = Row::MAX;

/// Cell bits of column 0
pub const LEFT_EDGE: Row = 0x7000_0000;

/// Cell bits of column 9
pub const RIGHT_EDGE: Row = 0x0000_000E;

/// Lowest bit of every cell
pub const CELL_LOW_BITS: Row = 0x1249_2492;

const CELL_MASK: Row = 0b111;

/// Bit offset of a column's cell within a row.
#[inline(always)]
pub const fn cell_shift(col: u8) -> u32 {
    1 + CELL_BITS * (BOARD_WIDTH - 1 - col) as u32
}

/// Read the 3-bit code of column `col`.
#[inline(always)]
pub fn cell_code(row: Row, col: u8) -> u8 {
    ((row >> cell_shift(col)) & CELL_MASK) as u8
}

/// Return `row` with column `col` set to `color` (or cleared).
pub fn with_cell(row: Row, col: u8, cell: Cell) -> Row {
    let shift = cell_shift(col);
    let code = cell.map_or(0, |c| Row::from(c.code()));
    (row & !(CELL_MASK << shift)) | (code << shift)
}

/// Normalize every occupied cell to `0b111`.
///
/// Two different color codes can share no bits (e.g. `0b100` and `0b011`), so a
/// plain AND between a grid row and a shape row could miss an overlap. ANDing
/// against the collision row instead catches any occupied cell.
#[inline(always)]
pub fn collision_row(row: Row) -> Row {
    let any = (row | (row >> 1) | (row >> 2)) & CELL_LOW_BITS;
    any * CELL_MASK
}

/// A row is complete when every cell holds a color.
#[inline(always)]
pub fn is_complete(row: Row) -> bool {
    collision_row(row) == FULL_ROW
}

/// The settled playfield plus the phantom floor row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [Row; GRID_ROWS],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        let mut rows = [0; GRID_ROWS];
        rows[PHANTOM_ROW_INDEX] = PHANTOM_ROW;
        Self { rows }
    }

    /// Build a grid from arbitrary visible rows.
    ///
    /// Padding bits are dropped and the phantom row is added.
    pub fn from_visible_rows(visible: [Row; BOARD_HEIGHT as usize]) -> Self {
        let mut grid = Self::new();
        for (dst, src) in grid.rows.iter_mut().zip(visible) {
            *dst = src & FULL_ROW;
        }
        grid
    }

    /// All rows, phantom row last
    pub fn rows(&self) -> &[Row; GRID_ROWS] {
        &self.rows
    }

    /// The rendered rows (phantom row excluded)
    pub fn visible_rows(&self) -> &[Row] {
        &self.rows[..PHANTOM_ROW_INDEX]
    }

    /// Get row `y`, or `None` past the phantom row
    #[inline(always)]
    pub fn row(&self, y: usize) -> Option<Row> {
        self.rows.get(y).copied()
    }

    /// Get cell at (row `y`, column `x`)
    /// Returns None for empty or out-of-bounds cells
    pub fn cell(&self, y: usize, x: u8) -> Cell {
        if y >= PHANTOM_ROW_INDEX || x >= BOARD_WIDTH {
            return None;
        }
        Color::from_code(cell_code(self.rows[y], x))
    }

    /// OR a shape row into visible row `y`.
    pub(crate) fn merge_row(&mut self, y: usize, bits: Row) {
        if y < PHANTOM_ROW_INDEX {
            self.rows[y] |= bits;
        }
    }

    /// Remove row `y`, shifting every row above it down by one.
    ///
    /// The top row comes back empty. The phantom row is never touched.
    pub fn clear_row(&mut self, y: usize) {
        if y >= PHANTOM_ROW_INDEX {
            return;
        }
        self.rows.copy_within(0..y, 1);
        self.rows[0] = 0;
    }

    /// Check if row `y` is a complete visible row
    pub fn is_row_complete(&self, y: usize) -> bool {
        y < PHANTOM_ROW_INDEX && is_complete(self.rows[y])
    }

    /// Dump the visible grid as text.
    ///
    /// Each cell is two characters wide (`00` empty, `11` occupied) so the
    /// board reads close to square in a terminal.
    pub fn dump(&self) -> String {
        let width = BOARD_WIDTH as usize * 2 + 1;
        let mut out = String::with_capacity(width * PHANTOM_ROW_INDEX);
        for y in 0..PHANTOM_ROW_INDEX {
            for x in 0..BOARD_WIDTH {
                out.push_str(if self.cell(y, x).is_some() { "11" } else { "00" });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
