//! Piece module - one falling shape and its in-place transforms
//!
//! A piece is four packed rows in grid layout plus a single color. Shifting
//! moves the bits one cell sideways; rotation rebuilds the rows from the
//! occupied cells. Vertical position is not stored here: the field tracks it
//! as a fall depth.

use arrayvec::ArrayVec;

use crate::grid::{cell_code, cell_shift, Row, LEFT_EDGE, RIGHT_EDGE};
use crate::rng::RandomSource;
use crate::shapes::{shape_def, Shape, SHAPES};
use crate::types::{Cell, Color, Direction, PieceKind, BOARD_WIDTH, CELL_BITS, SHAPE_ROWS};

/// Occupied cell as (box row, board column)
pub type CellPos = (usize, u8);

/// Occupied cells of a piece (at most a full 4x4 box)
pub type PieceCells = ArrayVec<CellPos, { SHAPE_ROWS * SHAPE_ROWS }>;

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    rows: Shape,
}

impl Piece {
    /// Create a piece in its spawn shape
    pub fn new(kind: PieceKind) -> Self {
        let def = shape_def(kind);
        Self {
            kind,
            color: def.color,
            rows: def.rows,
        }
    }

    /// Pick one of the seven shapes uniformly
    pub fn pick<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let def = &SHAPES[rng.next_index(SHAPES.len()) % SHAPES.len()];
        Self {
            kind: def.kind,
            color: def.color,
            rows: def.rows,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Packed rows, top to bottom
    pub fn rows(&self) -> &Shape {
        &self.rows
    }

    /// Cell at (box row, board column)
    pub fn cell(&self, row: usize, col: u8) -> Cell {
        if row >= SHAPE_ROWS || col >= BOARD_WIDTH {
            return None;
        }
        Color::from_code(cell_code(self.rows[row], col))
    }

    /// Check if any row already sits against the board edge on `dir`'s side
    pub fn touches_edge(&self, dir: Direction) -> bool {
        let edge = match dir {
            Direction::Left => LEFT_EDGE,
            Direction::Right => RIGHT_EDGE,
        };
        self.rows.iter().any(|&row| row & edge != 0)
    }

    /// Shift every row one cell towards `dir`.
    ///
    /// Leaves the piece untouched and returns false when it already touches
    /// that edge.
    pub fn shift(&mut self, dir: Direction) -> bool {
        if self.touches_edge(dir) {
            return false;
        }
        for row in &mut self.rows {
            *row = match dir {
                Direction::Left => *row << CELL_BITS,
                Direction::Right => *row >> CELL_BITS,
            };
        }
        true
    }

    /// Rotate 90° clockwise.
    ///
    /// Every occupied cell (r, c) lands on row `c - min_col` and column
    /// `anchor + (max_row - r)`. The anchor is the current leftmost occupied
    /// column, pulled left just enough that the rotated shape stays on the
    /// board. The square is rotation-invariant and is left alone.
    pub fn rotate(&mut self) {
        if self.kind == PieceKind::O {
            return;
        }

        let cells = self.cells();
        let Some(min_col) = cells.iter().map(|&(_, c)| c).min() else {
            return;
        };
        let min_row = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let max_row = cells.iter().map(|&(r, _)| r).max().unwrap_or(0);

        let new_width = (max_row - min_row + 1) as u8;
        let anchor = min_col.min(BOARD_WIDTH - new_width);
        let code = Row::from(self.color.code());

        let mut rows: Shape = [0; SHAPE_ROWS];
        for &(row, col) in &cells {
            let new_row = (col - min_col) as usize;
            let new_col = anchor + (max_row - row) as u8;
            rows[new_row] |= code << cell_shift(new_col);
        }
        self.rows = rows;
    }

    /// Number of trailing empty rows at the bottom of the box
    pub fn bottom_gap(&self) -> usize {
        self.rows.iter().rev().take_while(|&&row| row == 0).count()
    }

    /// Number of leading empty rows at the top of the box
    pub fn top_gap(&self) -> usize {
        self.rows.iter().take_while(|&&row| row == 0).count()
    }

    /// Rows spanned by occupied cells
    pub fn height(&self) -> usize {
        SHAPE_ROWS.saturating_sub(self.top_gap() + self.bottom_gap())
    }

    /// Occupied cells in row-major order
    pub fn cells(&self) -> PieceCells {
        let mut cells = PieceCells::new();
        for (r, &row) in self.rows.iter().enumerate() {
            if row == 0 {
                continue;
            }
            for c in 0..BOARD_WIDTH {
                if cell_code(row, c) != 0 {
                    // Shapes come from the table or from rotate, four cells each.
                    cells.push((r, c));
                }
            }
        }
        cells
    }
}
