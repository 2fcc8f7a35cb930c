//! Collision evaluator
//!
//! Fall depth counts rows of the piece's 4-row box, not of its occupied
//! cells. At depth `d` the lowest occupied row (box row `3 - bottom_gap`) sits
//! on grid row `d - bottom_gap`, clamped to 0 while `d` is smaller than the
//! gap. Each occupied row above it sits one grid row higher. Rows that would
//! land above grid row 0 are not on the board yet and are skipped.

use crate::grid::{collision_row, Grid, Row};
use crate::piece::Piece;
use crate::types::SHAPE_ROWS;

/// Grid row of the piece's true bottom at `depth`
pub fn bottom_row(piece: &Piece, depth: usize) -> usize {
    depth.saturating_sub(piece.bottom_gap())
}

/// Grid rows covered by `piece` at `depth`, as (grid row, shape bits).
///
/// Yields from the piece's true bottom upward and stops at grid row 0.
pub fn placed_rows(piece: &Piece, depth: usize) -> impl Iterator<Item = (usize, Row)> {
    let rows = *piece.rows();
    let gap = piece.bottom_gap();
    let bottom = bottom_row(piece, depth);
    (0..SHAPE_ROWS - gap)
        .map_while(move |k| bottom.checked_sub(k).map(|y| (y, rows[SHAPE_ROWS - 1 - gap - k])))
}

/// Check whether `piece` at `depth` overlaps anything settled in `grid`.
///
/// Pure; the phantom floor row makes any depth past the last visible row
/// collide.
pub fn collides(grid: &Grid, piece: &Piece, depth: usize) -> bool {
    placed_rows(piece, depth)
        .any(|(y, bits)| grid.row(y).map_or(true, |row| collision_row(row) & bits != 0))
}

/// Check whether part of `piece` at `depth` is still above grid row 0.
pub fn overhangs(piece: &Piece, depth: usize) -> bool {
    piece.height() > bottom_row(piece, depth) + 1
}

/// OR `piece` into `grid` at `depth`. Rows above the board are dropped.
pub fn merge(grid: &mut Grid, piece: &Piece, depth: usize) {
    for (y, bits) in placed_rows(piece, depth) {
        grid.merge_row(y, bits);
    }
}
