//! Field module - the playfield state machine
//!
//! The field owns the settled grid, the active and upcoming pieces, and the
//! score. Everything is driven by [`Field::advance`], called once per gravity
//! tick by an outer loop; user actions go through the boolean mutators in
//! between ticks. Nothing here knows about time, threads or I/O.
//!
//! # Tick states
//!
//! - **Settling**: no active piece ([`ActiveSlot::Empty`] or
//!   [`ActiveSlot::Frozen`]). The next tick promotes the upcoming piece at
//!   depth 0 and returns the grid unchanged.
//! - **Falling**: [`ActiveSlot::Spawned`]. Each tick moves the piece down one
//!   row if the row below is free.
//! - **Freezing**: the row below is blocked. The piece is folded into the grid,
//!   complete rows are cleared (cascading), and the slot becomes `Frozen`.

use crate::collision::{collides, merge, overhangs};
use crate::grid::{Grid, PHANTOM_ROW_INDEX};
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{level_for_score, line_clear_score};
use crate::types::{Cell, Direction, GameAction, PieceKind, BOARD_WIDTH, SHAPE_ROWS};

/// State of the active piece slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSlot {
    /// Nothing spawned yet
    Empty,
    /// A piece is falling; `depth` counts box rows, see [`crate::collision`]
    Spawned { piece: Piece, depth: usize },
    /// The last piece was just folded into the grid
    Frozen,
}

/// Event recorded when a piece freezes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezeEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub score_gained: u32,
    pub game_over: bool,
}

/// The playfield
#[derive(Debug, Clone)]
pub struct Field<R = SimpleRng> {
    grid: Grid,
    score: u32,
    active: ActiveSlot,
    upcoming: Option<Piece>,
    rng: R,
    /// Last freeze (consumed by observers)
    last_event: Option<FreezeEvent>,
}

impl Field<SimpleRng> {
    /// Create an empty field with the default LCG seeded by `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl Default for Field<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> Field<R> {
    /// Create an empty field picking pieces from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self::from_grid(Grid::new(), rng)
    }

    /// Create a field over a prepared grid
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            score: 0,
            active: ActiveSlot::Empty,
            upcoming: None,
            rng,
            last_event: None,
        }
    }

    /// Run one gravity tick.
    ///
    /// Returns the grid to draw and whether the game is over. Game over is
    /// reported only when a piece freezes while part of it is still above the
    /// board.
    pub fn advance(&mut self) -> (Grid, bool) {
        if self.upcoming.is_none() {
            self.upcoming = Some(Piece::pick(&mut self.rng));
        }

        match self.active {
            ActiveSlot::Empty | ActiveSlot::Frozen => {
                self.spawn();
                (self.grid, false)
            }
            ActiveSlot::Spawned { piece, depth } => {
                if collides(&self.grid, &piece, depth + 1) {
                    let game_over = self.freeze(piece, depth);
                    (self.grid, game_over)
                } else {
                    self.active = ActiveSlot::Spawned {
                        piece,
                        depth: depth + 1,
                    };
                    (self.current(), false)
                }
            }
        }
    }

    /// The grid as it should be drawn right now, without advancing
    pub fn current(&self) -> Grid {
        match self.active {
            ActiveSlot::Spawned { piece, depth } => {
                let mut working = self.grid;
                merge(&mut working, &piece, depth);
                working
            }
            ActiveSlot::Empty | ActiveSlot::Frozen => self.grid,
        }
    }

    /// Promote the upcoming piece and queue a new one
    fn spawn(&mut self) {
        let piece = match self.upcoming.take() {
            Some(piece) => piece,
            None => Piece::pick(&mut self.rng),
        };
        self.upcoming = Some(Piece::pick(&mut self.rng));
        self.active = ActiveSlot::Spawned { piece, depth: 0 };
    }

    /// Fold `piece` into the grid, clear rows and score. Returns game over.
    fn freeze(&mut self, piece: Piece, depth: usize) -> bool {
        merge(&mut self.grid, &piece, depth);
        let game_over = overhangs(&piece, depth);
        self.active = ActiveSlot::Frozen;

        let rows_cleared = self.clear_complete_rows();
        let score_gained = line_clear_score(rows_cleared);
        self.score = self.score.saturating_add(score_gained);

        self.last_event = Some(FreezeEvent {
            kind: piece.kind(),
            rows_cleared,
            score_gained,
            game_over,
        });

        game_over
    }

    /// Clear every complete row, bottom to top.
    ///
    /// After a clear the same index holds the row that was above it, so it is
    /// checked again before moving up.
    fn clear_complete_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = PHANTOM_ROW_INDEX;
        while y > 0 {
            if self.grid.is_row_complete(y - 1) {
                self.grid.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Commit `tentative` at `depth` if it fits
    fn try_commit(&mut self, tentative: Piece, depth: usize) -> bool {
        if collides(&self.grid, &tentative, depth) {
            return false;
        }
        self.active = ActiveSlot::Spawned {
            piece: tentative,
            depth,
        };
        true
    }

    /// Shift the active piece one cell towards `dir`
    pub fn move_horizontal(&mut self, dir: Direction) -> bool {
        let ActiveSlot::Spawned { piece, depth } = self.active else {
            return false;
        };
        let mut tentative = piece;
        if !tentative.shift(dir) {
            return false;
        }
        self.try_commit(tentative, depth)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(Direction::Right)
    }

    /// Rotate the active piece 90° clockwise.
    ///
    /// A piece against a wall is first nudged one cell away from it. The
    /// square never rotates and returns false.
    pub fn rotate(&mut self) -> bool {
        let ActiveSlot::Spawned { piece, depth } = self.active else {
            return false;
        };
        if piece.kind() == PieceKind::O {
            return false;
        }

        let mut tentative = piece;
        for dir in [Direction::Left, Direction::Right] {
            if tentative.touches_edge(dir) {
                tentative.shift(dir.opposite());
                break;
            }
        }
        tentative.rotate();
        self.try_commit(tentative, depth)
    }

    /// Move the active piece down one row if it fits
    pub fn soft_drop(&mut self) -> bool {
        let ActiveSlot::Spawned { piece, depth } = self.active else {
            return false;
        };
        if collides(&self.grid, &piece, depth + 1) {
            return false;
        }
        self.active = ActiveSlot::Spawned {
            piece,
            depth: depth + 1,
        };
        true
    }

    /// Drop the active piece until it rests. It freezes on the next tick.
    pub fn hard_drop(&mut self) {
        while self.soft_drop() {}
    }

    /// Apply a player action
    ///
    /// `Exit` belongs to the driving loop and is a no-op here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                let spawned = self.is_spawned();
                self.hard_drop();
                spawned
            }
            GameAction::Exit => false,
        }
    }

    /// Visit every visible cell in row-major order.
    ///
    /// The callback gets `(row, column, is_row_end, cell)`.
    pub fn render_board(&self, mut f: impl FnMut(usize, usize, bool, Cell)) {
        let grid = self.current();
        for y in 0..PHANTOM_ROW_INDEX {
            for x in 0..BOARD_WIDTH {
                f(y, x as usize, x == BOARD_WIDTH - 1, grid.cell(y, x));
            }
        }
    }

    /// Visit the upcoming piece's 4x4 box in row-major order.
    ///
    /// The box is the centered window of the board width that spawn shapes
    /// occupy; columns passed to the callback are relative to it.
    pub fn render_preview(&self, mut f: impl FnMut(usize, usize, bool, Cell)) {
        let left = (BOARD_WIDTH as usize - SHAPE_ROWS) / 2;
        for y in 0..SHAPE_ROWS {
            for i in 0..SHAPE_ROWS {
                let col = (left + i) as u8;
                let cell = self.upcoming.and_then(|p| p.cell(y, col));
                f(y, i, i == SHAPE_ROWS - 1, cell);
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn slot(&self) -> &ActiveSlot {
        &self.active
    }

    pub fn is_spawned(&self) -> bool {
        matches!(self.active, ActiveSlot::Spawned { .. })
    }

    pub fn active(&self) -> Option<&Piece> {
        match &self.active {
            ActiveSlot::Spawned { piece, .. } => Some(piece),
            _ => None,
        }
    }

    /// Fall depth of the active piece
    pub fn depth(&self) -> Option<usize> {
        match self.active {
            ActiveSlot::Spawned { depth, .. } => Some(depth),
            _ => None,
        }
    }

    pub fn upcoming(&self) -> Option<&Piece> {
        self.upcoming.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    pub fn display_score(&self) -> String {
        self.score.to_string()
    }

    /// Take and clear the last freeze event.
    pub fn take_last_event(&mut self) -> Option<FreezeEvent> {
        self.last_event.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{with_cell, Row, FULL_ROW, PHANTOM_ROW};
    use crate::shapes::SHAPES;
    use crate::types::{Color, BOARD_HEIGHT};

    /// Hands out a fixed sequence of kinds, repeating the last one.
    #[derive(Debug, Clone)]
    struct Scripted {
        picks: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(kinds: &[PieceKind]) -> Self {
            let picks = kinds
                .iter()
                .map(|k| SHAPES.iter().position(|d| d.kind == *k).unwrap())
                .collect();
            Self { picks, next: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn next_index(&mut self, _bound: usize) -> usize {
            let i = self.next.min(self.picks.len() - 1);
            self.next += 1;
            self.picks[i]
        }
    }

    fn field_of(kinds: &[PieceKind]) -> Field<Scripted> {
        Field::with_rng(Scripted::new(kinds))
    }

    /// Visible rows that are full except for `hole` columns.
    fn row_with_holes(holes: &[u8]) -> Row {
        (0..BOARD_WIDTH)
            .filter(|x| !holes.contains(x))
            .fold(0, |row, x| with_cell(row, x, Some(Color::Blue)))
    }

    #[test]
    fn test_new_field() {
        let field = Field::new(12345);
        assert_eq!(field.score(), 0);
        assert_eq!(field.level(), 0);
        assert_eq!(*field.slot(), ActiveSlot::Empty);
        assert!(field.upcoming().is_none());
        assert_eq!(field.current(), Grid::new());
    }

    #[test]
    fn test_first_advance_is_settle_tick() {
        let mut field = field_of(&[PieceKind::T, PieceKind::I]);
        let (grid, game_over) = field.advance();

        assert!(!game_over);
        assert_eq!(grid, Grid::new());
        assert_eq!(field.depth(), Some(0));
        assert_eq!(field.active().map(Piece::kind), Some(PieceKind::T));
        assert_eq!(field.upcoming().map(Piece::kind), Some(PieceKind::I));
    }

    #[test]
    fn test_advance_falls_one_row() {
        let mut field = field_of(&[PieceKind::O]);
        field.advance();
        let (grid, game_over) = field.advance();

        assert!(!game_over);
        assert_eq!(field.depth(), Some(1));
        // O's box has an empty bottom row, so at depth 1 only its lower row
        // is on the board, on row 0.
        assert_eq!(grid.cell(0, 4), Some(Color::Cyan));
        assert_eq!(grid.cell(0, 5), Some(Color::Cyan));
        assert_eq!(grid.cell(1, 4), None);

        let (grid, _) = field.advance();
        assert_eq!(field.depth(), Some(2));
        assert_eq!(grid.cell(1, 4), Some(Color::Cyan));
        assert_eq!(grid.cell(0, 5), Some(Color::Cyan));
        // Falling never touches the persisted grid.
        assert_eq!(*field.grid(), Grid::new());
    }

    #[test]
    fn test_current_does_not_mutate() {
        let mut field = field_of(&[PieceKind::L]);
        field.advance();
        field.advance();
        let before = field.clone();
        let a = field.current();
        let b = field.current();
        assert_eq!(a, b);
        assert_eq!(field.depth(), before.depth());
        assert_eq!(field.grid(), before.grid());
    }

    #[test]
    fn test_single_column_freeze() {
        let mut field = field_of(&[PieceKind::I]);
        field.advance();
        field.hard_drop();
        assert_eq!(field.depth(), Some(BOARD_HEIGHT as usize - 1));

        let (grid, game_over) = field.advance();
        assert!(!game_over);
        assert_eq!(*field.slot(), ActiveSlot::Frozen);
        for y in 0..BOARD_HEIGHT as usize {
            let expected = if y >= 16 { Some(Color::Red) } else { None };
            assert_eq!(grid.cell(y, 5), expected, "row {}", y);
        }
        assert_eq!(field.score(), 0);

        field.advance();
        assert_eq!(field.depth(), Some(0));
    }

    #[test]
    fn test_freeze_clears_completed_row() {
        let mut visible = [0; BOARD_HEIGHT as usize];
        visible[19] = row_with_holes(&[5]);
        visible[15] = with_cell(0, 0, Some(Color::Green));
        let mut field = Field::from_grid(Grid::from_visible_rows(visible), Scripted::new(&[PieceKind::I]));

        field.advance();
        field.hard_drop();
        let (grid, game_over) = field.advance();

        assert!(!game_over);
        assert_eq!(field.score(), 1);
        // The I's upper three cells slid down into rows 17..=19.
        for y in 17..20 {
            assert_eq!(grid.cell(y, 5), Some(Color::Red));
            assert_eq!(grid.cell(y, 0), None);
        }
        assert_eq!(grid.cell(16, 0), Some(Color::Green));
        assert_eq!(grid.cell(16, 5), None);
        assert_eq!(grid.row(0), Some(0));
        assert_eq!(grid.row(PHANTOM_ROW_INDEX), Some(PHANTOM_ROW));
    }

    #[test]
    fn test_cascading_clear_skips_nothing() {
        let mut visible = [0; BOARD_HEIGHT as usize];
        visible[16] = row_with_holes(&[5]);
        visible[17] = row_with_holes(&[5]);
        visible[18] = row_with_holes(&[0, 5]);
        visible[19] = row_with_holes(&[5]);
        let mut field = Field::from_grid(Grid::from_visible_rows(visible), Scripted::new(&[PieceKind::I]));

        field.advance();
        field.hard_drop();
        let (grid, _) = field.advance();

        assert_eq!(field.score(), 9);
        let event = field.take_last_event().unwrap();
        assert_eq!(event.rows_cleared, 3);
        assert_eq!(event.score_gained, 9);

        assert_eq!(grid.cell(19, 0), None);
        assert_eq!(grid.cell(19, 5), Some(Color::Red));
        assert_eq!(grid.cell(19, 9), Some(Color::Blue));
        assert!(grid.visible_rows()[..19].iter().all(|&r| r == 0));
    }

    #[test]
    fn test_two_rows_score_four() {
        let mut visible = [0; BOARD_HEIGHT as usize];
        visible[18] = row_with_holes(&[5]);
        visible[19] = row_with_holes(&[5]);
        let mut field = Field::from_grid(Grid::from_visible_rows(visible), Scripted::new(&[PieceKind::I]));

        field.advance();
        field.hard_drop();
        field.advance();
        assert_eq!(field.score(), 4);
    }

    #[test]
    fn test_game_over_when_spawn_overlaps() {
        let mut visible = [0; BOARD_HEIGHT as usize];
        visible[0] = with_cell(0, 5, Some(Color::Blue));
        let mut field = Field::from_grid(Grid::from_visible_rows(visible), Scripted::new(&[PieceKind::I]));

        let (_, game_over) = field.advance();
        assert!(!game_over, "the settle tick never ends the game");
        let (_, game_over) = field.advance();
        assert!(game_over);
        assert!(field.take_last_event().unwrap().game_over);
    }

    #[test]
    fn test_no_game_over_when_piece_fits_board() {
        let mut field = field_of(&[PieceKind::J]);
        field.advance();
        field.hard_drop();
        let (_, game_over) = field.advance();
        assert!(!game_over);
    }

    #[test]
    fn test_move_blocked_by_wall_and_cells() {
        let mut visible = [0; BOARD_HEIGHT as usize];
        visible[0] = with_cell(0, 3, Some(Color::Blue));
        let mut field = Field::from_grid(Grid::from_visible_rows(visible), Scripted::new(&[PieceKind::I]));
        field.advance();

        assert!(field.move_left());
        assert!(!field.move_left(), "cell at column 3 blocks");
        assert_eq!(field.active().unwrap().cells()[0].1, 4);

        for _ in 0..5 {
            assert!(field.move_right());
        }
        assert!(!field.move_right(), "wall blocks");
        assert_eq!(field.active().unwrap().cells()[0].1, 9);
    }

    #[test]
    fn test_rotate_at_right_wall_stays_on_board() {
        let mut field = field_of(&[PieceKind::I]);
        field.advance();
        for _ in 0..4 {
            field.move_right();
        }
        assert!(field.rotate());
        let cells = field.active().unwrap().cells();
        assert_eq!(cells.as_slice(), &[(0, 6), (0, 7), (0, 8), (0, 9)]);
        assert_eq!(field.depth(), Some(0));
    }

    #[test]
    fn test_rotate_at_left_wall_nudges_right() {
        let mut field = field_of(&[PieceKind::I]);
        field.advance();
        for _ in 0..5 {
            field.move_left();
        }
        assert!(field.rotate());
        let cells = field.active().unwrap().cells();
        assert_eq!(cells.as_slice(), &[(0, 1), (0, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn test_rotate_blocked_by_collision() {
        // The bar turned flat at depth 10 lands on row 7, columns 5..=8.
        let mut visible = [0; BOARD_HEIGHT as usize];
        visible[7] = with_cell(0, 7, Some(Color::Blue));
        let mut field = Field::from_grid(Grid::from_visible_rows(visible), Scripted::new(&[PieceKind::I]));
        field.advance();
        for _ in 0..10 {
            field.soft_drop();
        }
        let before = *field.active().unwrap();

        assert!(!field.rotate());
        assert_eq!(*field.active().unwrap(), before);
    }

    #[test]
    fn test_rotate_moves_bottom_row_by_gap_change() {
        let mut field = field_of(&[PieceKind::I]);
        field.advance();
        for _ in 0..10 {
            assert!(field.soft_drop());
        }
        let rows = |field: &Field<Scripted>| -> Vec<usize> {
            let grid = field.current();
            (0..BOARD_HEIGHT as usize).filter(|&y| grid.row(y) != Some(0)).collect()
        };
        assert_eq!(rows(&field), vec![7, 8, 9, 10]);

        // Flat bar has three empty rows under it: bottom row 10 - 3.
        assert!(field.rotate());
        assert_eq!(field.depth(), Some(10));
        assert_eq!(rows(&field), vec![7]);

        field.hard_drop();
        assert_eq!(field.depth(), Some(BOARD_HEIGHT as usize - 1 + 3));
        assert_eq!(rows(&field), vec![BOARD_HEIGHT as usize - 1]);
    }

    #[test]
    fn test_square_does_not_rotate() {
        let mut field = field_of(&[PieceKind::O]);
        field.advance();
        let before = *field.active().unwrap();
        assert!(!field.rotate());
        assert_eq!(*field.active().unwrap(), before);
    }

    #[test]
    fn test_mutators_without_active_piece() {
        let mut field = Field::new(1);
        assert!(!field.move_left());
        assert!(!field.move_right());
        assert!(!field.rotate());
        assert!(!field.soft_drop());
        field.hard_drop();
        assert!(!field.apply_action(GameAction::HardDrop));
        assert_eq!(*field.slot(), ActiveSlot::Empty);
    }

    #[test]
    fn test_soft_drop_stops_on_floor() {
        // S has one empty row under it, so it rests one depth lower than J.
        let mut field = field_of(&[PieceKind::S]);
        field.advance();
        let mut drops = 0;
        while field.soft_drop() {
            drops += 1;
        }
        assert_eq!(drops, BOARD_HEIGHT as usize);
        assert_eq!(field.depth(), Some(BOARD_HEIGHT as usize));
        let grid = field.current();
        assert_eq!(grid.cell(19, 3), Some(Color::Blue));
        assert_eq!(grid.cell(18, 5), Some(Color::Blue));

        let mut field = field_of(&[PieceKind::J]);
        field.advance();
        field.hard_drop();
        assert_eq!(field.depth(), Some(BOARD_HEIGHT as usize - 1));
    }

    #[test]
    fn test_gap_piece_freezes_on_bottom_rows() {
        let mut field = field_of(&[PieceKind::O]);
        field.advance();
        field.hard_drop();
        assert_eq!(field.depth(), Some(BOARD_HEIGHT as usize));

        let (grid, game_over) = field.advance();
        assert!(!game_over);
        for (y, x) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
            assert_eq!(grid.cell(y, x), Some(Color::Cyan), "({}, {})", y, x);
        }
        assert_eq!(grid.visible_rows().iter().filter(|&&r| r != 0).count(), 2);
    }

    #[test]
    fn test_gap_piece_overhanging_at_freeze_ends_game() {
        // Blocker on row 1 under the O: the O freezes with its bottom on row 0.
        let mut visible = [0; BOARD_HEIGHT as usize];
        visible[1] = with_cell(0, 4, Some(Color::Blue));
        let mut field = Field::from_grid(Grid::from_visible_rows(visible), Scripted::new(&[PieceKind::O]));

        field.advance();
        let (_, game_over) = field.advance();
        assert!(!game_over, "depth 1 still puts the O on row 0");
        assert_eq!(field.depth(), Some(1));
        let (grid, game_over) = field.advance();
        assert!(game_over);
        assert_eq!(grid.cell(0, 4), Some(Color::Cyan));
    }

    #[test]
    fn test_apply_action() {
        let mut field = field_of(&[PieceKind::T]);
        field.advance();
        assert!(field.apply_action(GameAction::MoveLeft));
        assert!(field.apply_action(GameAction::MoveRight));
        assert!(field.apply_action(GameAction::Rotate));
        assert!(field.apply_action(GameAction::SoftDrop));
        assert!(!field.apply_action(GameAction::Exit));
        assert!(field.apply_action(GameAction::HardDrop));
        assert!(!field.soft_drop());
    }

    #[test]
    fn test_level_follows_score() {
        let mut field = Field::new(1);
        field.score = 27;
        assert_eq!(field.level(), 2);
        assert_eq!(field.display_score(), "27");
    }

    #[test]
    fn test_render_board_visits_every_cell() {
        let mut field = field_of(&[PieceKind::I]);
        field.advance();
        field.advance();

        let mut visits = 0;
        let mut row_ends = 0;
        let mut colored = Vec::new();
        field.render_board(|row, col, is_row_end, cell| {
            visits += 1;
            if is_row_end {
                assert_eq!(col, BOARD_WIDTH as usize - 1);
                row_ends += 1;
            }
            if let Some(color) = cell {
                colored.push((row, col, color));
            }
        });

        assert_eq!(visits, 200);
        assert_eq!(row_ends, 20);
        assert_eq!(colored, vec![(0, 5, Color::Red), (1, 5, Color::Red)]);
    }

    #[test]
    fn test_render_preview_shows_upcoming() {
        let mut field = field_of(&[PieceKind::J, PieceKind::T]);
        field.advance();

        let mut cells = Vec::new();
        let mut visits = 0;
        field.render_preview(|row, col, _, cell| {
            visits += 1;
            if cell.is_some() {
                cells.push((row, col));
            }
        });
        assert_eq!(visits, 16);
        // T box columns 3..=6 map to preview columns 0..=3.
        assert_eq!(cells, vec![(1, 1), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_render_preview_empty_before_first_tick() {
        let field = Field::new(3);
        let mut any = false;
        field.render_preview(|_, _, _, cell| any |= cell.is_some());
        assert!(!any);
    }

    #[test]
    fn test_full_row_constant_is_complete() {
        let mut visible = [0; BOARD_HEIGHT as usize];
        visible[19] = FULL_ROW;
        let mut field = Field::from_grid(Grid::from_visible_rows(visible), Scripted::new(&[PieceKind::O]));
        // A freeze anywhere sweeps pre-existing complete rows as well.
        field.advance();
        field.hard_drop();
        field.advance();
        assert_eq!(field.score(), 1);
        assert_eq!(field.grid().cell(19, 4), Some(Color::Cyan));
    }
}
