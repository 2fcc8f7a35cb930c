//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the playfield, the seven pieces, collision, row
//! clearing and scoring. It has **zero dependencies** on the terminal, timers
//! or I/O:
//!
//! - **Deterministic**: the random source is injected, so a seed replays a game
//! - **Compact**: the grid is 21 `u32` rows and a piece is 4 more
//! - **Fast**: collision and merging are a handful of bitwise ops per row
//!
//! # Module Structure
//!
//! - [`grid`]: packed rows, the phantom floor row, row clearing
//! - [`shapes`]: spawn shapes as packed binary literals
//! - [`piece`]: shifting and clockwise rotation of a single piece
//! - [`collision`]: placement rule, overlap test and merging
//! - [`field`]: the tick state machine driving a game
//! - [`rng`]: injectable random source and the default LCG
//! - [`scoring`]: quadratic row-clear bonus, levels, gravity pacing
//!
//! # Game Rules
//!
//! - **Uniform picks**: each of the seven shapes is equally likely
//! - **One preview**: the upcoming piece is known one spawn ahead
//! - **Clockwise rotation only**, with a one-cell nudge off the wall
//! - **Scoring**: `n²` points for `n` rows cleared by one piece
//! - **Game over**: a piece freezes while part of it is above the board
//!
//! # Example
//!
//! ```
//! use bitris_core::Field;
//!
//! let mut field = Field::new(12345);
//!
//! // First tick spawns a piece without moving it.
//! let (_grid, game_over) = field.advance();
//! assert!(!game_over);
//! assert_eq!(field.depth(), Some(0));
//!
//! field.move_left();
//! field.hard_drop();
//!
//! // The next tick freezes it into the grid.
//! field.advance();
//! assert!(!field.is_spawned());
//! ```
//!
//! # Timing
//!
//! There is no clock in here. The driving loop calls
//! [`Field::advance`](field::Field::advance) once per gravity interval (see
//! [`scoring::drop_interval_ms`]) and forwards player actions in between.

pub mod collision;
pub mod field;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;

pub use bitris_types as types;

// Re-export commonly used types for convenience
pub use collision::{collides, merge, overhangs};
pub use field::{ActiveSlot, Field, FreezeEvent};
pub use grid::{Grid, Row};
pub use piece::Piece;
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_score, line_clear_score};
pub use shapes::{shape_def, ShapeDef, SHAPES};
