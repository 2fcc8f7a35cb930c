//! Shape table - the seven spawn shapes in packed form
//!
//! Each shape is four packed rows in the same layout as the grid, drawn in a
//! 4x4 box over board columns 3..=6, with every occupied cell already holding
//! the piece's color code. The binary literals are grouped one cell per
//! underscore block, padding bits at both ends.

use crate::grid::Row;
use crate::types::{Color, PieceKind, SHAPE_ROWS};

/// Four packed rows, top to bottom
pub type Shape = [Row; SHAPE_ROWS];

/// One entry of the shape table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub color: Color,
    pub rows: Shape,
}

/// Spawn shapes, Windows 98 color scheme
#[rustfmt::skip]
pub const SHAPES: [ShapeDef; 7] = [
    // J _|
    ShapeDef {
        kind: PieceKind::J,
        color: Color::Violet,
        rows: [
            0b0_000_000_000_000_000_000_000_000_000_000_0,
            0b0_000_000_000_000_000_110_000_000_000_000_0,
            0b0_000_000_000_000_000_110_000_000_000_000_0,
            0b0_000_000_000_000_110_110_000_000_000_000_0,
        ],
    },
    // L |_
    ShapeDef {
        kind: PieceKind::L,
        color: Color::Yellow,
        rows: [
            0b0_000_000_000_000_000_000_000_000_000_000_0,
            0b0_000_000_000_000_100_000_000_000_000_000_0,
            0b0_000_000_000_000_100_000_000_000_000_000_0,
            0b0_000_000_000_000_100_100_000_000_000_000_0,
        ],
    },
    // O
    ShapeDef {
        kind: PieceKind::O,
        color: Color::Cyan,
        rows: [
            0b0_000_000_000_000_000_000_000_000_000_000_0,
            0b0_000_000_000_000_010_010_000_000_000_000_0,
            0b0_000_000_000_000_010_010_000_000_000_000_0,
            0b0_000_000_000_000_000_000_000_000_000_000_0,
        ],
    },
    // I
    ShapeDef {
        kind: PieceKind::I,
        color: Color::Red,
        rows: [
            0b0_000_000_000_000_000_111_000_000_000_000_0,
            0b0_000_000_000_000_000_111_000_000_000_000_0,
            0b0_000_000_000_000_000_111_000_000_000_000_0,
            0b0_000_000_000_000_000_111_000_000_000_000_0,
        ],
    },
    // T _-_
    ShapeDef {
        kind: PieceKind::T,
        color: Color::Grey,
        rows: [
            0b0_000_000_000_000_000_000_000_000_000_000_0,
            0b0_000_000_000_000_011_000_000_000_000_000_0,
            0b0_000_000_000_011_011_011_000_000_000_000_0,
            0b0_000_000_000_000_000_000_000_000_000_000_0,
        ],
    },
    // S
    ShapeDef {
        kind: PieceKind::S,
        color: Color::Blue,
        rows: [
            0b0_000_000_000_000_000_000_000_000_000_000_0,
            0b0_000_000_000_000_001_001_000_000_000_000_0,
            0b0_000_000_000_001_001_000_000_000_000_000_0,
            0b0_000_000_000_000_000_000_000_000_000_000_0,
        ],
    },
    // Z
    ShapeDef {
        kind: PieceKind::Z,
        color: Color::Green,
        rows: [
            0b0_000_000_000_000_000_000_000_000_000_000_0,
            0b0_000_000_000_101_101_000_000_000_000_000_0,
            0b0_000_000_000_000_101_101_000_000_000_000_0,
            0b0_000_000_000_000_000_000_000_000_000_000_0,
        ],
    },
];

/// Look up the table entry for a kind
pub fn shape_def(kind: PieceKind) -> &'static ShapeDef {
    let index = match kind {
        PieceKind::J => 0,
        PieceKind::L => 1,
        PieceKind::O => 2,
        PieceKind::I => 3,
        PieceKind::T => 4,
        PieceKind::S => 5,
        PieceKind::Z => 6,
    };
    &SHAPES[index]
}
