//! Shared types module - constants and plain data enums
//!
//! Everything here is pure data with no dependencies, so the core, the input
//! mapping and the terminal renderer can all agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 visible rows (indexed 0-19, top to bottom)
//! - **Cell width**: 3 bits per cell in a packed row, holding a color code
//!
//! # Drop Intervals by Level
//!
//! The core has no notion of time. The driving loop scales its gravity tick
//! with the level using this table (milliseconds per row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 800ms |
//! | 1 | 700ms |
//! | 2 | 600ms |
//! | 3 | 500ms |
//! | 4 | 400ms |
//! | 5 | 320ms |
//! | 6 | 250ms |
//! | 7 | 200ms |
//! | 8 | 160ms |
//! | 9+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use bitris_types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Color::from_code(7), Some(Color::Red));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Bits per cell in a packed row
pub const CELL_BITS: u32 = 3;

/// Rows in a piece's bounding box
pub const SHAPE_ROWS: usize = 4;

/// Score needed per level
pub const LEVEL_THRESHOLD: u32 = 10;

/// Gravity intervals by level (milliseconds per row)
///
/// Index 0 = Level 0, Index 8 = Level 8
pub const DROP_INTERVALS_MS: [u32; 9] = [800, 700, 600, 500, 400, 320, 250, 200, 160];

/// Gravity interval for every level past the table
pub const DROP_INTERVAL_FLOOR_MS: u32 = 100;

/// Input poll timeout for the terminal loop (16ms ≈ 60 FPS)
pub const INPUT_POLL_MS: u32 = 16;

/// The seven cell colors.
///
/// The discriminant is the 3-bit code stored in a packed row. Code 0 is the
/// empty cell and has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    Blue = 1,
    Cyan = 2,
    Grey = 3,
    Yellow = 4,
    Green = 5,
    Violet = 6,
    Red = 7,
}

impl Color {
    /// Decode a 3-bit cell code.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitris_types::Color;
    ///
    /// assert_eq!(Color::from_code(0), None);
    /// assert_eq!(Color::from_code(1), Some(Color::Blue));
    /// assert_eq!(Color::from_code(8), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Color::Blue),
            2 => Some(Color::Cyan),
            3 => Some(Color::Grey),
            4 => Some(Color::Yellow),
            5 => Some(Color::Green),
            6 => Some(Color::Violet),
            7 => Some(Color::Red),
            _ => None,
        }
    }

    /// The 3-bit code stored in a packed row
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Grey => "grey",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Violet => "violet",
            Color::Red => "red",
        }
    }
}

/// The seven tetromino piece kinds
///
/// Colors follow the Windows 98 scheme:
/// - **I**: Red, vertical bar
/// - **O**: Cyan, 2x2 square
/// - **T**: Grey, T-shaped
/// - **S**: Blue, S-shaped
/// - **Z**: Green, Z-shaped (mirror of S)
/// - **J**: Violet, J-shaped
/// - **L**: Yellow, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in shape-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bitris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Horizontal direction for shifts and edge tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Actions a player can request
///
/// The input layer produces these; the driving loop forwards every variant
/// except `Exit` to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece one row
    SoftDrop,
    /// Drop piece until it rests
    HardDrop,
    /// Leave the game
    Exit,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bitris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "exit" => Some(GameAction::Exit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Exit => "exit",
        }
    }
}

/// A rendered cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Occupied cell
pub type Cell = Option<Color>;
