//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout libraries and renders into a plain framebuffer that is
//! flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Read the board only through the field's cell callbacks
//! - Control the aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use bitris_core as core;
pub use bitris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{color_rgb, GameView, Overlay, Viewport};
pub use renderer::TerminalRenderer;
