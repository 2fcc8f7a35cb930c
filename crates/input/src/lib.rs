//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] for the interactive loop, and
//! parses the command words typed in the line-oriented debug mode.

pub mod map;

pub use bitris_types as types;

pub use map::{handle_key_event, parse_command, should_quit};
