//! Bit-packed falling-block puzzle (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_bitris::{core,input,term,types}` and adds the
//! pieces the binary is built from: the shared session loop, the JSON event
//! log, and the two frontends (`text` and `debug`).

pub use bitris_core as core;
pub use bitris_input as input;
pub use bitris_term as term;
pub use bitris_types as types;

pub mod debug_game;
pub mod event_log;
pub mod session;
pub mod text_game;
