//! Structured event log (JSON lines).
//!
//! Enabled by pointing `BITRIS_LOG_PATH` at a file. Each game start, freeze
//! and game over is appended as one JSON object per line. Logging never
//! interrupts play: the first write error disables the log and leaves a
//! warning for the caller to print once the terminal is back to normal.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;

use serde::Serialize;

use crate::core::FreezeEvent;

/// Environment variable holding the log file path
pub const LOG_PATH_ENV: &str = "BITRIS_LOG_PATH";

/// One line of the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Start {
        mode: &'static str,
        seed: u32,
        round: u32,
    },
    Freeze {
        piece: &'static str,
        rows_cleared: u32,
        score_gained: u32,
        score: u32,
        level: u32,
    },
    GameOver {
        score: u32,
        level: u32,
    },
}

impl GameEvent {
    pub fn freeze(event: &FreezeEvent, score: u32, level: u32) -> Self {
        GameEvent::Freeze {
            piece: event.kind.as_str(),
            rows_cleared: event.rows_cleared,
            score_gained: event.score_gained,
            score,
            level,
        }
    }
}

/// Append-only JSON-lines sink
#[derive(Debug)]
pub struct EventLog<W = File> {
    writer: Option<W>,
    buf: Vec<u8>,
    warning: Option<String>,
}

impl EventLog<File> {
    /// Open the log named by `BITRIS_LOG_PATH`, or a disabled log if unset.
    ///
    /// A path that cannot be opened is reported through [`take_warning`](Self::take_warning).
    pub fn from_env() -> Self {
        let path = env::var(LOG_PATH_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let Some(path) = path else {
            return Self::disabled();
        };

        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Self::to_writer(file),
            Err(e) => {
                let mut log = Self::disabled();
                log.warning = Some(format!("event log disabled: {}: {}", path, e));
                log
            }
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::with_capacity(256),
            warning: None,
        }
    }

    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
            ..Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Append one event. Errors disable the log.
    pub fn record(&mut self, event: &GameEvent) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, event) {
            self.warning = Some(format!("event log: encode failed: {}", e));
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = writer.write_all(&self.buf).and_then(|_| writer.flush()) {
            self.writer = None;
            self.warning = Some(format!("event log disabled: write failed: {}", e));
        }
    }

    /// Warning left by a failed open or write, if any
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    pub fn writer(&self) -> Option<&W> {
        self.writer.as_ref()
    }
}
