//! Terminal falling-block puzzle (default binary).
//!
//! `tui-bitris [text|debug] [--seed N] [--controls]`

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use tui_bitris::debug_game::{self, DebugGame};
use tui_bitris::event_log::EventLog;
use tui_bitris::session::{self, Frontend};
use tui_bitris::text_game::{self, TextGame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Real-time terminal mode
    Text,
    /// Line-oriented mode for debugging
    Debug,
}

/// Falling-block puzzle on a bit-packed playfield.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Render mode
    #[arg(value_enum, default_value_t = Mode::Text)]
    mode: Mode,

    /// Seed for piece selection (defaults to the clock)
    #[arg(long, env = "BITRIS_SEED")]
    seed: Option<u32>,

    /// Print the controls of the selected mode and exit
    #[arg(long)]
    controls: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.controls {
        print!(
            "{}",
            match args.mode {
                Mode::Text => text_game::CONTROLS,
                Mode::Debug => debug_game::CONTROLS,
            }
        );
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut log = EventLog::from_env();
    if let Some(warning) = log.take_warning() {
        eprintln!("[Game] {}", warning);
    }

    match args.mode {
        Mode::Text => {
            eprintln!("[Game] text mode, seed {}", seed);
            play(TextGame::new(), seed, &mut log)
        }
        Mode::Debug => {
            eprintln!("[Game] debug mode, seed {}", seed);
            let stdin = io::stdin();
            play(DebugGame::new(stdin.lock(), io::stdout()), seed, &mut log)
        }
    }
}

fn play<F: Frontend>(mut frontend: F, seed: u32, log: &mut EventLog) -> Result<()> {
    let summary = session::run(&mut frontend, seed, log)?;
    if let Some(warning) = log.take_warning() {
        eprintln!("[Game] {}", warning);
    }
    eprintln!(
        "[Game] final score {} (level {}) after {} round(s)",
        summary.score, summary.level, summary.rounds
    );
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
