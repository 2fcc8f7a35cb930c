//! Session loop shared by every frontend.
//!
//! A session plays rounds until the player exits or declines to play again.
//! Each round gets a fresh field; round `n` is seeded with `seed + n - 1` so a
//! whole session replays from its first seed.

use std::io::Write;

use anyhow::Result;

use crate::core::{Field, RandomSource};
use crate::event_log::{EventLog, GameEvent};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    GameOver,
    /// The player asked to leave mid-round
    Exit,
}

/// A way of presenting a field and collecting player actions
pub trait Frontend {
    /// Short name used in logs
    fn mode(&self) -> &'static str;

    /// Prepare the output device (e.g. raw mode)
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Restore the output device. Called even when a round failed.
    fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    /// Drive one round until game over or exit
    fn play_round<W: Write>(&mut self, field: &mut Field, log: &mut EventLog<W>) -> Result<RoundEnd>;

    /// Ask whether to start another round
    fn play_again(&mut self, field: &Field) -> Result<bool>;
}

/// Final state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub score: u32,
    pub level: u32,
}

/// Run one gravity tick and log any freeze. Returns game over.
pub fn tick<R: RandomSource, W: Write>(field: &mut Field<R>, log: &mut EventLog<W>) -> bool {
    let (_, game_over) = field.advance();
    if let Some(event) = field.take_last_event() {
        log.record(&GameEvent::freeze(&event, field.score(), field.level()));
    }
    if game_over {
        log.record(&GameEvent::GameOver {
            score: field.score(),
            level: field.level(),
        });
    }
    game_over
}

/// Play rounds until the player stops.
pub fn play<F: Frontend, W: Write>(frontend: &mut F, seed: u32, log: &mut EventLog<W>) -> Result<SessionSummary> {
    let mut summary = SessionSummary {
        rounds: 0,
        score: 0,
        level: 0,
    };

    loop {
        let round_seed = seed.wrapping_add(summary.rounds);
        summary.rounds += 1;
        log.record(&GameEvent::Start {
            mode: frontend.mode(),
            seed: round_seed,
            round: summary.rounds,
        });

        let mut field = Field::new(round_seed);
        let end = frontend.play_round(&mut field, log)?;
        summary.score = field.score();
        summary.level = field.level();

        match end {
            RoundEnd::Exit => return Ok(summary),
            RoundEnd::GameOver => {
                if !frontend.play_again(&field)? {
                    return Ok(summary);
                }
            }
        }
    }
}

/// Start the frontend, play, and always stop it again.
///
/// The first error wins; a failure to stop is only returned when the session
/// itself succeeded.
pub fn run<F: Frontend, W: Write>(frontend: &mut F, seed: u32, log: &mut EventLog<W>) -> Result<SessionSummary> {
    frontend.start()?;
    let result = play(frontend, seed, log);
    let stopped = frontend.stop();
    let summary = result?;
    stopped?;
    Ok(summary)
}
