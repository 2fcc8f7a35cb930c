//! Debug frontend: a line-oriented loop over any reader and writer.
//!
//! Every turn advances the field once, prints the score and the board as a
//! grid of `00`/`11` pairs, then reads one command word.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::{Field, RandomSource};
use crate::event_log::EventLog;
use crate::input::parse_command;
use crate::session::{self, Frontend, RoundEnd};
use crate::types::GameAction;

pub const CONTROLS: &str = "\
Debug Mode

About
  A basic line-oriented mode for debugging the game.
  Type a command and press Enter; the field advances once per command.

Controls
  * w, rotate:  Rotate
  * a, left:    Move left
  * d, right:   Move right
  * s, down:    Move down
  * [Space]:    Drop piece to floor
  * e, exit:    Exit game
";

const SEPARATOR: &str = "----------------";

/// Dump the visible board, two characters per cell.
pub fn board_dump<R: RandomSource>(field: &Field<R>) -> String {
    let mut out = String::new();
    field.render_board(|_, _, is_row_end, cell| {
        out.push_str(if cell.is_some() { "11" } else { "00" });
        if is_row_end {
            out.push('\n');
        }
    });
    out
}

pub struct DebugGame<I, O> {
    input: I,
    output: O,
    line: String,
}

impl<I: BufRead, O: Write> DebugGame<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Read one line. `None` on end of input.
    fn read_line(&mut self) -> Result<Option<&str>> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(&self.line))
    }

    fn draw(&mut self, field: &Field) -> Result<()> {
        writeln!(self.output, "Score:  {:>8}", field.display_score())?;
        writeln!(self.output, "{}", SEPARATOR)?;
        write!(self.output, "{}", board_dump(field))?;
        Ok(())
    }
}

impl<I: BufRead, O: Write> Frontend for DebugGame<I, O> {
    fn mode(&self) -> &'static str {
        "debug"
    }

    fn play_round<W: Write>(&mut self, field: &mut Field, log: &mut EventLog<W>) -> Result<RoundEnd> {
        loop {
            let game_over = session::tick(field, log);
            self.draw(field)?;
            if game_over {
                return Ok(RoundEnd::GameOver);
            }

            write!(self.output, "Next move (w/a/s/d/ /e): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(RoundEnd::Exit);
            };
            match parse_command(line) {
                Some(GameAction::Exit) => return Ok(RoundEnd::Exit),
                Some(action) => {
                    field.apply_action(action);
                }
                None => {}
            }
        }
    }

    fn play_again(&mut self, field: &Field) -> Result<bool> {
        write!(
            self.output,
            "Game over! Final score: {}. Play again? (y/n): ",
            field.display_score()
        )?;
        self.output.flush()?;

        let answer = self.read_line()?.map(|l| l.trim().to_ascii_lowercase());
        Ok(matches!(answer.as_deref(), Some("y") | Some("yes")))
    }
}
