//! Text frontend: real-time crossterm loop.
//!
//! Each frame renders the field, polls the keyboard for at most
//! `INPUT_POLL_MS`, and runs a gravity tick once the level's drop interval
//! has elapsed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::core::{drop_interval_ms, Field};
use crate::event_log::EventLog;
use crate::input::{handle_key_event, should_quit};
use crate::session::{self, Frontend, RoundEnd};
use crate::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use crate::types::{GameAction, INPUT_POLL_MS};

pub const CONTROLS: &str = "\
Text Mode

About
  Real-time terminal mode. Gravity speeds up every 10 points.

Controls
  * W, Up, K:       Rotate
  * A, Left, H:     Move left
  * D, Right, L:    Move right
  * S, Down, J:     Move down
  * [Space]:        Drop piece to floor
  * E, Esc:         Exit game
  * Q, Ctrl-C:      Quit
";

pub struct TextGame {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TextGame {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    fn draw(&mut self, field: &Field, overlay: Option<Overlay>) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into_with_overlay(field, overlay, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Default for TextGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for TextGame {
    fn mode(&self) -> &'static str {
        "text"
    }

    fn start(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    fn stop(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn play_round<W: std::io::Write>(&mut self, field: &mut Field, log: &mut EventLog<W>) -> Result<RoundEnd> {
        let poll = Duration::from_millis(INPUT_POLL_MS as u64);
        let mut last_tick = Instant::now();

        loop {
            self.draw(field, None)?;

            let interval = Duration::from_millis(drop_interval_ms(field.level()) as u64);
            let timeout = interval.saturating_sub(last_tick.elapsed()).min(poll);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(RoundEnd::Exit);
                        }
                        match handle_key_event(key) {
                            Some(GameAction::Exit) => return Ok(RoundEnd::Exit),
                            Some(action) => {
                                field.apply_action(action);
                            }
                            None => {}
                        }
                    }
                    Event::Resize(..) => self.renderer.invalidate(),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= interval {
                last_tick = Instant::now();
                if session::tick(field, log) {
                    self.draw(field, Some(Overlay::GameOver))?;
                    return Ok(RoundEnd::GameOver);
                }
            }
        }
    }

    fn play_again(&mut self, field: &Field) -> Result<bool> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(false);
                    }
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return Ok(true),
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('e') | KeyCode::Esc => {
                            return Ok(false)
                        }
                        _ => {}
                    }
                }
                Event::Resize(..) => {
                    self.renderer.invalidate();
                    self.draw(field, Some(Overlay::GameOver))?;
                }
                _ => {}
            }
        }
    }
}
