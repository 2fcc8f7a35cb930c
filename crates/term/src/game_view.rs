//! GameView: maps a `core::Field` into a terminal framebuffer.
//!
//! The view only talks to the field through its cell callbacks
//! (`render_board` and `render_preview`) and score accessors. It is pure (no
//! I/O) and can be unit-tested.

use crate::core::{Field, RandomSource};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH, SHAPE_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Text drawn over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// "GAME OVER" plus the play-again prompt
    GameOver,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Palette for the seven cell colors
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Blue => Rgb::new(60, 90, 230),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Grey => Rgb::new(170, 170, 170),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Violet => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}

/// A lightweight terminal renderer for the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Board frame position inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    /// Render the field into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into<R: RandomSource>(&self, field: &Field<R>, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_overlay(field, None, viewport, fb);
    }

    pub fn render_into_with_overlay<R: RandomSource>(
        &self,
        field: &Field<R>,
        overlay: Option<Overlay>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).glyph(' '));

        let frame = self.frame(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(fb, frame, border);

        field.render_board(|row, col, _, cell| {
            let (x, y) = (col as u16, row as u16);
            match cell {
                Some(color) => self.draw_board_cell(fb, frame, x, y, color),
                None => self.draw_empty_cell(fb, frame, x, y),
            }
        });

        self.draw_side_panel(fb, field, viewport, frame);

        if let Some(Overlay::GameOver) = overlay {
            draw_overlay_text(fb, frame, &["GAME OVER", "play again? (y/n)"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: RandomSource>(&self, field: &Field<R>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(field, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        Frame { x, y, w, h }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, frame.x + 1 + x * self.cell_w, frame.y + 1 + y * self.cell_h, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: Color) {
        let style = CellStyle::new(color_rgb(color), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame.x + 1 + x * self.cell_w, frame.y + 1 + y * self.cell_h, '█', style);
    }

    fn fill_cell_rect(&self, fb: &mut FrameBuffer, px: u16, py: u16, ch: char, style: CellStyle) {
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel<R: RandomSource>(
        &self,
        fb: &mut FrameBuffer,
        field: &Field<R>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, field.score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, field.level(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        let preview_y = y.saturating_add(1);
        let preview_w = SHAPE_ROWS as u16 * self.cell_w;
        fb.fill_rect(
            panel_x,
            preview_y,
            preview_w,
            SHAPE_ROWS as u16 * self.cell_h,
            ' ',
            CellStyle::new(value.fg, PANEL_BG),
        );
        field.render_preview(|row, col, _, cell| {
            if let Some(color) = cell {
                let style = CellStyle::new(color_rgb(color), PANEL_BG).bold();
                self.fill_cell_rect(
                    fb,
                    panel_x + col as u16 * self.cell_w,
                    preview_y + row as u16 * self.cell_h,
                    '█',
                    style,
                );
            }
        });
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Center `lines` over the board, starting at its vertical middle.
fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let mid_y = frame.y.saturating_add(frame.h / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y.saturating_add(i as u16), text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_is_centered() {
        let view = GameView::default();
        let frame = view.frame(Viewport::new(80, 24));
        assert_eq!((frame.w, frame.h), (22, 22));
        assert_eq!((frame.x, frame.y), (29, 1));
    }

    #[test]
    fn test_palette_is_distinct() {
        let colors = [
            Color::Blue,
            Color::Cyan,
            Color::Grey,
            Color::Yellow,
            Color::Green,
            Color::Violet,
            Color::Red,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(color_rgb(*a), color_rgb(*b));
            }
        }
    }

    #[test]
    fn test_empty_field_draws_border_and_dots() {
        let field = Field::new(1);
        let fb = GameView::default().render(&field, Viewport::new(80, 24));

        assert_eq!(fb.get(29, 1).unwrap().ch, '┌');
        assert_eq!(fb.get(50, 22).unwrap().ch, '┘');
        assert_eq!(fb.get(30, 2).unwrap().ch, '·');
        assert_eq!(fb.get(49, 21).unwrap().ch, '·');
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let mut field = Field::new(9);
        field.advance();
        let mut fb = FrameBuffer::new(1, 1);
        GameView::default().render_into_with_overlay(
            &field,
            Some(Overlay::GameOver),
            Viewport::new(5, 3),
            &mut fb,
        );
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
