//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The whole viewport is the play field: the outermost ring is the wall, the
//! score line overwrites part of the top wall, and the death screen is drawn
//! over the middle of the field.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, Color, FrameBuffer};

pub const DEATH_LINE: &str = "YOU ARE DEAD";
pub const RESTART_LINE: &str = "Press 'r' to restart.";
pub const SCORE_PREFIX: &str = " SCORE: ";
pub const SCORE_SUFFIX: &str = " - Press 'q' to quit ";

/// Column where the score line starts on row 0.
pub const SCORE_X: i32 = 2;

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

/// Glyphs and styles used to draw the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    wall: CellStyle,
    fruit: CellStyle,
    body: CellStyle,
    alert: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        let white = CellStyle::new(Color::White, Color::Black);
        let red = CellStyle::new(Color::Red, Color::Black);
        Self {
            wall: white,
            fruit: red,
            body: white,
            alert: red,
            text: white,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames; it is only reallocated when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = viewport.width as i32;
        let h = viewport.height as i32;

        self.draw_border(fb, w, h);

        fb.put_char(snap.fruit.x, snap.fruit.y, '&', self.fruit);
        for seg in &snap.segments {
            fb.put_char(seg.x, seg.y, '%', self.body);
        }

        if snap.dead {
            self.draw_death_screen(fb, w, h);
        }

        self.draw_score(fb, snap.score);
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: i32, h: i32) {
        if w == 0 || h == 0 {
            return;
        }
        for x in 0..w {
            fb.put_char(x, 0, '-', self.wall);
            fb.put_char(x, h - 1, '-', self.wall);
        }
        for y in 0..h {
            fb.put_char(0, y, '|', self.wall);
            fb.put_char(w - 1, y, '|', self.wall);
        }
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            fb.put_char(x, y, '#', self.wall);
        }
    }

    fn draw_death_screen(&self, fb: &mut FrameBuffer, w: i32, h: i32) {
        let y = h / 2;
        fb.put_str(centered_x(w, DEATH_LINE), y, DEATH_LINE, self.alert);
        fb.put_str(centered_x(w, RESTART_LINE), y + 1, RESTART_LINE, self.alert);
    }

    fn draw_score(&self, fb: &mut FrameBuffer, score: u32) {
        let mut x = SCORE_X;
        fb.put_str(x, 0, SCORE_PREFIX, self.text);
        x += SCORE_PREFIX.len() as i32;
        x += fb.put_u32(x, 0, score, self.text);
        fb.put_str(x, 0, SCORE_SUFFIX, self.text);
    }
}

/// Left column that centers `text` in a row `width` columns wide.
fn centered_x(width: i32, text: &str) -> i32 {
    width / 2 - text.len() as i32 / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::Cell;

    fn snapshot(segments: &[(i32, i32)], fruit: (i32, i32), score: u32, dead: bool) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        snap.segments.extend(segments.iter().copied().map(Cell::from));
        snap.fruit = fruit.into();
        snap.score = score;
        snap.dead = dead;
        snap
    }

    #[test]
    fn border_uses_corner_and_edge_glyphs() {
        let snap = snapshot(&[], (3, 3), 0, false);
        let fb = GameView::new().render(&snap, Viewport::new(40, 10));
        assert_eq!(fb.get(0, 0).unwrap().ch, '#');
        assert_eq!(fb.get(39, 0).unwrap().ch, '#');
        assert_eq!(fb.get(0, 9).unwrap().ch, '#');
        assert_eq!(fb.get(39, 9).unwrap().ch, '#');
        assert_eq!(fb.get(1, 9).unwrap().ch, '-');
        assert_eq!(fb.get(0, 4).unwrap().ch, '|');
        assert_eq!(fb.get(39, 4).unwrap().ch, '|');
    }

    #[test]
    fn empty_snapshot_leaves_corners_intact() {
        let fb = GameView::new().render(&GameSnapshot::default(), Viewport::new(40, 6));
        for (x, y) in [(0, 0), (39, 0), (0, 5), (39, 5)] {
            assert_eq!(fb.get(x, y).unwrap().ch, '#');
        }
    }

    #[test]
    fn score_line_sits_on_top_wall() {
        let snap = snapshot(&[(5, 5)], (3, 3), 1500, false);
        let fb = GameView::new().render(&snap, Viewport::new(40, 10));
        let row = fb.row_string(0);
        assert!(row.starts_with("#- SCORE: 1500 - Press 'q' to quit -"), "{row:?}");
    }

    #[test]
    fn fruit_and_segments_are_drawn_with_their_colors() {
        let snap = snapshot(&[(4, 5), (5, 5)], (7, 2), 0, false);
        let fb = GameView::new().render(&snap, Viewport::new(20, 10));

        let fruit = fb.get(7, 2).unwrap();
        assert_eq!(fruit.ch, '&');
        assert_eq!(fruit.style.fg, Color::Red);

        for x in [4, 5] {
            let seg = fb.get(x, 5).unwrap();
            assert_eq!(seg.ch, '%');
            assert_eq!(seg.style.fg, Color::White);
        }
    }

    #[test]
    fn death_screen_is_centered_in_red() {
        let snap = snapshot(&[(5, 5)], (3, 3), 0, true);
        let fb = GameView::new().render(&snap, Viewport::new(40, 20));

        let x1 = (20 - DEATH_LINE.len() / 2) as u16;
        assert_eq!(&fb.row_string(10)[x1 as usize..x1 as usize + DEATH_LINE.len()], DEATH_LINE);
        assert_eq!(fb.get(x1, 10).unwrap().style.fg, Color::Red);

        let x2 = 20 - RESTART_LINE.len() / 2;
        assert_eq!(&fb.row_string(11)[x2..x2 + RESTART_LINE.len()], RESTART_LINE);
    }

    #[test]
    fn no_death_screen_while_alive() {
        let snap = snapshot(&[(5, 5)], (3, 3), 0, false);
        let fb = GameView::new().render(&snap, Viewport::new(40, 20));
        assert!(!fb.row_string(10).contains("DEAD"));
    }

    #[test]
    fn segments_outside_viewport_are_clipped() {
        // A wall death leaves the head on the wall or beyond after a shrink.
        let snap = snapshot(&[(5, 2), (60, 2), (5, -1)], (3, 3), 0, true);
        let fb = GameView::new().render(&snap, Viewport::new(10, 8));
        assert_eq!(fb.cells().len(), 80);
        assert_eq!(fb.get(5, 2).unwrap().ch, '%');
    }

    #[test]
    fn render_into_reuses_buffer_across_sizes() {
        let view = GameView::new();
        let snap = snapshot(&[(2, 2)], (1, 1), 0, false);
        let mut fb = FrameBuffer::new(30, 10);
        view.render_into(&snap, Viewport::new(12, 6), &mut fb);
        assert_eq!((fb.width(), fb.height()), (12, 6));
        assert_eq!(fb.get(11, 5).unwrap().ch, '#');
    }

    #[test]
    fn renders_live_game_snapshot() {
        let game = GameState::new(30, 12, 7);
        let snap = game.snapshot();
        let fb = GameView::new().render(&snap, Viewport::new(30, 12));
        assert_eq!(fb.get(15, 6).unwrap().ch, '%');
        let fruit = game.fruit();
        if fruit != game.snake().head() {
            assert_eq!(fb.get(fruit.x as u16, fruit.y as u16).unwrap().ch, '&');
        }
    }
}
