//! GameView: draws a [`GameSnapshot`] and the shell's side-panel data into a
//! framebuffer.
//!
//! Pure: no terminal I/O, so every frame can be checked in tests.

use tetris_classic_leaderboard::LeaderboardEntry;

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Panel rows reserved for high scores.
const MAX_HIGH_SCORES: usize = 5;

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

/// Shell state shown next to the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelInfo<'a> {
    pub paused: bool,
    pub player: &'a str,
    pub high_scores: &'a [LeaderboardEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square.
        Self::new(2, 1)
    }
}

/// Screen-space placement of the board frame for one render.
#[derive(Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a frame, reusing `fb`'s allocation.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        panel: &PanelInfo<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.w - 2,
            layout.h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG),
        );
        draw_border(fb, layout, border);

        let grid_dot = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let (x, y) = (x as i8, y as i8);
                match PieceKind::from_cell_value(value) {
                    Some(kind) => self.fill_board_cell(fb, layout, x, y, '█', piece_style(kind)),
                    None => self.fill_board_cell(fb, layout, x, y, '·', grid_dot),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y.filter(|&gy| gy != active.y) {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), PLAYFIELD_BG).dim();
                for (x, y) in active.cells_at_row(ghost_y) {
                    self.fill_board_cell(fb, layout, x, y, '░', ghost);
                }
            }
            for (x, y) in active.cells() {
                self.fill_board_cell(fb, layout, x, y, '█', piece_style(active.kind).bold());
            }
        }

        self.draw_side_panel(fb, snap, panel, viewport, layout);

        if snap.game_over {
            draw_overlay(fb, layout, &["GAME OVER", "r: restart"]);
        } else if panel.paused {
            draw_overlay(fb, layout, &["PAUSED", "p: resume"]);
        }
    }

    /// Render into a fresh framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        panel: &PanelInfo<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, panel, viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Layout { x, y, w, h }
    }

    /// Fill one board cell; cells off the board are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if !(0..BOARD_WIDTH as i8).contains(&x) || !(0..BOARD_HEIGHT as i8).contains(&y) {
            return;
        }
        let px = layout.x + 1 + x as u16 * self.cell_w;
        let py = layout.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        panel: &PanelInfo<'_>,
        viewport: Viewport,
        layout: Layout,
    ) {
        let x = layout.x.saturating_add(layout.w).saturating_add(2);
        if x >= viewport.width || viewport.width - x < 12 {
            return;
        }
        let panel_w = viewport.width - x;

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let mut y = layout.y;

        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        match snap.next {
            Some(kind) => {
                self.draw_preview(fb, x, y, kind);
                y += 3;
            }
            None => {
                fb.put_str(x, y, "-", value);
                y += 2;
            }
        }

        if !panel.player.is_empty() {
            fb.put_str(x, y, "PLAYER", label);
            fb.put_str(x, y + 1, panel.player, value);
            y += 3;
        }

        if !panel.high_scores.is_empty() {
            fb.put_str(x, y, "TOP", label);
            y += 1;
            let dim = value.dim();
            for (rank, entry) in panel.high_scores.iter().take(MAX_HIGH_SCORES).enumerate() {
                if y >= viewport.height {
                    break;
                }
                let cx = fb.put_u32(x, y, rank as u32 + 1, dim);
                let cx = fb.put_str(cx, y, ". ", dim);
                let cx = fb.put_u32(cx, y, entry.score, value);
                let name_w = (x + panel_w).saturating_sub(cx + 1);
                if name_w > 0 {
                    let name: String = entry.name.chars().take(name_w as usize).collect();
                    fb.put_str(cx + 1, y, &name, dim);
                }
                y += 1;
            }
        }
    }

    /// Draw `kind` in spawn orientation with its top row at `y`.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = get_shape(kind, Rotation::North);
        let top = shape.iter().map(|&(_, dy)| dy).min().unwrap_or(0);
        let style = piece_style(kind);
        for (dx, dy) in shape {
            let px = x + dx as u16 * self.cell_w;
            let py = y + (dy - top) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, l: Layout, style: CellStyle) {
    let (right, bottom) = (l.x + l.w - 1, l.y + l.h - 1);

    for x in l.x + 1..right {
        fb.put_char(x, l.y, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in l.y + 1..bottom {
        fb.put_char(l.x, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
    fb.put_char(l.x, l.y, '┌', style);
    fb.put_char(right, l.y, '┐', style);
    fb.put_char(l.x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

/// Centered text lines over the middle of the board.
fn draw_overlay(fb: &mut FrameBuffer, l: Layout, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let top = (l.y + l.h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = l.x + l.w.saturating_sub(text_w) / 2;
        fb.put_str(x, top + i as u16, text, style);
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, PLAYFIELD_BG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;

    fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    #[test]
    fn board_frame_is_centered() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::inert(), &PanelInfo::default(), Viewport::new(40, 24));

        // 10 cells * 2 + border = 22 wide, 20 + border = 22 tall.
        assert_eq!(fb.get(9, 1).unwrap().ch, '┌');
        assert_eq!(fb.get(30, 1).unwrap().ch, '┐');
        assert_eq!(fb.get(9, 22).unwrap().ch, '└');
        assert_eq!(fb.get(10, 2).unwrap().ch, '·');
    }

    #[test]
    fn active_piece_and_ghost_are_drawn() {
        let game = Game::new(1);
        let snap = game.snapshot();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, &PanelInfo::default(), Viewport::new(22, 22));

        let active = snap.active.unwrap();
        for (x, y) in active.cells() {
            let cell = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
            assert_eq!(cell.ch, '█');
            assert!(cell.style.bold);
        }
        for (x, y) in active.cells_at_row(snap.ghost_y.unwrap()) {
            assert_eq!(fb.get(2 + x as u16 * 2, 1 + y as u16).unwrap().ch, '░');
        }
    }

    #[test]
    fn side_panel_shows_counters_and_high_scores() {
        let scores = vec![
            LeaderboardEntry::new("alice", 1200, 12, 1),
            LeaderboardEntry::new("bob", 300, 3, 0),
        ];
        let panel = PanelInfo {
            paused: false,
            player: "carol",
            high_scores: &scores,
        };
        let fb = GameView::default().render(&Game::new(1).snapshot(), &panel, Viewport::new(60, 24));

        for needle in ["SCORE", "LEVEL", "LINES", "NEXT", "carol", "TOP", "1. 1200 alice", "2. 300 bob"] {
            assert!(screen_contains(&fb, needle), "missing {needle:?}");
        }
    }

    #[test]
    fn narrow_viewport_skips_panel() {
        let fb = GameView::default().render(&Game::new(1).snapshot(), &PanelInfo::default(), Viewport::new(30, 22));
        assert!(!screen_contains(&fb, "SCORE"));
    }

    #[test]
    fn overlays() {
        let view = GameView::default();
        let vp = Viewport::new(40, 24);

        let paused = PanelInfo {
            paused: true,
            ..PanelInfo::default()
        };
        let fb = view.render(&Game::new(1).snapshot(), &paused, vp);
        assert!(screen_contains(&fb, "PAUSED"));

        let fb = view.render(&GameSnapshot::inert(), &paused, vp);
        assert!(screen_contains(&fb, "GAME OVER"));
        assert!(!screen_contains(&fb, "PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        for (w, h) in [(0, 0), (1, 1), (5, 3)] {
            let fb = view.render(&Game::new(3).snapshot(), &PanelInfo::default(), Viewport::new(w, h));
            assert_eq!((fb.width(), fb.height()), (w, h));
        }
    }
}
