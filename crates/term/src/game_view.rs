//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, ShapeKind, StatusMessage, BOARD_HEIGHT, BOARD_WIDTH, SHAPES_COUNT};

/// Classic per-shape colors, indexed by shape tag.
pub const COLOR_TABLE: [u32; SHAPES_COUNT] = [
    0x000000, 0xCC6666, 0x66CC66, 0x6666CC, 0xCCCC66, 0xCC66CC, 0x66CCCC, 0xDAAA00,
];

pub fn shape_color(kind: ShapeKind) -> Rgb {
    Rgb::from_hex(COLOR_TABLE[kind.index() as usize])
}

const CONTROLS: [(&str, &str); 8] = [
    ("\u{2190} \u{2192}", "move"),
    ("\u{2191}", "rotate left"),
    ("\u{2193}", "rotate right"),
    ("Space", "drop"),
    ("D", "one line down"),
    ("P", "pause"),
    ("R", "restart"),
    ("Q", "quit"),
];

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Host-side state drawn around the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hud {
    /// Latest status line message
    pub status: Option<StatusMessage>,
    /// The "play again?" question is open
    pub restart_prompt: bool,
    /// A score that could not be saved
    pub unsaved_score: Option<u32>,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_px_h = BOARD_HEIGHT as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Leave one row under the frame for the status line.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::plain(PLAY_BG, PLAY_BG),
        );
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let kind = snap.cell(x, y);
                if kind.is_empty() {
                    let dot = CellStyle {
                        dim: true,
                        ..CellStyle::plain(Rgb::new(90, 90, 100), PLAY_BG)
                    };
                    self.fill_cell(fb, (start_x, start_y), (x, y), '\u{b7}', dot);
                } else {
                    self.draw_block(fb, (start_x, start_y), (x, y), kind);
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells {
                self.draw_block(fb, (start_x, start_y), (x, y), active.kind);
            }
        }

        self.draw_status_line(fb, hud, start_x, start_y + frame_h);
        self.draw_side_panel(fb, snap, hud, viewport, (start_x + frame_w + 2, start_y));

        let mid_y = start_y + frame_h / 2;
        let over = snap.phase == Phase::GameOver || hud.status == Some(StatusMessage::GameOver);
        if hud.restart_prompt {
            if over {
                draw_centered(fb, start_x, frame_w, mid_y.saturating_sub(1), "GAME OVER");
            }
            draw_centered(fb, start_x, frame_w, mid_y + 1, "Play again? (y/n)");
        } else if snap.phase == Phase::Paused {
            draw_centered(fb, start_x, frame_w, mid_y, "PAUSED");
        } else if over {
            draw_centered(fb, start_x, frame_w, mid_y, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Screen position of board cell (x, y); row 0 is drawn last.
    fn cell_origin(&self, start_x: u16, start_y: u16, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        let row = (BOARD_HEIGHT as i8 - 1 - y) as u16;
        Some((start_x + 1 + x as u16 * self.cell_w, start_y + 1 + row))
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        (start_x, start_y): (u16, u16),
        (x, y): (i8, i8),
        ch: char,
        style: CellStyle,
    ) {
        if let Some((px, py)) = self.cell_origin(start_x, start_y, x, y) {
            fb.fill_rect(px, py, self.cell_w, 1, ch, style);
        }
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        cell: (i8, i8),
        kind: ShapeKind,
    ) {
        let style = CellStyle::plain(shape_color(kind), PLAY_BG).bold();
        self.fill_cell(fb, origin, cell, '\u{2588}', style);
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, hud: &Hud, x: u16, y: u16) {
        let style = CellStyle::default();
        match hud.status {
            Some(StatusMessage::Score { score, max_score }) => {
                let cx = fb.put_str(x, y, "Score: ", style);
                let cx = fb.put_u32(cx, y, score, style);
                let cx = fb.put_str(cx, y, " | Max Score: ", style);
                fb.put_u32(cx, y, max_score, style);
            }
            Some(StatusMessage::Paused) => {
                fb.put_str(x, y, "Paused", style);
            }
            Some(StatusMessage::GameOver) => {
                fb.put_str(x, y, "Game Over", style);
            }
            None => {}
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &Hud,
        viewport: Viewport,
        (panel_x, start_y): (u16, u16),
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("MAX", snap.max_score),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        if let Some(unsaved) = hud.unsaved_score {
            let warn = CellStyle::plain(Rgb::from_hex(COLOR_TABLE[1]), PANEL_BG).bold();
            fb.put_str(panel_x, y, "NOT SAVED", warn);
            fb.put_u32(panel_x, y + 1, unsaved, warn);
            y += 3;
        }

        fb.put_str(panel_x, y, "CONTROLS", label);
        y += 1;
        for (keys, what) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, keys, value);
            fb.put_str(panel_x + 7, y, what, hint);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '\u{250c}', style);
    fb.put_char(x + w - 1, y, '\u{2510}', style);
    fb.put_char(x, y + h - 1, '\u{2514}', style);
    fb.put_char(x + w - 1, y + h - 1, '\u{2518}', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '\u{2500}', style);
        fb.put_char(x + dx, y + h - 1, '\u{2500}', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '\u{2502}', style);
        fb.put_char(x + w - 1, y + dy, '\u{2502}', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, start_x: u16, frame_w: u16, y: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = start_x + frame_w.saturating_sub(text_w) / 2;
    let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, y, text, style);
}
