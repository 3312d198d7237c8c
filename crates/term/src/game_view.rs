//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board rows are stored bottom-up while terminal rows run top-down, so the
//! view flips the y axis: board row `y` lands on screen row `height - 1 - y`.

use crate::core::{GameSnapshot, VisibleCell};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::ShapeKind;

/// Empty-cell background of the play area.
pub const BACKGROUND: Rgb = Rgb::new(0xec, 0xf0, 0xf1);

/// Falling cells in monochrome mode.
const MONO_FALLING: Rgb = Rgb::new(0, 0, 0);

/// Locked cells in monochrome mode.
const MONO_LOCKED: Rgb = Rgb::new(127, 127, 127);

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

/// Driver-side presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub paused: bool,
    /// Kind colors when true; falling-black / locked-gray otherwise
    pub colors: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            paused: false,
            colors: true,
        }
    }
}

/// Render color of a shape kind.
pub fn kind_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb::new(0x3c, 0xc7, 0xd6),
        ShapeKind::O => Rgb::new(0xfb, 0xb4, 0x14),
        ShapeKind::T => Rgb::new(0xb0, 0x44, 0x97),
        ShapeKind::J => Rgb::new(0x39, 0x93, 0xd0),
        ShapeKind::L => Rgb::new(0xed, 0x65, 0x2f),
        ShapeKind::S => Rgb::new(0x95, 0xc4, 0x3d),
        ShapeKind::Z => Rgb::new(0xe8, 0x41, 0x38),
    }
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        options: ViewOptions,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = snap.width.max(0) as u16;
        let board_h = snap.height.max(0) as u16;
        let frame_w = board_w * self.cell_w + 2;
        let frame_h = board_h * self.cell_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..board_h {
            for x in 0..board_w {
                let cell = snap
                    .get(x as i32, y as i32)
                    .unwrap_or(VisibleCell::Empty);
                let (ch, style) = cell_look(cell, options);
                let screen_row = board_h - 1 - y;
                let px = start_x + 1 + x * self.cell_w;
                let py = start_y + 1 + screen_row * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w, start_y);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if options.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, options: ViewOptions, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, options, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x.saturating_add(5) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        fb.put_str(panel_x, start_y, "LINES", label);
        fb.put_u32(panel_x, start_y.saturating_add(1), snap.lines_cleared, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Glyph and style of one board cell.
///
/// Pausing dims the whole board and hatches the occupied cells.
fn cell_look(cell: VisibleCell, options: ViewOptions) -> (char, CellStyle) {
    let fg = match (cell, options.colors) {
        (VisibleCell::Empty, _) => BACKGROUND,
        (VisibleCell::Locked(kind) | VisibleCell::Falling(kind), true) => kind_color(kind),
        (VisibleCell::Falling(_), false) => MONO_FALLING,
        (VisibleCell::Locked(_), false) => MONO_LOCKED,
    };
    let ch = match (cell.is_occupied(), options.paused) {
        (false, _) => ' ',
        (true, false) => '█',
        (true, true) => '▒',
    };
    let style = CellStyle {
        dim: options.paused,
        ..CellStyle::new(fg, BACKGROUND)
    };
    (ch, style)
}
