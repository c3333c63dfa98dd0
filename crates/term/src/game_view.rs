//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{u32_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, NUM_COLS, NUM_ROWS};

/// Space between neighbouring tiles, in terminal cells.
const GAP: u16 = 1;

/// Largest tile pitch; keeps the frame size well inside `u16`.
const MAX_PITCH: u16 = 256;

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_FG: Rgb = Rgb::new(119, 110, 101);
const LIGHT_FG: Rgb = Rgb::new(249, 246, 242);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile pitch in terminal columns (tile width plus gap).
    cell_w: u16,
    /// Tile pitch in terminal rows (tile height plus gap).
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x4 pitch gives 6x3 tiles, roughly square on typical terminal glyphs.
        Self {
            cell_w: 7,
            cell_h: 4,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Pitches are clamped to `2..=256`; below 2 there is no room for a tile
    /// next to the gap.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(GAP + 1, MAX_PITCH),
            cell_h: cell_h.clamp(GAP + 1, MAX_PITCH),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let inner_w = NUM_COLS as u16 * self.cell_w + GAP;
        let inner_h = NUM_ROWS as u16 * self.cell_h + GAP;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Allocation-free once `fb` has the viewport's size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_notice(snap, None, viewport, fb);
    }

    /// Like [`GameView::render_into`], with a message drawn over the board.
    pub fn render_into_with_notice(
        &self,
        snap: &GameSnapshot,
        notice: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let bg = CellStyle::new(BOARD_BG, BOARD_BG);

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let value = snap.tiles[row][col];
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(text) = notice {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_notice(snap, None, viewport)
    }

    pub fn render_with_notice(
        &self,
        snap: &GameSnapshot,
        notice: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_notice(snap, notice, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of the tile at (row, col).
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        (
            start_x + 1 + GAP + col * self.cell_w,
            start_y + 1 + GAP + row * self.cell_h,
        )
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

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
    ) {
        let (px, py) = self.tile_origin(start_x, start_y, row, col);
        let tile_w = self.cell_w - GAP;
        let tile_h = self.cell_h - GAP;
        let style = tile_style(value);
        fb.fill_rect(px, py, tile_w, tile_h, ' ', style);

        if value == 0 {
            return;
        }
        let text_w = u32_width(value).min(tile_w);
        let tx = px + (tile_w - text_w) / 2;
        let ty = py + tile_h / 2;
        fb.put_u32(tx, ty, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "UNDOS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.undos_remaining, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", label);
        y = y.saturating_add(1);
        let status = match snap.status {
            GameStatus::InProgress => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "stuck",
        };
        fb.put_str(panel_x, y, status, value);
        y = y.saturating_add(2);

        for line in [
            "arrows/wasd move",
            "u  undo",
            "n  new game",
            "q  quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
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
        // One space of padding on each side.
        let text_w = text.chars().count() as u16 + 2;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_char(x, mid_y, ' ', style);
        fb.put_str(x.saturating_add(1), mid_y, text, style);
        fb.put_char(x.saturating_add(text_w - 1), mid_y, ' ', style);
    }
}

/// Classic 2048 palette; 0 is the empty slot.
pub fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        0 => (EMPTY_BG, DARK_FG),
        2 => (Rgb::new(238, 228, 218), DARK_FG),
        4 => (Rgb::new(237, 224, 200), DARK_FG),
        8 => (Rgb::new(242, 177, 121), LIGHT_FG),
        16 => (Rgb::new(245, 149, 99), LIGHT_FG),
        32 => (Rgb::new(246, 124, 95), LIGHT_FG),
        64 => (Rgb::new(246, 94, 59), LIGHT_FG),
        128 => (Rgb::new(237, 207, 114), LIGHT_FG),
        256 => (Rgb::new(237, 204, 97), LIGHT_FG),
        512 => (Rgb::new(237, 200, 80), LIGHT_FG),
        1024 => (Rgb::new(237, 197, 63), LIGHT_FG),
        2048 => (Rgb::new(237, 194, 46), LIGHT_FG),
        _ => (Rgb::new(60, 58, 50), LIGHT_FG),
    };
    CellStyle {
        fg,
        bg,
        bold: value >= 8,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_default() {
        assert_eq!(GameView::default().frame_size(), (31, 19));
    }

    #[test]
    fn test_new_clamps_pitch() {
        let view = GameView::new(0, 1);
        assert_eq!(view.frame_size(), (4 * 2 + 1 + 2, 4 * 2 + 1 + 2));
    }

    #[test]
    fn test_new_caps_huge_pitch() {
        let view = GameView::new(u16::MAX, u16::MAX);
        let side = 4 * MAX_PITCH + GAP + 2;
        assert_eq!(view.frame_size(), (side, side));

        let snap = GameSnapshot::default();
        let fb = view.render(&snap, Viewport::new(40, 10));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }

    #[test]
    fn test_tile_style_distinguishes_values() {
        assert_ne!(tile_style(2).bg, tile_style(4).bg);
        assert_ne!(tile_style(0).bg, tile_style(2).bg);
        assert_eq!(tile_style(4096), tile_style(8192));
        assert!(tile_style(2048).bold);
        assert!(!tile_style(2).bold);
    }
}
