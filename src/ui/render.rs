use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::canvas::PixelCanvas;
use crate::config::DisplayConfig;
use crate::sim::{
    state::{AI_X, PLAYER_X},
    FrameResult, ARENA_HEIGHT, ARENA_WIDTH, BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH,
};

// Layout: two header rows (score line, controls hint), then the bordered
// playfield filling the rest of the terminal.
const HEADER_ROWS: u16 = 2;

/// The playfield interior in terminal cells. The input host uses the same
/// rect to translate mouse rows into arena coordinates, so layout lives
/// in exactly one place.
pub fn playfield(area: Rect) -> Rect {
    let outer = field_outer(area);
    Rect {
        x: outer.x.saturating_add(1),
        y: outer.y.saturating_add(1),
        width: outer.width.saturating_sub(2),
        height: outer.height.saturating_sub(2),
    }
}

fn field_outer(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + HEADER_ROWS.min(area.height),
        width: area.width,
        height: area.height.saturating_sub(HEADER_ROWS),
    }
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}

pub fn render(frame: &mut Frame, view: &FrameResult, running: bool, display: &DisplayConfig) {
    let area = frame.area();

    // True black background, not the terminal default
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    draw_header(frame, view, display, area);

    let outer = field_outer(area);
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(rgb(display.player_color)));
    frame.render_widget(border, outer);

    let inner = playfield(area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Scale from arena units to braille pixels inside the playfield
    let sx = (inner.width as f32 * 2.0) / ARENA_WIDTH;
    let sy = (inner.height as f32 * 4.0) / ARENA_HEIGHT;

    draw_paddle(frame, inner, PLAYER_X, view.player_y, sx, sy, rgb(display.player_color));
    draw_paddle(frame, inner, AI_X, view.ai_y, sx, sy, rgb(display.ai_color));
    draw_ghost(frame, inner, view, sx, sy, rgb(display.ball_color));

    if !running {
        draw_idle_banner(frame, inner);
    }
}

fn draw_header(frame: &mut Frame, view: &FrameResult, display: &DisplayConfig, area: Rect) {
    if area.height == 0 {
        return;
    }
    let score_row = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };

    let player = Paragraph::new(format!(" Player: {}", view.score.player))
        .style(Style::default().fg(rgb(display.player_color)))
        .alignment(Alignment::Left);
    frame.render_widget(player, score_row);

    let title = Paragraph::new("GHOST PONG")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(title, score_row);

    let ai = Paragraph::new(format!("AI: {} ", view.score.ai))
        .style(Style::default().fg(rgb(display.ai_color)))
        .alignment(Alignment::Right);
    frame.render_widget(ai, score_row);

    if area.height < 2 {
        return;
    }
    let hint_row = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 1,
    };
    let hint = Paragraph::new("Space: start/reset   Mouse or Up/Down: move   Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, hint_row);
}

/// Paint one paddle as a filled rectangle at its fixed arena x.
fn draw_paddle(frame: &mut Frame, inner: Rect, arena_x: f32, arena_y: f32, sx: f32, sy: f32, color: Color) {
    let px = (arena_x * sx) as i32;
    let py = (arena_y * sy) as i32;
    let pw = ((PADDLE_WIDTH * sx) as i32).max(1);
    let ph = ((PADDLE_HEIGHT * sy) as i32).max(1);
    blit_shape(frame, inner, px, py, pw, ph, color, ShapeKind::Rect);
}

/// Paint the ghost centered on the ball position at twice the collision
/// size, matching the reference game's oversized sprite.
fn draw_ghost(frame: &mut Frame, inner: Rect, view: &FrameResult, sx: f32, sy: f32, color: Color) {
    let glyph = BALL_SIZE * 2.0;
    let px = ((view.ball_x - glyph / 2.0) * sx) as i32;
    let py = ((view.ball_y - glyph / 2.0) * sy) as i32;
    let pw = ((glyph * sx) as i32).max(2);
    let ph = ((glyph * sy) as i32).max(2);
    blit_shape(frame, inner, px, py, pw, ph, color, ShapeKind::Ghost);
}

enum ShapeKind {
    Rect,
    Ghost,
}

/// Draw a shape into a small braille canvas covering its cell-aligned
/// bounding box, then render that box as a styled paragraph. Each entity
/// gets its own box so each can carry its own color.
fn blit_shape(
    frame: &mut Frame,
    inner: Rect,
    px: i32,
    py: i32,
    pw: i32,
    ph: i32,
    color: Color,
    kind: ShapeKind,
) {
    // Cell-aligned bounds in playfield pixel space
    let cell_x0 = px.div_euclid(2);
    let cell_y0 = py.div_euclid(4);
    let cell_x1 = (px + pw - 1).div_euclid(2) + 1;
    let cell_y1 = (py + ph - 1).div_euclid(4) + 1;
    let cols = (cell_x1 - cell_x0).max(1) as usize;
    let rows = (cell_y1 - cell_y0).max(1) as usize;

    let mut canvas = PixelCanvas::new(cols, rows);
    let local_x = px - cell_x0 * 2;
    let local_y = py - cell_y0 * 4;
    match kind {
        ShapeKind::Rect => canvas.fill_rect(local_x, local_y, pw, ph),
        ShapeKind::Ghost => canvas.fill_ghost(local_x, local_y, pw, ph),
    }

    let desired_x = inner.x as i32 + cell_x0;
    let desired_y = inner.y as i32 + cell_y0;
    let target = Rect {
        x: desired_x.clamp(0, u16::MAX as i32) as u16,
        y: desired_y.clamp(0, u16::MAX as i32) as u16,
        width: cols as u16,
        height: rows as u16,
    }
    .intersection(inner);
    if target.width == 0 || target.height == 0 {
        return;
    }

    // Rows and columns that slid off the top/left of the playfield are
    // dropped by the intersection; index the canvas accordingly.
    let skip_rows = (target.y as i32 - desired_y).max(0) as usize;
    let skip_cols = (target.x as i32 - desired_x).max(0) as usize;
    let lines: Vec<Line> = (0..target.height as usize)
        .map(|r| {
            let text: String = canvas
                .row_text(r + skip_rows)
                .chars()
                .skip(skip_cols)
                .take(target.width as usize)
                .collect();
            Line::from(text)
        })
        .collect();
    let shape = Paragraph::new(lines).style(Style::default().fg(color));
    frame.render_widget(shape, target);
}

fn draw_idle_banner(frame: &mut Frame, inner: Rect) {
    if inner.height == 0 {
        return;
    }
    let banner_row = Rect {
        x: inner.x,
        y: inner.y + inner.height / 2,
        width: inner.width,
        height: 1,
    };
    let banner = Paragraph::new("Press Space to start")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(banner, banner_row);
}
