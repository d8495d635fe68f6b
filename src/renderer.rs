use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::{GLYPH_TILE, GridSize, TILE_COLUMNS, Theme};
use crate::food::FoodKind;
use crate::game::Session;
use crate::snake::Position;
use crate::ui::hud::render_header;

/// Renders the full game frame from immutable state.
pub fn render<R>(frame: &mut Frame<'_>, session: &Session<R>, elapsed: Duration, theme: &Theme) {
    let area = frame.area();
    let board = render_header(frame, area, session.score, elapsed, theme);

    frame.render_widget(Block::new().style(Style::new().bg(theme.play_bg)), board);

    let bounds = session.bounds();
    for segment in session.snake.segments() {
        draw_tile(frame, board, bounds, *segment, theme.snake, theme.play_bg);
    }
    draw_tile(
        frame,
        board,
        bounds,
        session.food.position,
        food_color(session.food.kind, theme),
        theme.play_bg,
    );
}

/// Fill color of a food tile.
#[must_use]
pub fn food_color(kind: FoodKind, theme: &Theme) -> Color {
    match kind {
        FoodKind::Normal => theme.food_normal,
        FoodKind::Gold => theme.food_gold,
        FoodKind::Bad => theme.food_bad,
    }
}

fn draw_tile(
    frame: &mut Frame<'_>,
    board: Rect,
    bounds: GridSize,
    position: Position,
    color: Color,
    background: Color,
) {
    let Some((x, y)) = logical_to_terminal(board, bounds, position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_TILE, Style::new().fg(color).bg(background));
}

/// Terminal cell of the left column of a tile, if it is on screen.
fn logical_to_terminal(board: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(TILE_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = board.x.saturating_add(x_offset);
    let y = board.y.saturating_add(y_offset);
    if x.saturating_add(TILE_COLUMNS) > board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}
