use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{HEADER_ROWS, Theme};

const HEADER_MARGIN_X: usize = 2;

/// Renders the scoreboard strip and returns the area below it.
#[must_use]
pub fn render_header(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    elapsed: Duration,
    theme: &Theme,
) -> Rect {
    let [header_area, play_area] =
        Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Min(0)]).areas(area);

    let style = Style::new()
        .fg(theme.header_fg)
        .bg(theme.header_bg)
        .add_modifier(Modifier::BOLD);
    let [_, text_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(header_area);

    frame.render_widget(Paragraph::new("").style(style), header_area);
    frame.render_widget(
        Paragraph::new(header_line(score, elapsed, usize::from(text_row.width))).style(style),
        text_row,
    );

    play_area
}

/// `Score` pinned left and `Time` pinned right within `width` columns.
fn header_line(score: u32, elapsed: Duration, width: usize) -> Line<'static> {
    let left = format!("Score: {score}");
    let right = format!("Time: {}", format_elapsed(elapsed));

    let used = HEADER_MARGIN_X * 2 + left.width() + right.width();
    let gap = width.saturating_sub(used).max(1);
    let margin = " ".repeat(HEADER_MARGIN_X);

    Line::from(format!("{margin}{left}{}{right}{margin}", " ".repeat(gap)))
}

/// Formats elapsed play time as `MM:SS`; minutes wrap after an hour.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", (secs / 60) % 60, secs % 60)
}
