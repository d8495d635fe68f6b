use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws a modal notice as a centered popup over `area`.
pub fn render_notice(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(message.to_owned()).style(
            Style::default()
                .fg(theme.popup_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("[Enter]/[Space] OK").style(Style::default().fg(theme.popup_footer)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" snake ")),
        popup,
    );
}

/// Draws `backdrop` (the last game frame, if any) and the notice on top.
pub fn render_notice_over(
    frame: &mut Frame<'_>,
    backdrop: Option<&Buffer>,
    message: &str,
    theme: &Theme,
) {
    if let Some(backdrop) = backdrop {
        paint_backdrop(frame, backdrop);
    }
    let area = frame.area();
    render_notice(frame, area, message, theme);
}

/// Copies the part of `backdrop` that still fits after a resize.
fn paint_backdrop(frame: &mut Frame<'_>, backdrop: &Buffer) {
    let area = frame.area().intersection(backdrop.area);
    let buffer = frame.buffer_mut();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buffer[(x, y)] = backdrop[(x, y)].clone();
        }
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    use crate::config::THEME;

    use super::{centered_popup, render_notice, render_notice_over};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn popup_is_centered_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_popup(area, 70, 40);

        assert_eq!(popup.width, 70);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 15);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn notice_text_is_drawn() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_notice(frame, area, "Game Over! Score: 3", &THEME);
            })
            .expect("draw should succeed");

        assert!(screen_text(&terminal).contains("Game Over! Score: 3"));
    }

    #[test]
    fn notice_keeps_last_board_visible_around_popup() {
        let mut backdrop = Buffer::empty(Rect::new(0, 0, 60, 20));
        backdrop.set_string(0, 0, "BOARD", Style::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");

        terminal
            .draw(|frame| {
                render_notice_over(frame, Some(&backdrop), "Game Over! Score: 3", &THEME);
            })
            .expect("draw should succeed");

        let text = screen_text(&terminal);
        assert!(text.starts_with("BOARD"));
        assert!(text.contains("Game Over! Score: 3"));
    }

    #[test]
    fn backdrop_larger_than_screen_is_clipped() {
        let mut backdrop = Buffer::empty(Rect::new(0, 0, 120, 40));
        backdrop.set_string(0, 0, "BOARD", Style::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");

        terminal
            .draw(|frame| render_notice_over(frame, Some(&backdrop), "bye", &THEME))
            .expect("draw should succeed");

        assert!(screen_text(&terminal).starts_with("BOARD"));
    }
}
