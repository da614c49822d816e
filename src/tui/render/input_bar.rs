use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

use super::helpers::scroll_to_cursor;

const PLACEHOLDER: &str = "Add a new task...";

/// Render the add-task input box. Places the terminal cursor in it while it
/// has focus.
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Add;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // One cell of padding on the left
    let text_w = inner.width.saturating_sub(1) as usize;
    let line = if app.input.text().is_empty() {
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(PLACEHOLDER, Style::default().fg(app.theme.dim).bg(bg)),
        ])
    } else {
        let (visible, _) = scroll_to_cursor(&app.input, text_w);
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(visible, Style::default().fg(app.theme.text_bright).bg(bg)),
        ])
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);

    if focused && inner.height > 0 {
        let (_, cursor_x) = scroll_to_cursor(&app.input, text_w);
        frame.set_cursor_position(Position::new(
            inner.x + 1 + cursor_x as u16,
            inner.y,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn input_shows_placeholder_when_empty() {
        let app = app_with(&[]);
        let output = render_to_string(30, 3, |frame, area| {
            render_input_bar(frame, &app, area);
        });
        assert!(output.contains("Add a new task..."));
    }

    #[test]
    fn input_shows_typed_text() {
        let mut app = app_with(&[]);
        app.input.set("Buy milk");
        let output = render_to_string(30, 3, |frame, area| {
            render_input_bar(frame, &app, area);
        });
        let middle = output.lines().nth(1).unwrap();
        assert!(middle.starts_with("\u{2502} Buy milk"));
        assert!(!output.contains("Add a new task"));
    }
}
