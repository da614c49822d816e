use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;

/// Render the header: app name on the left, task counter on the right,
/// separator underneath.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        " todo",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let counter = format!("{} ", app.counter_label());
    let used = spans_width(&spans) + unicode::display_width(&counter);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    spans.push(Span::styled(
        counter,
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn header_counts_tasks() {
        let app = app_with(&["Buy milk"]);
        let output = render_to_string(30, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert_snapshot!(output, @r"
         todo         You have 1 task
        ──────────────────────────────
        ");
    }

    #[test]
    fn header_plural() {
        let app = app_with(&["a", "b", "c"]);
        let output = render_to_string(40, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.lines().next().unwrap().ends_with("You have 3 tasks"));
    }
}
