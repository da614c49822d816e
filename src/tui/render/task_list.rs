use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{done_marker, scroll_to_cursor, spans_width};

/// Columns taken by " [ ] " before the title
const TITLE_X: u16 = 5;

/// Render one row per task. Rows being edited show their draft and, when
/// focused, get the terminal cursor.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.tasks.is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row on screen
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let width = area.width as usize;
    let title_w = width.saturating_sub(TITLE_X as usize + 1);
    let show_cursor = app.mode != Mode::Add;
    let mut cursor_pos = None;
    let mut lines: Vec<Line> = Vec::new();

    for (i, task) in app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_cursor = show_cursor && i == app.cursor;
        let row_bg = if is_cursor {
            app.theme.selection_bg
        } else {
            bg
        };

        let marker_color = if task.done {
            app.theme.green
        } else {
            app.theme.dim
        };
        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(
                done_marker(task.done),
                Style::default().fg(marker_color).bg(row_bg),
            ),
            Span::styled(" ", Style::default().bg(row_bg)),
        ];

        let editor = app.editors.get(&task.id).filter(|e| e.is_editing());
        if let Some(editor) = editor {
            let (visible, cursor_x) = scroll_to_cursor(editor.draft(), title_w);
            spans.push(Span::styled(
                visible,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::UNDERLINED),
            ));
            if app.mode == Mode::Edit && app.editing == Some(task.id) {
                let row_y = (i - app.scroll_offset) as u16;
                cursor_pos = Some(Position::new(
                    area.x + TITLE_X + cursor_x as u16,
                    area.y + row_y,
                ));
            }
        } else {
            let title_style = if task.done {
                Style::default()
                    .fg(app.theme.green)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            spans.push(Span::styled(
                unicode::truncate_to_width(&task.title, title_w),
                title_style,
            ));
        }

        // Pad cursor line
        if is_cursor {
            let used = spans_width(&spans);
            if used < width {
                spans.push(Span::styled(
                    " ".repeat(width - used),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn list_empty() {
        let mut app = app_with(&[]);
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " No tasks yet");
    }

    #[test]
    fn list_marks_done_tasks() {
        let mut app = app_with(&["Buy milk", "Walk dog"]);
        let id = app.tasks.tasks()[1].id;
        app.toggle_task(id);
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " [ ] Buy milk\n [\u{2713}] Walk dog");
    }

    #[test]
    fn list_shows_draft_while_editing() {
        let mut app = app_with(&["Buy milk"]);
        let id = app.tasks.tasks()[0].id;
        app.start_edit(id);
        app.focused_editor().unwrap().draft_mut().unwrap().set("Buy oat milk");
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " [ ] Buy oat milk");
        // The task itself is untouched until submit
        assert_eq!(app.tasks.tasks()[0].title, "Buy milk");
    }

    #[test]
    fn list_scrolls_to_cursor() {
        let titles: Vec<String> = (1..=10).map(|n| format!("Task {}", n)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut app = app_with(&refs);
        app.cursor = 9;
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(app.scroll_offset, 7);
        assert_eq!(output, " [ ] Task 8\n [ ] Task 9\n [ ] Task 10");
    }

    #[test]
    fn list_truncates_long_titles() {
        let mut app = app_with(&["A very long task title that will not fit"]);
        let output = render_to_string(20, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " [ ] A very long t\u{2026}");
    }
}
