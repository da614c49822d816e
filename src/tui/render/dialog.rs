use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{centered_rect_fixed, wrap_text};

/// Render the removal prompt (Confirm mode)
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(pending) = &app.pending_removal else {
        return;
    };
    let quoted = format!("\u{201c}{}\u{201d}", pending.title);
    render_popup(
        frame,
        app,
        area,
        "Remove item",
        &[
            ("Are you sure you want to remove this item?", false),
            (quoted.as_str(), true),
        ],
        &[("n", "No"), ("y", "Yes")],
    );
}

/// Render the informational alert (Alert mode)
pub fn render_alert_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(alert) = &app.alert else {
        return;
    };
    render_popup(
        frame,
        app,
        area,
        &alert.title,
        &[(alert.message.as_str(), false)],
        &[("Enter", "OK")],
    );
}

/// Centered popup: title, wrapped paragraphs (`true` = bright), key hints.
fn render_popup(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    paragraphs: &[(&str, bool)],
    actions: &[(&str, &str)],
) {
    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {}", unicode::truncate_to_width(title, inner_w.saturating_sub(1))),
        header_style,
    )));
    lines.push(Line::from(""));

    for (text, bright) in paragraphs {
        let style = if *bright { bright_style } else { text_style };
        for s in wrap_text(" ", text, inner_w) {
            lines.push(Line::from(Span::styled(s, style)));
        }
    }
    lines.push(Line::from(""));

    let mut action_spans = vec![Span::styled(" ", dim_style)];
    for (i, (key, label)) in actions.iter().enumerate() {
        if i > 0 {
            action_spans.push(Span::styled("   ", dim_style));
        }
        action_spans.push(Span::styled(key.to_string(), key_style));
        action_spans.push(Span::styled(format!(" {}", label), dim_style));
    }
    lines.push(Line::from(action_spans));

    // Dynamic height from content + 2 for borders
    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}
