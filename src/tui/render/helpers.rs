use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_segmentation::UnicodeSegmentation;

use crate::ops::line_buffer::LineBuffer;
use crate::util::unicode;

/// Marker shown before a task title
pub(super) fn done_marker(done: bool) -> &'static str {
    if done { "[\u{2713}]" } else { "[ ]" }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// The part of an edit buffer that fits in `width` cells with the cursor in
/// view, and the cursor's column inside that part.
pub(super) fn scroll_to_cursor(buf: &LineBuffer, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let cursor_col = buf.cursor_col();
    // Keep one cell free for the cursor when it sits at the end
    let skip_cols = cursor_col.saturating_sub(width - 1);

    let mut col = 0;
    let mut start_col = None;
    let mut visible = String::new();
    for g in buf.text().graphemes(true) {
        let gw = unicode::display_width(g);
        if col < skip_cols {
            col += gw;
            continue;
        }
        let start = *start_col.get_or_insert(col);
        if col - start + gw > width {
            break;
        }
        visible.push_str(g);
        col += gw;
    }
    let start = start_col.unwrap_or(col);
    (visible, cursor_col.saturating_sub(start))
}

/// Word-wrap `text` into lines of at most `max_width` cells.
/// Every line (including the first) is prefixed with `indent`.
pub(super) fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = unicode::display_width(indent);
    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_len = indent_len;

    for word in text.split_whitespace() {
        let word_len = unicode::display_width(word);
        let space = if current_len == indent_len { 0 } else { 1 };
        if current_len + space + word_len > max_width && current_len > indent_len {
            lines.push(std::mem::replace(&mut current, indent.to_string()));
            current_len = indent_len;
        }
        if current_len > indent_len {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_short_text_is_untouched() {
        let buf = LineBuffer::new("milk");
        assert_eq!(scroll_to_cursor(&buf, 10), ("milk".to_string(), 4));
    }

    #[test]
    fn test_scroll_keeps_cursor_visible_at_end() {
        let buf = LineBuffer::new("abcdefghij");
        let (visible, x) = scroll_to_cursor(&buf, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(x, 4);
    }

    #[test]
    fn test_scroll_cursor_at_start_shows_head() {
        let mut buf = LineBuffer::new("abcdefghij");
        buf.move_home();
        assert_eq!(scroll_to_cursor(&buf, 5), ("abcde".to_string(), 0));
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text(" ", "Are you sure you want to remove this item?", 20);
        assert_eq!(lines, vec![" Are you sure you", " want to remove this", " item?"]);
    }
}
