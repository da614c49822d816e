use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::line_buffer::LineBuffer;

/// Some terminals report Shift+letter as a lowercase char with SHIFT set.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

/// Apply a text-editing key to a single-line buffer.
/// Returns false when the key is not an editing key.
pub(super) fn edit_line(buf: &mut LineBuffer, key: KeyEvent) -> bool {
    let word = key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL);
    match (key.code, key.modifiers) {
        (KeyCode::Char(c), m) if m.difference(KeyModifiers::SHIFT).is_empty() => {
            buf.insert_char(c);
        }
        (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => buf.move_home(),
        (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => buf.move_end(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => buf.delete_word_back(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => buf.clear(),
        (KeyCode::Backspace, _) if word => buf.delete_word_back(),
        (KeyCode::Backspace, _) => buf.backspace(),
        (KeyCode::Delete, _) => buf.delete(),
        (KeyCode::Left, _) if word => buf.move_word_left(),
        (KeyCode::Left, _) => buf.move_left(),
        (KeyCode::Right, _) if word => buf.move_word_right(),
        (KeyCode::Right, _) => buf.move_right(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_normalize_shift_letter() {
        let k = normalize_key(key(KeyCode::Char('g'), KeyModifiers::SHIFT));
        assert_eq!(k.code, KeyCode::Char('G'));
    }

    #[test]
    fn test_shifted_chars_are_typed() {
        let mut buf = LineBuffer::default();
        assert!(edit_line(&mut buf, key(KeyCode::Char('B'), KeyModifiers::SHIFT)));
        assert!(edit_line(&mut buf, key(KeyCode::Char('e'), KeyModifiers::NONE)));
        assert_eq!(buf.text(), "Be");
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut buf = LineBuffer::new("abc");
        assert!(!edit_line(&mut buf, key(KeyCode::Char('t'), KeyModifiers::CONTROL)));
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_word_motion() {
        let mut buf = LineBuffer::new("buy oat milk");
        edit_line(&mut buf, key(KeyCode::Left, KeyModifiers::ALT));
        assert_eq!(buf.cursor(), 8);
        edit_line(&mut buf, key(KeyCode::Backspace, KeyModifiers::ALT));
        assert_eq!(buf.text(), "buy milk");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut buf = LineBuffer::new("abc");
        edit_line(&mut buf, key(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(buf.text(), "");
    }
}
