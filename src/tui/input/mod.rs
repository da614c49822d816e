mod add;
mod common;
mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

// Submodules reach each other's handlers through `use super::*;`
#[allow(unused_imports)]
use add::*;
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Alert => handle_alert(app, key),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Goes to whichever text field has focus; ignored otherwise.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() || app.show_help {
        return;
    }
    match app.mode {
        Mode::Add => app.input.insert_str(text),
        Mode::Edit => {
            if let Some(draft) = app.focused_editor().and_then(|e| e.draft_mut()) {
                draft.insert_str(text);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Config;
    use crate::ops::task_ops::TaskList;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn empty_app() -> App {
        App::new(TaskList::new(), &Config::default())
    }

    #[test]
    fn test_type_and_add() {
        let mut app = empty_app();
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].title, "Buy milk");
        assert_eq!(app.mode, Mode::Add);
    }

    #[test]
    fn test_duplicate_alert_then_dismiss() {
        let mut app = empty_app();
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Alert);
        // Typing does nothing while the alert is up
        type_str(&mut app, "x");
        assert_eq!(app.input.text(), "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Add);
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_navigate_toggle_edit_remove() {
        let mut app = empty_app();
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.tasks.tasks()[0].done);

        handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Edit);
        // Move left over "milk", insert "oat "
        for _ in 0..4 {
            handle_key(&mut app, key(KeyCode::Left));
        }
        type_str(&mut app, "oat ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tasks.tasks()[0].title, "Buy oat milk");
        assert!(app.tasks.tasks()[0].done);

        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.mode, Mode::Confirm);
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.tasks.len(), 1);
        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_edit_escape_cancels() {
        let mut app = empty_app();
        type_str(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('e')));
        type_str(&mut app, "bc");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks.tasks()[0].title, "a");
    }

    #[test]
    fn test_edit_mode_toggle_and_remove_shortcuts() {
        let mut app = empty_app();
        type_str(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Char('e')));

        handle_key(&mut app, ctrl('t'));
        assert!(app.tasks.tasks()[0].done);
        assert_eq!(app.mode, Mode::Edit);

        handle_key(&mut app, ctrl('r'));
        assert_eq!(app.mode, Mode::Confirm);
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert!(app.tasks.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = empty_app();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_in_add_mode() {
        let mut app = empty_app();
        type_str(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.input.text(), "q");
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let mut app = empty_app();
        handle_paste(&mut app, "line one\nline two");
        assert_eq!(app.input.text(), "line one line two");

        app.mode = Mode::Navigate;
        handle_paste(&mut app, "ignored");
        assert_eq!(app.input.text(), "line one line two");
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = empty_app();
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Navigate);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }
}
