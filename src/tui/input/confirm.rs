use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_ops::Confirmation;
use crate::tui::app::App;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => app.answer_removal(Confirmation::Yes),
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.answer_removal(Confirmation::No);
        }
        _ => {}
    }
}

/// The alert has one action: dismiss
pub(super) fn handle_alert(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_alert();
    }
}
