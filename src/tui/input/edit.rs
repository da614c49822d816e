use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::*;

/// Keys while a row's title is being edited
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(id) = app.editing else {
        app.cancel_edit();
        return;
    };
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => app.submit_edit(),
        (_, KeyCode::Esc) => app.cancel_edit(),
        // Toggle and remove stay available mid-edit
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => app.toggle_task(id),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => app.request_removal(id),
        _ => {
            if let Some(draft) = app.focused_editor().and_then(|e| e.draft_mut()) {
                edit_line(draft, key);
            }
        }
    }
}
