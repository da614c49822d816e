use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Esc | KeyCode::Tab => app.mode = Mode::Navigate,
        _ => {
            edit_line(&mut app.input, key);
        }
    }
}
