use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor movement
        (_, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (_, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.tasks.len().saturating_sub(1);
        }

        // Focus the add input
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab) => {
            app.mode = Mode::Add;
        }

        // Row actions
        (_, KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter) => {
            if let Some(id) = app.cursor_task().map(|t| t.id) {
                app.toggle_task(id);
            }
        }
        (_, KeyCode::Char('e')) => {
            if let Some(id) = app.cursor_task().map(|t| t.id) {
                app.start_edit(id);
            }
        }
        (_, KeyCode::Char('d') | KeyCode::Delete) => {
            if let Some(id) = app.cursor_task().map(|t| t.id) {
                app.request_removal(id);
            }
        }
        _ => {}
    }
}
