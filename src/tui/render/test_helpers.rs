use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::{Position, Rect};

use crate::model::Config;
use crate::ops::task_ops::TaskList;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render through a terminal and return where the frame put the cursor,
/// or `None` when nothing took focus.
pub fn cursor_after_render<F>(w: u16, h: u16, f: F) -> Option<Position>
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    // Bottom-right cell of the status row; no widget focuses it
    let parked = Position::new(w - 1, h - 1);
    terminal.set_cursor_position(parked).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    let pos = terminal.get_cursor_position().unwrap();
    (pos != parked).then_some(pos)
}

/// Build an App whose list holds `titles`, in order.
pub fn app_with(titles: &[&str]) -> App {
    let mut tasks = TaskList::new();
    for title in titles {
        tasks.add_task(title).unwrap();
    }
    App::new(tasks, &Config::default())
}
