use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{Config, Task, TaskId};
use crate::ops::line_buffer::LineBuffer;
use crate::ops::row_editor::RowEditor;
use crate::ops::task_ops::{Confirmation, TaskError, TaskList};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Cursor on the list
    Navigate,
    /// Typing into the add-task input
    Add,
    /// Editing the title of `App::editing`
    Edit,
    /// Waiting for a yes/no on a removal
    Confirm,
    /// Showing an informational popup
    Alert,
}

/// A removal waiting on the user's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub task_id: TaskId,
    pub title: String,
    /// Mode to go back to when the answer is "no"
    pub return_mode: Mode,
}

/// Informational popup with a single dismiss action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub return_mode: Mode,
}

impl Alert {
    pub fn duplicate_title() -> Self {
        Alert {
            title: "Task already exists".into(),
            message: "You cannot add a task with the same name".into(),
            return_mode: Mode::Add,
        }
    }
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    /// Per-row edit state, created on first use
    pub editors: HashMap<TaskId, RowEditor>,
    /// The add-task input
    pub input: LineBuffer,
    pub mode: Mode,
    /// Row currently being edited (Edit mode)
    pub editing: Option<TaskId>,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub pending_removal: Option<PendingRemoval>,
    pub alert: Option<Alert>,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(tasks: TaskList, config: &Config) -> Self {
        let mode = if tasks.is_empty() {
            Mode::Add
        } else {
            Mode::Navigate
        };
        App {
            tasks,
            editors: HashMap::new(),
            input: LineBuffer::default(),
            mode,
            editing: None,
            cursor: 0,
            scroll_offset: 0,
            pending_removal: None,
            alert: None,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            status_message: None,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
        }
    }

    /// The task under the list cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        self.tasks.tasks().get(self.cursor)
    }

    /// Header text bound to the task count
    pub fn counter_label(&self) -> String {
        match self.tasks.len() {
            1 => "You have 1 task".to_string(),
            n => format!("You have {} tasks", n),
        }
    }

    /// Row editor for a task, created from the task on first use
    pub fn editor(&mut self, id: TaskId) -> Option<&mut RowEditor> {
        let task = self.tasks.get(id)?;
        Some(
            self.editors
                .entry(id)
                .or_insert_with(|| RowEditor::new(task)),
        )
    }

    /// The editor that currently owns input focus
    pub fn focused_editor(&mut self) -> Option<&mut RowEditor> {
        let id = self.editing?;
        self.editors.get_mut(&id).filter(|e| e.has_focus())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.tasks.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    /// Add the input's text as a new task. Blank input is ignored; on a
    /// duplicate title the input is kept and an alert is raised.
    pub fn submit_new_task(&mut self) {
        if self.input.is_blank() {
            return;
        }
        match self.tasks.add_task(self.input.text()) {
            Ok(_) => {
                self.input.clear();
                self.cursor = self.tasks.len() - 1;
                self.after_change();
            }
            Err(TaskError::DuplicateTitle(_)) => {
                self.alert = Some(Alert::duplicate_title());
                self.mode = Mode::Alert;
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        let return_mode = self
            .alert
            .take()
            .map_or(Mode::Navigate, |alert| alert.return_mode);
        self.mode = return_mode;
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        if self.tasks.toggle_done(id) {
            self.after_change();
        }
    }

    /// Ask before removing a task. Unknown ids are ignored.
    pub fn request_removal(&mut self, id: TaskId) {
        let Some(task) = self.tasks.get(id) else {
            return;
        };
        self.pending_removal = Some(PendingRemoval {
            task_id: id,
            title: task.title.clone(),
            return_mode: self.mode,
        });
        self.mode = Mode::Confirm;
    }

    /// Apply the answer to the pending removal prompt
    pub fn answer_removal(&mut self, answer: Confirmation) {
        let Some(pending) = self.pending_removal.take() else {
            self.mode = Mode::Navigate;
            return;
        };
        let removed = self.tasks.remove_task(pending.task_id, answer);
        if removed {
            self.status_message = Some(format!("removed \"{}\"", pending.title));
            if self.editing == Some(pending.task_id) {
                self.editing = None;
                self.mode = Mode::Navigate;
            } else {
                self.mode = pending.return_mode;
            }
            self.after_change();
        } else {
            self.mode = pending.return_mode;
        }
    }

    pub fn start_edit(&mut self, id: TaskId) {
        let Some(editor) = self.editor(id) else {
            return;
        };
        editor.start_edit();
        debug!(%id, "editing task title");
        self.editing = Some(id);
        self.mode = Mode::Edit;
    }

    /// Commit the focused row's draft and go back to the list
    pub fn submit_edit(&mut self) {
        let request = self
            .editing
            .take()
            .and_then(|id| self.editors.get_mut(&id))
            .and_then(|editor| editor.submit());
        self.mode = Mode::Navigate;
        if let Some(request) = request
            && self.tasks.edit_task(request.id, &request.title)
        {
            self.after_change();
        }
    }

    /// Throw away the focused row's draft and go back to the list
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take()
            && let (Some(editor), Some(task)) = (self.editors.get_mut(&id), self.tasks.get(id))
        {
            editor.cancel(task);
        }
        self.mode = Mode::Navigate;
    }

    /// Reconcile per-row state with the task list after it changed
    fn after_change(&mut self) {
        let tasks = &self.tasks;
        self.editors.retain(|id, _| tasks.get(*id).is_some());
        for (id, editor) in self.editors.iter_mut() {
            if let Some(task) = tasks.get(*id) {
                editor.sync(task);
            }
        }
        if self.editing.is_some_and(|id| tasks.get(id).is_none()) {
            self.editing = None;
        }
        self.move_cursor(0);
    }
}

/// Run the TUI application
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if anything panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!(tasks = app.tasks.len(), "screen opened");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.tasks.len(), "screen closed");

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
