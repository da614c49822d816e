use crate::model::task::{Task, TaskId};
use crate::ops::line_buffer::LineBuffer;

/// Whether a row is showing its title or editing a draft of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

/// A committed draft, to be applied with `TaskList::edit_task`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub id: TaskId,
    pub title: String,
}

/// Per-row edit state. Owns the draft title; never touches the task list.
#[derive(Debug, Clone)]
pub struct RowEditor {
    task_id: TaskId,
    mode: RowMode,
    draft: LineBuffer,
}

impl RowEditor {
    pub fn new(task: &Task) -> Self {
        RowEditor {
            task_id: task.id,
            mode: RowMode::Viewing,
            draft: LineBuffer::new(task.title.clone()),
        }
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    /// The host should put input focus in this row exactly while this is true
    pub fn has_focus(&self) -> bool {
        self.is_editing()
    }

    pub fn draft(&self) -> &LineBuffer {
        &self.draft
    }

    /// Draft access for keystrokes; `None` unless editing
    pub fn draft_mut(&mut self) -> Option<&mut LineBuffer> {
        match self.mode {
            RowMode::Editing => Some(&mut self.draft),
            RowMode::Viewing => None,
        }
    }

    pub fn start_edit(&mut self) {
        if self.mode == RowMode::Viewing {
            self.mode = RowMode::Editing;
            self.draft.move_end();
        }
    }

    /// Drop in-progress changes: the draft goes back to the task's current title
    pub fn cancel(&mut self, task: &Task) {
        self.draft.set(task.title.clone());
        self.mode = RowMode::Viewing;
    }

    /// Leave edit mode, handing back the draft to commit. Returns `None` when
    /// the row was not being edited.
    pub fn submit(&mut self) -> Option<EditRequest> {
        if self.mode != RowMode::Editing {
            return None;
        }
        self.mode = RowMode::Viewing;
        Some(EditRequest {
            id: self.task_id,
            title: self.draft.text().to_string(),
        })
    }

    /// Keep a resting draft in step with the task's title (e.g. after a
    /// commit was applied). Drafts being edited are left alone.
    pub fn sync(&mut self, task: &Task) {
        if self.mode == RowMode::Viewing && self.draft.text() != task.title {
            self.draft.set(task.title.clone());
        }
    }
}
