use std::rc::Rc;

use chrono::Utc;
use tracing::{debug, info};

use crate::model::task::{Task, TaskId};

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("a task titled \"{0}\" already exists")]
    DuplicateTitle(String),
}

/// Answer to the "remove this item?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

/// Hands out strictly increasing ids based on the wall clock (milliseconds)
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn next_id(&mut self) -> TaskId {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        TaskId(self.last)
    }
}

/// The screen's task collection and its mutation handlers.
///
/// The sequence is held as an immutable snapshot. Successful mutations build
/// a new sequence and swap it in, so a snapshot handed out earlier keeps
/// showing what was rendered from it. Operations that change nothing keep
/// the current snapshot.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Rc<[Task]>,
    ids: IdGenerator,
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        TaskList {
            tasks: Rc::from(Vec::<Task>::new()),
            ids: IdGenerator::default(),
        }
    }

    /// Current sequence, in display order
    pub fn snapshot(&self) -> Rc<[Task]> {
        Rc::clone(&self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a new task. Fails without touching the list when a task with
    /// exactly this title already exists.
    pub fn add_task(&mut self, title: &str) -> Result<TaskId, TaskError> {
        if self.tasks.iter().any(|t| t.title == title) {
            info!(title, "rejected duplicate task title");
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }
        let task = Task::new(self.ids.next_id(), title);
        let id = task.id;
        let mut next = self.tasks.to_vec();
        next.push(task);
        self.tasks = next.into();
        debug!(%id, title, count = self.tasks.len(), "added task");
        Ok(id)
    }

    /// Flip the done flag. Unknown ids are ignored. Returns whether the list changed.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let changed = self.replace_with(id, |task| task.done = !task.done);
        if changed {
            debug!(%id, "toggled task");
        }
        changed
    }

    /// Rename a task. Title uniqueness is not checked here. Unknown ids are
    /// ignored. Returns whether the list changed.
    pub fn edit_task(&mut self, id: TaskId, new_title: &str) -> bool {
        let changed = self.replace_with(id, |task| task.title = new_title.to_string());
        if changed {
            debug!(%id, title = new_title, "renamed task");
        }
        changed
    }

    /// Remove a task once the user has answered the removal prompt.
    /// `Confirmation::No` and unknown ids leave the list as it was.
    pub fn remove_task(&mut self, id: TaskId, answer: Confirmation) -> bool {
        if answer == Confirmation::No {
            debug!(%id, "removal cancelled");
            return false;
        }
        if self.position(id).is_none() {
            return false;
        }
        let next: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.tasks = next.into();
        debug!(%id, count = self.tasks.len(), "removed task");
        true
    }

    /// Copy the sequence with `f` applied to the task matching `id`, then swap it in.
    fn replace_with(&mut self, id: TaskId, f: impl FnOnce(&mut Task)) -> bool {
        let idx = match self.position(id) {
            Some(i) => i,
            None => return false,
        };
        let mut next = self.tasks.to_vec();
        f(&mut next[idx]);
        self.tasks = next.into();
        true
    }
}
