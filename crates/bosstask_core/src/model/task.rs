//! Task and group records.
//!
//! # Responsibility
//! - Define the task/group shapes rendered by list and detail screens.
//! - Own the title normalization rule applied before a task is created.
//!
//! # Invariants
//! - `id` is stable and never reused for another task or group.
//! - New tasks always start in the pending state (`done == false`).
//! - `TaskGroup::tasks` is kept in insertion order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Stable identifier for a group.
pub type GroupId = Uuid;

/// Two-state task lifecycle driven by toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Pending,
    Done,
}

/// Titled unit of work with a binary completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl TaskItem {
    /// Creates a pending task with a generated ID.
    ///
    /// The title is stored as given; callers that accept user input should
    /// go through [`normalize_title`] first.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a pending task with a caller-provided ID.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Flips `done` and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    pub fn state(&self) -> TaskState {
        if self.done {
            TaskState::Done
        } else {
            TaskState::Pending
        }
    }
}

/// Named container that exclusively owns an ordered task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub id: GroupId,
    pub name: String,
    pub tasks: Vec<TaskItem>,
}

impl TaskGroup {
    /// Creates a group with a generated ID.
    pub fn new(name: impl Into<String>, tasks: Vec<TaskItem>) -> Self {
        Self::with_id(Uuid::new_v4(), name, tasks)
    }

    /// Creates a group with a caller-provided ID.
    pub fn with_id(id: GroupId, name: impl Into<String>, tasks: Vec<TaskItem>) -> Self {
        Self {
            id,
            name: name.into(),
            tasks,
        }
    }

    pub fn task(&self, task_id: TaskId) -> Option<&TaskItem> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: TaskId) -> Option<&mut TaskItem> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }

    /// Appends one task to the end of the list and returns its ID.
    pub fn push_task(&mut self, task: TaskItem) -> TaskId {
        let id = task.id;
        self.tasks.push(task);
        id
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of tasks currently in the done state.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }
}

/// Trims surrounding whitespace and newlines from user-entered title text.
///
/// Returns `None` when nothing remains, which callers treat as a silent
/// rejection rather than an error.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_title, TaskGroup, TaskItem, TaskState};

    #[test]
    fn normalize_title_trims_and_rejects_blank_input() {
        assert_eq!(normalize_title("  Buy milk \n"), Some("Buy milk".to_string()));
        assert_eq!(normalize_title(""), None);
        assert_eq!(normalize_title(" \t\r\n "), None);
    }

    #[test]
    fn toggle_moves_between_pending_and_done() {
        let mut task = TaskItem::new("write report");
        assert_eq!(task.state(), TaskState::Pending);

        assert!(task.toggle());
        assert_eq!(task.state(), TaskState::Done);

        assert!(!task.toggle());
        assert_eq!(task.state(), TaskState::Pending);
    }

    #[test]
    fn completed_count_tracks_done_flags() {
        let mut group = TaskGroup::new("errands", vec![TaskItem::new("a"), TaskItem::new("b")]);
        let first = group.tasks[0].id;
        group.task_mut(first).expect("first task exists").toggle();

        assert_eq!(group.task_count(), 2);
        assert_eq!(group.completed_count(), 1);
    }
}
