//! Group/task list use-cases.
//!
//! # Responsibility
//! - Own the ordered in-memory group collection for the app run.
//! - Apply add-group, add-task and toggle-task mutations.
//!
//! # Invariants
//! - Groups and tasks are only appended; nothing is renamed, removed or
//!   reordered.
//! - Blank task titles are dropped silently (`Ok(None)`).
//! - Log lines carry IDs and lengths, never names or titles.

use crate::model::sample::sample_groups;
use crate::model::task::{normalize_title, GroupId, TaskGroup, TaskId, TaskItem};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GroupServiceResult<T> = Result<T, GroupServiceError>;

/// Lookup failures for group/task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupServiceError {
    GroupNotFound(GroupId),
    TaskNotFound { group_id: GroupId, task_id: TaskId },
}

impl Display for GroupServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupNotFound(id) => write!(f, "group not found: {id}"),
            Self::TaskNotFound { group_id, task_id } => {
                write!(f, "task not found: {task_id} (group {group_id})")
            }
        }
    }
}

impl Error for GroupServiceError {}

/// In-memory group collection.
#[derive(Debug, Clone, Default)]
pub struct GroupService {
    groups: Vec<TaskGroup>,
}

impl GroupService {
    pub fn new(groups: Vec<TaskGroup>) -> Self {
        Self { groups }
    }

    /// Collection seeded with the demo groups localized for `language_code`.
    pub fn seeded(language_code: &str) -> Self {
        let groups = sample_groups(language_code);
        info!(
            "event=groups_seed module=service status=ok groups={} code={}",
            groups.len(),
            language_code
        );
        Self::new(groups)
    }

    pub fn groups(&self) -> &[TaskGroup] {
        &self.groups
    }

    pub fn group(&self, group_id: GroupId) -> Option<&TaskGroup> {
        self.groups.iter().find(|group| group.id == group_id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Appends an empty group named `name` and returns its ID.
    pub fn add_group(&mut self, name: impl Into<String>) -> GroupId {
        let group = TaskGroup::new(name, Vec::new());
        let id = group.id;
        self.groups.push(group);
        info!(
            "event=group_add module=service status=ok group_id={} groups={}",
            id,
            self.groups.len()
        );
        id
    }

    /// Appends a pending task with the trimmed `title` to a group.
    ///
    /// Returns `Ok(None)` without touching the group when the trimmed title
    /// is empty.
    ///
    /// # Errors
    /// - `GroupNotFound` when `group_id` is unknown, checked before the title.
    pub fn add_task(&mut self, group_id: GroupId, title: &str) -> GroupServiceResult<Option<TaskId>> {
        let group = self.group_mut(group_id)?;
        let Some(title) = normalize_title(title) else {
            debug!("event=task_add module=service status=noop group_id={group_id} reason=blank_title");
            return Ok(None);
        };

        let title_len = title.chars().count();
        let task_id = group.push_task(TaskItem::new(title));
        info!(
            "event=task_add module=service status=ok group_id={} task_id={} title_len={} tasks={}",
            group_id,
            task_id,
            title_len,
            group.task_count()
        );
        Ok(Some(task_id))
    }

    /// Flips one task's `done` flag and returns the new value.
    ///
    /// # Errors
    /// - `GroupNotFound` / `TaskNotFound` for unknown IDs.
    pub fn toggle_task(&mut self, group_id: GroupId, task_id: TaskId) -> GroupServiceResult<bool> {
        let group = self.group_mut(group_id)?;
        let task = group
            .task_mut(task_id)
            .ok_or(GroupServiceError::TaskNotFound { group_id, task_id })?;
        let done = task.toggle();
        info!(
            "event=task_toggle module=service status=ok group_id={} task_id={} done={}",
            group_id, task_id, done
        );
        Ok(done)
    }

    fn group_mut(&mut self, group_id: GroupId) -> GroupServiceResult<&mut TaskGroup> {
        self.groups
            .iter_mut()
            .find(|group| group.id == group_id)
            .ok_or(GroupServiceError::GroupNotFound(group_id))
    }
}
