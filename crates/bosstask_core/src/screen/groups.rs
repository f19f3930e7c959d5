//! Manage-groups list, group detail and the new-task composer.

use crate::locale::catalog::localize;
use crate::locale::profile::TextDirection;
use crate::model::task::{GroupId, TaskId};
use crate::repo::preference_repo::PreferenceStore;
use crate::service::app_service::AppCore;
use crate::service::group_service::GroupServiceResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRow {
    pub id: GroupId,
    pub name: String,
    pub task_count: usize,
    pub completed_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManageGroupsScreen {
    pub title: &'static str,
    pub direction: TextDirection,
    pub header: &'static str,
    pub add_group_accessibility_label: &'static str,
    pub rows: Vec<GroupRow>,
}

impl ManageGroupsScreen {
    pub fn build<S: PreferenceStore>(core: &AppCore<S>) -> Self {
        let code = core.language_code();
        Self {
            title: localize(code, "manage_groups_title"),
            direction: TextDirection::for_language(code),
            header: localize(code, "groups_header"),
            add_group_accessibility_label: localize(code, "a11y_add_group"),
            rows: core
                .groups()
                .iter()
                .map(|group| GroupRow {
                    id: group.id,
                    name: group.name.clone(),
                    task_count: group.task_count(),
                    completed_count: group.completed_count(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub icon: &'static str,
    pub strikethrough: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDetailScreen {
    pub group_id: GroupId,
    /// Navigation title is the group name.
    pub title: String,
    pub direction: TextDirection,
    pub tasks_header: &'static str,
    pub rows: Vec<TaskRow>,
    pub input_placeholder: &'static str,
    pub add_button: &'static str,
}

impl GroupDetailScreen {
    /// Returns `None` when the group does not exist.
    pub fn build<S: PreferenceStore>(core: &AppCore<S>, group_id: GroupId) -> Option<Self> {
        let group = core.group(group_id)?;
        let code = core.language_code();

        Some(Self {
            group_id,
            title: group.name.clone(),
            direction: TextDirection::for_language(code),
            tasks_header: localize(code, "tasks_header"),
            rows: group
                .tasks
                .iter()
                .map(|task| TaskRow {
                    id: task.id,
                    title: task.title.clone(),
                    done: task.done,
                    icon: if task.done {
                        "checkmark.circle.fill"
                    } else {
                        "circle"
                    },
                    strikethrough: task.done,
                })
                .collect(),
            input_placeholder: localize(code, "placeholder_new_task"),
            add_button: localize(code, "add_task_button"),
        })
    }
}

/// Input buffer of the group detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskComposer {
    group_id: GroupId,
    input: String,
}

impl TaskComposer {
    pub fn new(group_id: GroupId) -> Self {
        Self {
            group_id,
            input: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the add button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Adds the buffered title; the buffer is cleared only when a task was
    /// actually added.
    pub fn submit<S: PreferenceStore>(
        &mut self,
        core: &mut AppCore<S>,
    ) -> GroupServiceResult<Option<TaskId>> {
        let added = core.add_task(self.group_id, &self.input)?;
        if added.is_some() {
            self.input.clear();
        }
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::{GroupDetailScreen, ManageGroupsScreen, TaskComposer};
    use crate::repo::preference_repo::MemoryPreferenceStore;
    use crate::service::app_service::AppCore;
    use uuid::Uuid;

    #[test]
    fn group_rows_show_task_counts_in_order() {
        let mut core = AppCore::new(MemoryPreferenceStore::new());
        let added = core.add_group();

        let screen = ManageGroupsScreen::build(&core);
        let counts: Vec<_> = screen.rows.iter().map(|row| row.task_count).collect();
        assert_eq!(counts, vec![3, 2, 0]);
        assert_eq!(screen.rows[2].id, added);
        assert_eq!(screen.rows[2].name, "New group");
    }

    #[test]
    fn group_rows_count_completed_tasks() {
        let mut core = AppCore::new(MemoryPreferenceStore::new());
        let group_id = core.groups()[0].id;
        let task_id = core.groups()[0].tasks[1].id;
        core.toggle_task(group_id, task_id).unwrap();

        let screen = ManageGroupsScreen::build(&core);
        assert_eq!(screen.rows[0].completed_count, 1);
        assert_eq!(screen.rows[1].completed_count, 0);
    }

    #[test]
    fn composer_clears_only_after_successful_add() {
        let mut core = AppCore::new(MemoryPreferenceStore::new());
        let group_id = core.groups()[1].id;
        let mut composer = TaskComposer::new(group_id);

        composer.set_input("   ");
        assert!(!composer.can_submit());
        assert_eq!(composer.submit(&mut core).unwrap(), None);
        assert_eq!(composer.input(), "   ");

        composer.set_input("  Buy milk  ");
        assert!(composer.can_submit());
        let task_id = composer.submit(&mut core).unwrap().expect("task added");
        assert_eq!(composer.input(), "");

        let screen = GroupDetailScreen::build(&core, group_id).expect("group exists");
        let last = screen.rows.last().expect("row exists");
        assert_eq!(last.id, task_id);
        assert_eq!(last.title, "Buy milk");
        assert_eq!(last.icon, "circle");
        assert!(!last.strikethrough);
    }

    #[test]
    fn detail_rows_reflect_done_state() {
        let mut core = AppCore::new(MemoryPreferenceStore::new());
        let group_id = core.groups()[0].id;
        let task_id = core.groups()[0].tasks[0].id;
        core.toggle_task(group_id, task_id).unwrap();

        let screen = GroupDetailScreen::build(&core, group_id).expect("group exists");
        assert_eq!(screen.title, "Personal");
        assert!(screen.rows[0].strikethrough);
        assert_eq!(screen.rows[0].icon, "checkmark.circle.fill");
        assert!(GroupDetailScreen::build(&core, Uuid::new_v4()).is_none());
    }
}
