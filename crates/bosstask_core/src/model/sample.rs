//! Demo groups used as the initial group collection.

use crate::locale::catalog::localize;
use crate::model::task::{TaskGroup, TaskItem};

const SAMPLE_LAYOUT: &[(&str, &[&str])] = &[
    (
        "demo_group_personal",
        &[
            "demo_task_buy_groceries",
            "demo_task_call_mom",
            "demo_task_read",
        ],
    ),
    (
        "demo_group_work",
        &["demo_task_review_prs", "demo_task_standup"],
    ),
];

/// Builds the seed groups with names and titles localized for `language_code`.
///
/// Every call generates fresh IDs; callers seed once and keep the result.
pub fn sample_groups(language_code: &str) -> Vec<TaskGroup> {
    SAMPLE_LAYOUT
        .iter()
        .map(|(group_key, task_keys)| {
            let tasks = task_keys
                .iter()
                .map(|key| TaskItem::new(localize(language_code, key)))
                .collect();
            TaskGroup::new(localize(language_code, group_key), tasks)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sample_groups;

    #[test]
    fn sample_groups_are_localized_per_language() {
        let english = sample_groups("en");
        let french = sample_groups("fr-CA");

        assert_eq!(english.len(), french.len());
        assert_ne!(english[0].name, french[0].name);
        assert_eq!(english[0].task_count(), 3);
        assert_eq!(english[1].task_count(), 2);
    }

    #[test]
    fn sample_tasks_start_pending() {
        let groups = sample_groups("zh-HK");
        assert!(groups
            .iter()
            .flat_map(|group| group.tasks.iter())
            .all(|task| !task.done));
    }
}
