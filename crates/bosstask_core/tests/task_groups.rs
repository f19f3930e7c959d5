use bosstask_core::model::sample::sample_groups;
use bosstask_core::{AppCore, GroupServiceError, MemoryPreferenceStore, TaskItem, TaskState};
use uuid::Uuid;

fn core() -> AppCore<MemoryPreferenceStore> {
    AppCore::new(MemoryPreferenceStore::new())
}

#[test]
fn blank_titles_leave_task_list_unchanged() {
    let mut core = core();
    let group_id = core.groups()[0].id;
    let before = core.group(group_id).unwrap().task_count();

    for title in ["", "   ", "\n\t"] {
        assert_eq!(core.add_task(group_id, title).unwrap(), None);
    }

    assert_eq!(core.group(group_id).unwrap().task_count(), before);
    assert_eq!(core.revision(), 0);
}

#[test]
fn add_task_trims_title_and_appends_pending_task() {
    let mut core = core();
    let group_id = core.groups()[1].id;
    let before = core.group(group_id).unwrap().task_count();

    let task_id = core.add_task(group_id, "  Buy milk  ").unwrap().unwrap();

    let group = core.group(group_id).unwrap();
    assert_eq!(group.task_count(), before + 1);
    let last = group.tasks.last().unwrap();
    assert_eq!(last.id, task_id);
    assert_eq!(last.title, "Buy milk");
    assert!(!last.done);
}

#[test]
fn duplicate_titles_are_allowed_and_order_is_preserved() {
    let mut core = core();
    let group_id = core.add_group();

    let first = core.add_task(group_id, "standup").unwrap().unwrap();
    let second = core.add_task(group_id, "standup").unwrap().unwrap();

    let ids: Vec<_> = core.group(group_id).unwrap().tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn double_toggle_restores_original_state_without_touching_siblings() {
    let mut core = core();
    let group = core.groups()[0].clone();
    let target = group.tasks[1].id;

    assert!(core.toggle_task(group.id, target).unwrap());
    assert!(!core.toggle_task(group.id, target).unwrap());

    assert_eq!(core.group(group.id).unwrap(), &group);
}

#[test]
fn add_group_appends_one_empty_group() {
    let mut core = core();
    let before = core.groups().len();

    let group_id = core.add_group();

    assert_eq!(core.groups().len(), before + 1);
    let added = core.groups().last().unwrap();
    assert_eq!(added.id, group_id);
    assert!(added.tasks.is_empty());
    assert!(!added.name.trim().is_empty());
}

#[test]
fn unknown_ids_are_reported_not_panicked() {
    let mut core = core();
    let missing_group = Uuid::new_v4();
    let group_id = core.groups()[0].id;
    let missing_task = Uuid::new_v4();

    assert_eq!(
        core.add_task(missing_group, "x"),
        Err(GroupServiceError::GroupNotFound(missing_group))
    );
    assert_eq!(
        core.toggle_task(group_id, missing_task),
        Err(GroupServiceError::TaskNotFound {
            group_id,
            task_id: missing_task
        })
    );
}

#[test]
fn seed_data_has_named_groups_and_titled_tasks() {
    for code in ["en", "fr-CA", "zh-HK", "ar", "unknown"] {
        let groups = sample_groups(code);
        assert!(!groups.is_empty());
        assert!(groups.iter().any(|group| !group.tasks.is_empty()));
        for group in &groups {
            assert!(!group.name.trim().is_empty(), "{code}: empty group name");
            for task in &group.tasks {
                assert!(!task.title.trim().is_empty(), "{code}: empty task title");
            }
        }
    }
}

#[test]
fn task_item_serializes_expected_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = TaskItem::with_id(id, "Call mom");
    task.toggle();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Call mom");
    assert_eq!(json["done"], true);
    assert_eq!(serde_json::to_value(task.state()).unwrap(), "done");

    let missing_done = serde_json::json!({ "id": id.to_string(), "title": "Read" });
    let decoded: TaskItem = serde_json::from_value(missing_done).unwrap();
    assert_eq!(decoded.state(), TaskState::Pending);
}
