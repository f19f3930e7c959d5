//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single process-wide `AppCore` instance.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - IDs cross the boundary as UUID strings; malformed IDs yield a failure
//!   envelope instead of an error type.

use bosstask_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, locale_snapshot as locale_snapshot_inner,
    picker_language_options, ping as ping_inner, settings_language_options, AppCore,
    MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore,
};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

const PREFS_DB_FILE_NAME: &str = "bosstask_prefs.sqlite3";
const PREFS_PATH_ENV: &str = "BOSSTASK_PREFS_PATH";

type SharedStore = Box<dyn PreferenceStore + Send>;

static APP: Lazy<Mutex<AppCore<SharedStore>>> =
    Lazy::new(|| Mutex::new(AppCore::new(open_store())));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Level the host should pass to [`init_logging`] when it has no override:
/// `debug` in debug builds, `info` in release builds.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// One selectable language row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageItem {
    pub code: String,
    pub label: String,
    pub flag: String,
    /// Whether this row matches the stored language code.
    pub selected: bool,
}

/// Locale decisions and formatted values for the current language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSnapshotResponse {
    pub code: String,
    pub is_rtl: bool,
    pub background_asset: String,
    /// `system|blue|red|green`.
    pub accent: String,
    pub today: String,
    pub time: String,
    pub sample_amount: String,
}

/// Group list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupItem {
    pub group_id: String,
    pub name: String,
    pub task_count: u32,
    pub completed_count: u32,
}

/// Task row inside a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListItem {
    pub task_id: String,
    pub title: String,
    pub done: bool,
}

/// Detail envelope for one group's tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTasksResponse {
    pub ok: bool,
    pub group_name: String,
    pub items: Vec<TaskListItem>,
    pub message: String,
}

/// Generic action response envelope for mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the request was valid and applied (or a silent no-op).
    pub ok: bool,
    /// Created entity ID, when one was created.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl ActionResponse {
    fn created(message: impl Into<String>, id: Uuid) -> Self {
        Self {
            ok: true,
            id: Some(id.to_string()),
            message: message.into(),
        }
    }

    fn applied(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Returns the stored language code.
#[flutter_rust_bridge::frb(sync)]
pub fn app_language() -> String {
    lock_app().language_code().to_string()
}

/// Stores `code` verbatim as the app language.
#[flutter_rust_bridge::frb(sync)]
pub fn set_app_language(code: String) -> ActionResponse {
    let change = lock_app().set_language(&code);
    ActionResponse::applied(format!("Language set to `{}`.", change.current))
}

/// Restores `en` as the app language.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_app_language() -> ActionResponse {
    lock_app().reset_language();
    ActionResponse::applied("Language reset.")
}

/// Lists languages for the quick-switch picker or the settings screen.
#[flutter_rust_bridge::frb(sync)]
pub fn language_options(for_settings: bool) -> Vec<LanguageItem> {
    let current = app_language();
    let options = if for_settings {
        settings_language_options()
    } else {
        picker_language_options()
    };
    options
        .into_iter()
        .map(|option| LanguageItem {
            code: option.code.to_string(),
            label: option.label.to_string(),
            flag: option.flag.to_string(),
            selected: option.code == current,
        })
        .collect()
}

/// Returns direction, theme and formatted values for the current language.
#[flutter_rust_bridge::frb(sync)]
pub fn locale_snapshot() -> LocaleSnapshotResponse {
    let profile = lock_app().locale_profile();
    let values = locale_snapshot_inner(&profile.code);
    LocaleSnapshotResponse {
        is_rtl: profile.is_rtl(),
        background_asset: profile.background_asset.to_string(),
        accent: profile.accent.as_str().to_string(),
        code: profile.code,
        today: values.today,
        time: values.time,
        sample_amount: values.sample_amount,
    }
}

/// Lists groups in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_groups() -> Vec<GroupItem> {
    lock_app()
        .groups()
        .iter()
        .map(|group| GroupItem {
            group_id: group.id.to_string(),
            name: group.name.clone(),
            task_count: u32::try_from(group.task_count()).unwrap_or(u32::MAX),
            completed_count: u32::try_from(group.completed_count()).unwrap_or(u32::MAX),
        })
        .collect()
}

/// Lists one group's tasks in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn group_tasks(group_id: String) -> GroupTasksResponse {
    let failure = |message: String| GroupTasksResponse {
        ok: false,
        group_name: String::new(),
        items: Vec::new(),
        message,
    };

    let group_id = match parse_id("group_id", &group_id) {
        Ok(id) => id,
        Err(message) => return failure(message),
    };
    let app = lock_app();
    let Some(group) = app.group(group_id) else {
        return failure(format!("group_tasks failed: group not found: {group_id}"));
    };

    GroupTasksResponse {
        ok: true,
        group_name: group.name.clone(),
        items: group
            .tasks
            .iter()
            .map(|task| TaskListItem {
                task_id: task.id.to_string(),
                title: task.title.clone(),
                done: task.done,
            })
            .collect(),
        message: format!("Found {} task(s).", group.task_count()),
    }
}

/// Appends a group with the localized default name.
#[flutter_rust_bridge::frb(sync)]
pub fn add_group() -> ActionResponse {
    let group_id = lock_app().add_group();
    ActionResponse::created("Group created.", group_id)
}

/// Appends a task; blank titles are accepted as a no-op with `id = None`.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(group_id: String, title: String) -> ActionResponse {
    let group_id = match parse_id("group_id", &group_id) {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    match lock_app().add_task(group_id, &title) {
        Ok(Some(task_id)) => ActionResponse::created("Task created.", task_id),
        Ok(None) => ActionResponse::applied("Blank title ignored."),
        Err(err) => ActionResponse::failure(format!("add_task failed: {err}")),
    }
}

/// Flips a task's done flag.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(group_id: String, task_id: String) -> ActionResponse {
    let ids = parse_id("group_id", &group_id)
        .and_then(|group_id| Ok((group_id, parse_id("task_id", &task_id)?)));
    let (group_id, task_id) = match ids {
        Ok(ids) => ids,
        Err(message) => return ActionResponse::failure(message),
    };
    match lock_app().toggle_task(group_id, task_id) {
        Ok(done) => ActionResponse::applied(if done { "Task done." } else { "Task pending." }),
        Err(err) => ActionResponse::failure(format!("toggle_task failed: {err}")),
    }
}

/// Number of state changes since startup; the shell re-renders when it moves.
#[flutter_rust_bridge::frb(sync)]
pub fn state_revision() -> u64 {
    lock_app().revision()
}

fn lock_app() -> MutexGuard<'static, AppCore<SharedStore>> {
    // A panic while holding the lock leaves plain data behind; keep serving it.
    APP.lock().unwrap_or_else(PoisonError::into_inner)
}

fn parse_id(field: &str, raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid {field} `{raw}`: {err}"))
}

fn resolve_prefs_path() -> PathBuf {
    if let Ok(raw) = std::env::var(PREFS_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(PREFS_DB_FILE_NAME)
}

fn open_store() -> SharedStore {
    let path = resolve_prefs_path();
    match SqlitePreferenceStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!(
                "event=prefs_open module=ffi status=error fallback=memory path={} error={}",
                path.display(),
                err
            );
            Box::new(MemoryPreferenceStore::new())
        }
    }
}
