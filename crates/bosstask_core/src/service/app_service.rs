//! App-level facade consumed by screens and FFI.
//!
//! # Responsibility
//! - Combine the language preference, group collection and change bus.
//! - Publish one [`StateChange`] after each successful write.
//!
//! # Invariants
//! - Seed groups are generated once, in `new`, and never regenerated.
//! - Silent no-ops (blank task title) publish nothing.

use crate::locale::catalog::localize;
use crate::locale::profile::LocaleProfile;
use crate::model::task::{GroupId, TaskGroup, TaskId};
use crate::repo::preference_repo::PreferenceStore;
use crate::service::group_service::{GroupService, GroupServiceResult};
use crate::service::language_service::{LanguageChange, LanguageService};
use crate::service::observer::{ChangeBus, StateChange, SubscriptionId};

/// Observable app state: selected language plus the group collection.
pub struct AppCore<S: PreferenceStore> {
    language: LanguageService<S>,
    groups: GroupService,
    bus: ChangeBus,
}

impl<S: PreferenceStore> AppCore<S> {
    /// Loads the stored language and seeds demo groups in that language.
    pub fn new(store: S) -> Self {
        let language = LanguageService::load(store);
        let groups = GroupService::seeded(language.current());
        Self {
            language,
            groups,
            bus: ChangeBus::new(),
        }
    }

    pub fn language_code(&self) -> &str {
        self.language.current()
    }

    pub fn locale_profile(&self) -> LocaleProfile {
        LocaleProfile::for_code(self.language.current())
    }

    /// Catalog text for `key` in the selected language.
    pub fn localize<'a>(&self, key: &'a str) -> &'a str {
        localize(self.language.current(), key)
    }

    pub fn groups(&self) -> &[TaskGroup] {
        self.groups.groups()
    }

    pub fn group(&self, group_id: GroupId) -> Option<&TaskGroup> {
        self.groups.group(group_id)
    }

    pub fn preference_store(&self) -> &S {
        self.language.store()
    }

    pub fn set_language(&mut self, code: &str) -> LanguageChange {
        let change = self.language.set_language(code);
        self.publish_language(&change);
        change
    }

    pub fn reset_language(&mut self) -> LanguageChange {
        let change = self.language.reset();
        self.publish_language(&change);
        change
    }

    /// Appends an empty group named with the localized default name.
    pub fn add_group(&mut self) -> GroupId {
        let name = localize(self.language.current(), "new_group_default_name");
        let group_id = self.groups.add_group(name);
        self.bus.publish(&StateChange::GroupAdded { group_id });
        group_id
    }

    pub fn add_task(&mut self, group_id: GroupId, title: &str) -> GroupServiceResult<Option<TaskId>> {
        let added = self.groups.add_task(group_id, title)?;
        if let Some(task_id) = added {
            self.bus.publish(&StateChange::TaskAdded { group_id, task_id });
        }
        Ok(added)
    }

    pub fn toggle_task(&mut self, group_id: GroupId, task_id: TaskId) -> GroupServiceResult<bool> {
        let done = self.groups.toggle_task(group_id, task_id)?;
        self.bus.publish(&StateChange::TaskToggled {
            group_id,
            task_id,
            done,
        });
        Ok(done)
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&StateChange) + Send + 'static,
    ) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Count of changes published since startup.
    pub fn revision(&self) -> u64 {
        self.bus.revision()
    }

    fn publish_language(&mut self, change: &LanguageChange) {
        self.bus.publish(&StateChange::LanguageChanged {
            previous: change.previous.clone(),
            current: change.current.clone(),
        });
    }
}
