//! Publish-on-write change notifications.
//!
//! # Invariants
//! - Listeners run synchronously, in subscription order, after the mutation.
//! - `revision` increases by exactly one per published event.

use crate::model::task::{GroupId, TaskId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Handle returned by [`ChangeBus::subscribe`].
pub type SubscriptionId = u64;

/// State mutation observed by screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StateChange {
    LanguageChanged { previous: String, current: String },
    GroupAdded { group_id: GroupId },
    TaskAdded { group_id: GroupId, task_id: TaskId },
    TaskToggled { group_id: GroupId, task_id: TaskId, done: bool },
}

impl StateChange {
    /// Stable event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LanguageChanged { .. } => "language_changed",
            Self::GroupAdded { .. } => "group_added",
            Self::TaskAdded { .. } => "task_added",
            Self::TaskToggled { .. } => "task_toggled",
        }
    }
}

type Listener = Box<dyn Fn(&StateChange) + Send>;

/// Listener registry for state changes.
#[derive(Default)]
pub struct ChangeBus {
    next_id: SubscriptionId,
    listeners: BTreeMap<SubscriptionId, Listener>,
    revision: u64,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&StateChange) + Send + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = self.next_id;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Removes a listener; returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn publish(&mut self, change: &StateChange) {
        self.revision += 1;
        log::debug!(
            "event=state_change module=service status=ok change={} revision={} listeners={}",
            change.name(),
            self.revision,
            self.listeners.len()
        );
        for listener in self.listeners.values() {
            listener(change);
        }
    }

    /// Number of events published so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Debug for ChangeBus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeBus")
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChangeBus, StateChange};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[test]
    fn listeners_receive_events_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = ChangeBus::new();
        for label in ["first", "second"] {
            let seen = Arc::clone(&seen);
            bus.subscribe(move |change| {
                seen.lock().unwrap().push((label, change.name()));
            });
        }

        bus.publish(&StateChange::GroupAdded {
            group_id: Uuid::new_v4(),
        });

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("first", "group_added"), ("second", "group_added")]
        );
        assert_eq!(bus.revision(), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Arc::new(Mutex::new(0));
        let mut bus = ChangeBus::new();
        let id = {
            let count = Arc::clone(&count);
            bus.subscribe(move |_| *count.lock().unwrap() += 1)
        };

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&StateChange::LanguageChanged {
            previous: "en".to_string(),
            current: "ar".to_string(),
        });

        assert_eq!(*count.lock().unwrap(), 0);
        assert_eq!(bus.revision(), 1);
        assert!(bus.is_empty());
    }

    #[test]
    fn change_serializes_with_kind_tag() {
        let change = StateChange::LanguageChanged {
            previous: "en".to_string(),
            current: "fr-CA".to_string(),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["kind"], "language_changed");
        assert_eq!(json["current"], "fr-CA");
    }
}
