//! Admin panel actions.

use crate::domain::ids::ServerIdGenerator;
use crate::domain::notification::Notification;
use crate::domain::records::ServerEntry;
use crate::ports::inbound::{SaveOutcome, StateStoreApi};
use crate::ports::outbound::TimeSource;

/// Message shown after a server was added and saved.
pub const SERVER_ADDED_MESSAGE: &str = "Server added successfully!";

/// Handle an "add server" form submission.
///
/// Appends a new entry built from `form` (field name / value pairs, in form
/// order) with a fresh identifier, then saves the catalog. The success
/// notification is only shown when the save went through; a rejected save
/// has already raised its own error notification, and the entry stays in
/// the in-memory catalog.
pub fn add_server<A, T, I, K, V>(
    store: &mut A,
    ids: &mut ServerIdGenerator<T>,
    form: I,
) -> (u64, SaveOutcome)
where
    A: StateStoreApi,
    T: TimeSource,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let entry = ServerEntry::from_form(ids.next_id(), form);
    let id = entry.id;

    let ((), outcome) = store.mutate_catalog(|catalog| catalog.servers.push(entry));

    if outcome.is_persisted() {
        tracing::info!(server_id = id, "Server added");
        store.notify(Notification::success(SERVER_ADDED_MESSAGE));
    }

    (id, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Severity;
    use crate::service::{StateStoreDependencies, StateStoreService};
    use crate::test_utils::{FlakyStorage, ManualClock, RecordingNotifier};
    use crate::StoreConfig;

    fn make_store() -> (
        StateStoreService<FlakyStorage, RecordingNotifier>,
        RecordingNotifier,
    ) {
        let notifier = RecordingNotifier::new();
        let deps = StateStoreDependencies {
            storage: FlakyStorage::new(),
            notifier: notifier.clone(),
        };
        (StateStoreService::new(deps, StoreConfig::default()), notifier)
    }

    #[test]
    fn test_add_server_appends_and_saves() {
        let (mut store, notifier) = make_store();
        let mut ids = ServerIdGenerator::new(ManualClock::new(1_712_345_678_901));

        let (id, outcome) = add_server(
            &mut store,
            &mut ids,
            [("name", "India 1"), ("country", "IN"), ("price", "12")],
        );

        assert_eq!(id, 1_712_345_678_901);
        assert_eq!(outcome, SaveOutcome::Persisted);

        let servers = &store.catalog().servers;
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].field("country"), Some("IN"));

        let seen = notifier.notifications();
        assert_eq!(seen, vec![Notification::success(SERVER_ADDED_MESSAGE)]);

        // Reload from the slot sees the new server.
        assert_eq!(store.load_catalog().servers.len(), 1);
    }

    #[test]
    fn test_add_server_keeps_display_order_and_unique_ids() {
        let (mut store, _) = make_store();
        let mut ids = ServerIdGenerator::seeded(ManualClock::new(500), store.catalog());

        let (a, _) = add_server(&mut store, &mut ids, [("name", "first")]);
        let (b, _) = add_server(&mut store, &mut ids, [("name", "second")]);
        let (c, _) = add_server(&mut store, &mut ids, [("name", "third")]);

        assert!(a < b && b < c);
        let names: Vec<_> = store
            .catalog()
            .servers
            .iter()
            .filter_map(|s| s.field("name"))
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_add_server_form_cannot_override_id() {
        let (mut store, _) = make_store();
        let mut ids = ServerIdGenerator::new(ManualClock::new(10));

        let (id, _) = add_server(&mut store, &mut ids, [("id", "1"), ("name", "x")]);
        assert_eq!(id, 10);
        assert_eq!(store.catalog().servers[0].id, 10);
    }

    #[test]
    fn test_add_server_save_failure() {
        let (mut store, notifier) = make_store();
        store.storage_mut().fail_writes = true;
        let mut ids = ServerIdGenerator::new(ManualClock::new(77));

        let (_, outcome) = add_server(&mut store, &mut ids, [("name", "offline")]);
        assert_eq!(outcome, SaveOutcome::NotPersisted);

        // Entry is still usable this session.
        assert_eq!(store.catalog().servers.len(), 1);

        let seen = notifier.notifications();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].severity, Severity::Error);
    }
}
