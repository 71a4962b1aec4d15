//! # Record Repository
//!
//! The repository is the sole owner and mutator of the record collection.
//! It keeps the canonical in-memory `Vec<Record>`, newest first, and writes
//! the full serialized collection back to the store after every mutation.
//!
//! ## Ordering
//!
//! Creation prepends, so the most recently created record is always at the
//! front. Updates replace fields in place and never move a record; ordering
//! is established at creation time only.
//!
//! ## Id Assignment
//!
//! Ids come from a monotonic in-process counter seeded at one past the
//! highest id found when the snapshot loads. Rapid successive creates can
//! never collide, and ids are never reassigned while their record exists.
//!
//! ## Persistence Policy
//!
//! Write-behind: each mutation is applied in memory first and the snapshot
//! is saved afterwards. If the save fails, the error propagates to the
//! caller and the in-memory change is kept; the next successful save will
//! include it.
//!
//! ## Load Recovery
//!
//! An absent snapshot yields an empty collection. An unreadable or
//! malformed snapshot also yields an empty collection — local state is
//! never worth crashing over — but the condition is recorded and exposed
//! through [`Repository::load_warning`] so a client can surface it.

use crate::error::{Result, TroveError};
use crate::model::{Draft, Record};
use crate::store::StoreAdapter;

pub struct Repository<S: StoreAdapter> {
    store: S,
    records: Vec<Record>,
    editing: Option<u64>,
    next_id: u64,
    pretty: bool,
    load_warning: Option<String>,
}

impl<S: StoreAdapter> Repository<S> {
    /// Opens the repository, reading the current snapshot from the store.
    /// Never fails: unreadable state degrades to an empty collection with
    /// a load warning.
    pub fn open(store: S) -> Self {
        let (records, load_warning) = match store.load() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Record>>(&payload) {
                Ok(records) => (records, None),
                Err(e) => (
                    Vec::new(),
                    Some(format!("stored records are unreadable, starting empty: {}", e)),
                ),
            },
            Ok(None) => (Vec::new(), None),
            Err(e) => (
                Vec::new(),
                Some(format!("could not read the record store, starting empty: {}", e)),
            ),
        };

        let next_id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);

        Self {
            store,
            records,
            editing: None,
            next_id,
            pretty: true,
            load_warning,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The warning produced if the last `open` had to discard unreadable
    /// stored state. `None` after a clean load.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Creates a record from the draft and prepends it to the collection.
    pub fn create(&mut self, draft: Draft) -> Result<Record> {
        let record = Record::new(self.next_id, draft);
        self.next_id += 1;
        self.records.insert(0, record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replaces the fields of the record with the given id, preserving its
    /// id and position. An absent id is a no-op returning `None`. Always
    /// clears the editing selection and re-persists.
    pub fn update(&mut self, id: u64, draft: Draft) -> Result<Option<Record>> {
        let updated = match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.apply(draft);
                Some(record.clone())
            }
            None => None,
        };
        self.editing = None;
        self.persist()?;
        Ok(updated)
    }

    /// Removes the record with the given id. An absent id is a no-op
    /// returning `None`. Re-persists either way.
    pub fn delete(&mut self, id: u64) -> Result<Option<Record>> {
        let removed = match self.records.iter().position(|r| r.id == id) {
            Some(pos) => Some(self.records.remove(pos)),
            None => None,
        };
        self.persist()?;
        Ok(removed)
    }

    /// Marks a record as selected for editing, or clears the selection.
    /// Transient session state: never persisted.
    pub fn select_for_edit(&mut self, id: Option<u64>) {
        self.editing = id;
    }

    /// The record currently selected for editing, if it still exists.
    pub fn editing(&self) -> Option<&Record> {
        self.editing.and_then(|id| self.get(id))
    }

    fn persist(&mut self) -> Result<()> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(&self.records)
        } else {
            serde_json::to_string(&self.records)
        }
        .map_err(TroveError::Serialization)?;
        self.store.save(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::FailingStore;
    use crate::store::memory::InMemoryStore;

    fn draft(title: &str, description: &str) -> Draft {
        Draft::parse(title, description).unwrap()
    }

    fn open_empty() -> Repository<InMemoryStore> {
        Repository::open(InMemoryStore::new())
    }

    #[test]
    fn open_empty_store_yields_empty_collection() {
        let repo = open_empty();
        assert!(repo.records().is_empty());
        assert!(repo.load_warning().is_none());
    }

    #[test]
    fn create_prepends_newest_first() {
        let mut repo = open_empty();
        repo.create(draft("first", "")).unwrap();
        repo.create(draft("second", "")).unwrap();

        let titles: Vec<&str> = repo.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn created_ids_are_unique_and_monotonic() {
        let mut repo = open_empty();
        let a = repo.create(draft("a", "")).unwrap();
        let b = repo.create(draft("b", "")).unwrap();
        let c = repo.create(draft("c", "")).unwrap();

        assert!(a.id < b.id && b.id < c.id);

        let mut ids: Vec<u64> = repo.records().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn ids_survive_interleaved_deletes() {
        let mut repo = open_empty();
        let a = repo.create(draft("a", "")).unwrap();
        let b = repo.create(draft("b", "")).unwrap();
        repo.delete(a.id).unwrap();
        let c = repo.create(draft("c", "")).unwrap();

        assert_ne!(c.id, b.id);
        assert!(c.id > b.id);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut repo = open_empty();
        let a = repo.create(draft("a", "alpha")).unwrap();
        repo.create(draft("b", "beta")).unwrap();

        let updated = repo.update(a.id, draft("a2", "alpha two")).unwrap().unwrap();

        assert_eq!(updated.id, a.id);
        // Position preserved: `a` was created first, so it is still last.
        assert_eq!(repo.records()[1].title, "a2");
        assert_eq!(repo.records()[1].description, "alpha two");
        assert_eq!(repo.records()[0].title, "b");
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut repo = open_empty();
        repo.create(draft("only", "")).unwrap();
        let before: Vec<Record> = repo.records().to_vec();

        let result = repo.update(999, draft("ghost", "")).unwrap();

        assert!(result.is_none());
        assert_eq!(repo.records(), before.as_slice());
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut repo = open_empty();
        let a = repo.create(draft("a", "")).unwrap();
        let b = repo.create(draft("b", "")).unwrap();
        let c = repo.create(draft("c", "")).unwrap();

        let removed = repo.delete(b.id).unwrap().unwrap();

        assert_eq!(removed.id, b.id);
        let ids: Vec<u64> = repo.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![c.id, a.id]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut repo = open_empty();
        repo.create(draft("keep", "")).unwrap();

        let removed = repo.delete(42).unwrap();

        assert!(removed.is_none());
        assert_eq!(repo.records().len(), 1);
    }

    #[test]
    fn collection_round_trips_through_store() {
        let mut repo = open_empty();
        repo.create(draft("a", "alpha")).unwrap();
        repo.create(draft("b", "")).unwrap();
        let snapshot: Vec<Record> = repo.records().to_vec();

        // Reopen a repository over the same stored payload.
        let Repository { store, .. } = repo;
        let reopened = Repository::open(store);

        assert_eq!(reopened.records(), snapshot.as_slice());
    }

    #[test]
    fn reopen_continues_id_sequence() {
        let mut repo = open_empty();
        repo.create(draft("a", "")).unwrap();
        let b = repo.create(draft("b", "")).unwrap();

        let Repository { store, .. } = repo;
        let mut reopened = Repository::open(store);
        let c = reopened.create(draft("c", "")).unwrap();

        assert!(c.id > b.id);
    }

    #[test]
    fn corrupt_store_yields_empty_collection_with_warning() {
        let store = InMemoryStore::with_value("{ not json ]");
        let repo = Repository::open(store);

        assert!(repo.records().is_empty());
        assert!(repo.load_warning().is_some());
    }

    #[test]
    fn unreadable_store_yields_empty_collection_with_warning() {
        let mut store = FailingStore::new();
        store.fail_loads = true;
        let repo = Repository::open(store);

        assert!(repo.records().is_empty());
        assert!(repo.load_warning().is_some());
    }

    #[test]
    fn corrupt_store_recovery_allows_fresh_writes() {
        let store = InMemoryStore::with_value("garbage");
        let mut repo = Repository::open(store);

        let record = repo.create(draft("fresh", "")).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(repo.records().len(), 1);
    }

    #[test]
    fn failed_save_keeps_attempted_mutation() {
        let mut store = FailingStore::new();
        store.fail_saves = true;
        let mut repo = Repository::open(store);

        let result = repo.create(draft("doomed", ""));

        assert!(result.is_err());
        // Write-behind: the in-memory collection retains the record.
        assert_eq!(repo.records().len(), 1);
        assert_eq!(repo.records()[0].title, "doomed");
    }

    #[test]
    fn editing_selection_set_and_clear() {
        let mut repo = open_empty();
        let a = repo.create(draft("a", "")).unwrap();

        repo.select_for_edit(Some(a.id));
        assert_eq!(repo.editing().map(|r| r.id), Some(a.id));

        repo.select_for_edit(None);
        assert!(repo.editing().is_none());
    }

    #[test]
    fn update_clears_editing_selection() {
        let mut repo = open_empty();
        let a = repo.create(draft("a", "")).unwrap();
        repo.select_for_edit(Some(a.id));

        repo.update(a.id, draft("a2", "")).unwrap();

        assert!(repo.editing().is_none());
    }

    #[test]
    fn deleting_selected_record_clears_selection() {
        let mut repo = open_empty();
        let a = repo.create(draft("a", "")).unwrap();
        repo.select_for_edit(Some(a.id));

        repo.delete(a.id).unwrap();

        assert!(repo.editing().is_none());
    }

    #[test]
    fn end_to_end_scenario() {
        let mut repo = open_empty();

        let a = repo.create(draft("A", "")).unwrap();
        assert_eq!(
            repo.records().iter().map(|r| &r.title).collect::<Vec<_>>(),
            vec!["A"]
        );

        let b = repo.create(draft("B", "")).unwrap();
        assert_eq!(
            repo.records().iter().map(|r| &r.title).collect::<Vec<_>>(),
            vec!["B", "A"]
        );

        repo.update(a.id, draft("A2", "")).unwrap();
        assert_eq!(
            repo.records().iter().map(|r| &r.title).collect::<Vec<_>>(),
            vec!["B", "A2"]
        );

        repo.delete(b.id).unwrap();
        assert_eq!(
            repo.records().iter().map(|r| &r.title).collect::<Vec<_>>(),
            vec!["A2"]
        );
    }

    #[test]
    fn compact_snapshot_when_pretty_disabled() {
        let mut repo = Repository::open(InMemoryStore::new()).with_pretty(false);
        repo.create(draft("a", "")).unwrap();

        let Repository { store, .. } = repo;
        let payload = store.value().unwrap().to_string();
        assert!(!payload.contains('\n'));
    }
}
