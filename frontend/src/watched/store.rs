use crate::error::StorageError;
use crate::models::{WatchedEntry, WatchedSummary};
use crate::utils::average;
use std::rc::Rc;
use web_sys::window;
use yew::Reducible;

pub const WATCHED_KEY: &str = "watchedMovies";

/// Minimal string key/value persistence the watched list is written to.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[derive(Debug)]
pub enum WatchedAction {
    Add(WatchedEntry),
    Remove(String),
}

/// Ordered watched list, written back to its backend after every change.
#[derive(Debug, Clone)]
pub struct WatchedStore<S> {
    entries: Vec<WatchedEntry>,
    backend: S,
}

impl<S: KeyValueStore> WatchedStore<S> {
    /// Restores the list from `backend`. Missing or unreadable data starts
    /// an empty list.
    pub fn load(backend: S) -> Self {
        let entries = match read_entries(&backend) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("starting with an empty watched list: {e}");
                Vec::new()
            }
        };
        log::debug!("restored {} watched movies", entries.len());
        Self { entries, backend }
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn get(&self, imdb_id: &str) -> Option<&WatchedEntry> {
        self.entries.iter().find(|entry| entry.imdb_id == imdb_id)
    }

    /// Appends `entry` unless its id is already listed. Returns whether the
    /// list changed.
    pub fn add(&mut self, entry: WatchedEntry) -> bool {
        if self.get(&entry.imdb_id).is_some() {
            log::debug!("{} is already on the watched list", entry.imdb_id);
            return false;
        }
        self.entries.push(entry);
        self.persist();
        true
    }

    /// Drops every entry with `imdb_id`. Returns whether the list changed.
    pub fn remove(&mut self, imdb_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.imdb_id != imdb_id);
        if self.entries.len() == before {
            return false;
        }
        self.persist();
        true
    }

    pub fn summarize(&self) -> WatchedSummary {
        WatchedSummary {
            count: self.entries.len(),
            avg_imdb_rating: average(self.entries.iter().map(|e| e.imdb_rating)),
            avg_user_rating: average(self.entries.iter().map(|e| e.user_rating.map(f64::from))),
            avg_runtime: average(self.entries.iter().map(|e| e.runtime.map(f64::from))),
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(|e| StorageError::Malformed(e.to_string()))
            .and_then(|json| self.backend.write(WATCHED_KEY, &json));
        if let Err(e) = result {
            log::warn!("failed to persist watched list: {e}");
        }
    }
}

fn read_entries<S: KeyValueStore>(backend: &S) -> Result<Vec<WatchedEntry>, StorageError> {
    match backend.read(WATCHED_KEY)? {
        Some(json) => {
            // `null` was written by builds that stored an unset list
            let entries: Option<Vec<WatchedEntry>> =
                serde_json::from_str(&json).map_err(|e| StorageError::Malformed(e.to_string()))?;
            Ok(entries.unwrap_or_default())
        }
        None => Ok(Vec::new()),
    }
}

impl<S: KeyValueStore + Clone> Reducible for WatchedStore<S> {
    type Action = WatchedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            WatchedAction::Add(entry) => next.add(entry),
            WatchedAction::Remove(imdb_id) => next.remove(&imdb_id),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryStorage;
    use super::*;

    fn entry(id: &str, imdb_rating: Option<f64>, runtime: Option<u32>, user_rating: Option<u8>) -> WatchedEntry {
        WatchedEntry {
            imdb_id: id.to_string(),
            title: format!("Movie {id}"),
            year: "2010".to_string(),
            poster: String::new(),
            imdb_rating,
            runtime,
            user_rating,
        }
    }

    #[test]
    fn empty_storage_starts_empty() {
        let store = WatchedStore::load(MemoryStorage::default());
        assert!(store.entries().is_empty());
        assert_eq!(store.summarize(), WatchedSummary::default());
    }

    #[test]
    fn malformed_storage_falls_back_to_empty() {
        for garbage in ["{not json", "42", r#"[{"title": "no id"}]"#] {
            let store = WatchedStore::load(MemoryStorage::with(WATCHED_KEY, garbage));
            assert!(store.entries().is_empty(), "input {garbage:?}");
        }
    }

    #[test]
    fn stored_null_is_an_empty_list() {
        let store = WatchedStore::load(MemoryStorage::with(WATCHED_KEY, "null"));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn add_then_remove_round_trips_and_persists_twice() {
        let backend = MemoryStorage::default();
        let mut store = WatchedStore::load(backend.clone());
        store.add(entry("tt0133093", Some(8.7), Some(136), Some(9)));
        let before = store.entries().to_vec();
        let writes_before = backend.writes();

        assert!(store.add(entry("tt1375666", Some(8.8), Some(148), Some(10))));
        assert!(store.remove("tt1375666"));

        assert_eq!(store.entries(), before.as_slice());
        assert_eq!(backend.writes() - writes_before, 2);
    }

    #[test]
    fn list_survives_a_reload() {
        let backend = MemoryStorage::default();
        let mut store = WatchedStore::load(backend.clone());
        store.add(entry("tt1375666", Some(8.8), Some(148), Some(10)));
        store.add(entry("tt0133093", Some(8.7), Some(136), None));

        let reloaded = WatchedStore::load(backend.clone());
        assert_eq!(reloaded.entries(), store.entries());
        assert!(backend.stored().unwrap().contains("\"imdbID\":\"tt1375666\""));
    }

    #[test]
    fn duplicate_ids_are_not_added() {
        let backend = MemoryStorage::default();
        let mut store = WatchedStore::load(backend.clone());
        assert!(store.add(entry("tt1375666", Some(8.8), Some(148), Some(7))));
        assert!(!store.add(entry("tt1375666", Some(8.8), Some(148), Some(3))));

        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].user_rating, Some(7));
        assert_eq!(backend.writes(), 1);
    }

    #[test]
    fn removing_unknown_id_does_not_persist() {
        let backend = MemoryStorage::default();
        let mut store = WatchedStore::load(backend.clone());
        assert!(!store.remove("tt0000000"));
        assert_eq!(backend.writes(), 0);
    }

    #[test]
    fn summary_averages_known_values() {
        let mut store = WatchedStore::load(MemoryStorage::default());
        store.add(entry("a", Some(8.0), Some(100), Some(10)));
        store.add(entry("b", Some(6.0), None, Some(6)));
        store.add(entry("c", None, Some(140), None));

        let summary = store.summarize();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.avg_imdb_rating, Some(7.0));
        assert_eq!(summary.avg_user_rating, Some(8.0));
        assert_eq!(summary.avg_runtime, Some(120.0));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let store = Rc::new(WatchedStore::load(MemoryStorage::default()));
        let same = Rc::clone(&store).reduce(WatchedAction::Remove("missing".into()));
        assert!(Rc::ptr_eq(&store, &same));

        let added = same.reduce(WatchedAction::Add(entry("tt1375666", None, None, None)));
        assert_eq!(added.entries().len(), 1);
    }
}
