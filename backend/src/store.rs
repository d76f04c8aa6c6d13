//! In-memory note storage.
//!
//! All notes live in a single map keyed by a decimal id handed out by
//! [`IdGenerator`]. The map and the generator sit behind one lock, so every
//! store operation is atomic with respect to every other one.

use chrono::Utc;
use parking_lot::Mutex;
use thiserror::Error;

use crate::structs::{Note, NoteMap};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("note not found: {0}")]
    NotFound(String),
}

/// Sequential id source. Ids start at 1 and are never handed out twice.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}

#[derive(Debug, Default)]
struct Inner {
    notes: NoteMap,
    ids: IdGenerator,
}

#[derive(Debug, Default)]
pub struct NoteStore {
    inner: Mutex<Inner>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new note stamped with the current time and returns its key.
    pub fn create(&self, title: impl Into<String>, description: impl Into<String>) -> String {
        let mut inner = self.inner.lock();
        let key = inner.ids.next_id();
        let note = Note {
            title: title.into(),
            description: description.into(),
            created_on: Utc::now(),
        };
        inner.notes.insert(key.clone(), note);
        log::debug!("created note {} ({} total)", key, inner.notes.len());
        key
    }

    pub fn get(&self, key: &str) -> StoreResult<Note> {
        self.inner
            .lock()
            .notes
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    /// Snapshot of every stored note. Iteration order carries no meaning.
    pub fn list(&self) -> NoteMap {
        self.inner.lock().notes.clone()
    }

    /// Replaces title and description, keeping the original creation time.
    pub fn update(
        &self,
        key: &str,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<()> {
        let mut inner = self.inner.lock();
        let note = inner
            .notes
            .get_mut(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        note.title = title.into();
        note.description = description.into();
        log::debug!("updated note {}", key);
        Ok(())
    }

    pub fn delete(&self, key: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock();
        match inner.notes.remove(key) {
            Some(_) => {
                log::debug!("deleted note {} ({} left)", key, inner.notes.len());
                Ok(())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn create_then_get_returns_same_fields() {
        let store = NoteStore::new();
        let before = Utc::now();
        let key = store.create("Buy milk", "2%");
        let after = Utc::now();

        let note = store.get(&key).unwrap();
        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.description, "2%");
        assert!(note.created_on >= before && note.created_on <= after);
    }

    #[test]
    fn list_contains_every_created_key() {
        let store = NoteStore::new();
        let keys: Vec<String> = (0..5)
            .map(|i| store.create(format!("note {i}"), ""))
            .collect();

        let listed = store.list();
        assert_eq!(listed.len(), 5);
        for key in &keys {
            assert!(listed.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn update_keeps_creation_time() {
        let store = NoteStore::new();
        let key = store.create("draft", "first");
        let created_on = store.get(&key).unwrap().created_on;

        store.update(&key, "final", "").unwrap();

        let note = store.get(&key).unwrap();
        assert_eq!(note.title, "final");
        assert_eq!(note.description, "");
        assert_eq!(note.created_on, created_on);
    }

    #[test]
    fn unknown_key_is_not_found_and_store_untouched() {
        let store = NoteStore::new();
        let key = store.create("keep", "me");
        let snapshot = store.list();

        assert_eq!(
            store.update("42", "x", "y"),
            Err(StoreError::NotFound("42".to_string()))
        );
        assert_eq!(
            store.delete("42"),
            Err(StoreError::NotFound("42".to_string()))
        );
        assert_eq!(store.list(), snapshot);
        assert!(store.get(&key).is_ok());
    }

    #[test]
    fn delete_removes_from_list_and_get() {
        let store = NoteStore::new();
        let first = store.create("Buy milk", "2%");
        let second = store.create("Call Bob", "");
        assert_eq!(first, "1");
        assert_eq!(second, "2");

        store.delete(&first).unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed["2"].title, "Call Bob");
        assert_eq!(listed["2"].description, "");
        assert_eq!(store.get("1"), Err(StoreError::NotFound("1".to_string())));
        assert_eq!(store.delete("1"), Err(StoreError::NotFound("1".to_string())));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = NoteStore::new();
        let a = store.create("a", "");
        let b = store.create("b", "");
        store.delete(&b).unwrap();
        store.delete(&a).unwrap();
        assert!(store.is_empty());

        assert_eq!(store.create("c", ""), "3");
    }

    #[test]
    fn id_generator_counts_up_from_one() {
        let mut ids = IdGenerator::new();
        let issued: Vec<String> = (0..3).map(|_| ids.next_id()).collect();
        assert_eq!(issued, ["1", "2", "3"]);
    }

    #[test]
    fn concurrent_creates_get_distinct_keys() {
        let store = Arc::new(NoteStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.create(format!("{t}-{i}"), ""))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut keys: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .map(|k| k.parse().unwrap())
            .collect();
        keys.sort_unstable();
        keys.dedup();

        assert_eq!(keys.len(), 400);
        assert_eq!(store.len(), 400);
        assert_eq!(keys.first(), Some(&1));
        assert_eq!(keys.last(), Some(&400));
    }
}
