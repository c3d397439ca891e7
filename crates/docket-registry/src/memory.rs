//! In-memory item store.
//!
//! [`InMemoryItemStore`] holds all items in a `HashMap` behind a `RwLock`.
//! Reads take the shared lock; `insert_if_absent` and `remove` take the
//! exclusive lock so the check and the mutation are one atomic step. Data is
//! lost when the store is dropped.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use docket_types::Item;

use crate::traits::ItemStore;

/// A `HashMap`-backed implementation of [`ItemStore`].
pub struct InMemoryItemStore {
    items: RwLock<HashMap<String, Item>>,
}

impl InMemoryItemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn get(&self, name: &str) -> Option<Item> {
        let items = self.items.read().expect("lock poisoned");
        items.get(name).cloned()
    }

    fn insert_if_absent(&self, name: &str, item: Item) -> bool {
        let mut items = self.items.write().expect("lock poisoned");
        match items.entry(name.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(item);
                true
            }
        }
    }

    fn remove(&self, name: &str) -> bool {
        let mut items = self.items.write().expect("lock poisoned");
        items.remove(name).is_some()
    }
}

impl std::fmt::Debug for InMemoryItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryItemStore")
            .field("item_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use docket_types::ContentKind;

    use super::*;

    fn json_item(content: &str) -> Item {
        Item::new(content, ContentKind::Json)
    }

    // -----------------------------------------------------------------------
    // Core operations
    // -----------------------------------------------------------------------

    #[test]
    fn insert_and_get() {
        let store = InMemoryItemStore::new();
        assert!(store.insert_if_absent("a", json_item(r#"{"a":1}"#)));

        let item = store.get("a").expect("should exist");
        assert_eq!(item.content(), r#"{"a":1}"#);
        assert_eq!(item.kind(), ContentKind::Json);
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryItemStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn second_insert_for_same_name_is_refused() {
        let store = InMemoryItemStore::new();
        assert!(store.insert_if_absent("a", json_item(r#"{"v":1}"#)));
        assert!(!store.insert_if_absent("a", json_item(r#"{"v":2}"#)));

        // The first item is untouched.
        assert_eq!(store.get("a").unwrap().content(), r#"{"v":1}"#);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_present_item() {
        let store = InMemoryItemStore::new();
        store.insert_if_absent("a", json_item("{}"));
        assert!(store.remove("a"));
        assert!(store.get("a").is_none());
        assert!(!store.remove("a")); // second remove = false
    }

    #[test]
    fn remove_missing_returns_false() {
        let store = InMemoryItemStore::new();
        assert!(!store.remove("ghost"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let store = InMemoryItemStore::new();
        store.insert_if_absent("Item", json_item("{}"));
        assert!(store.get("item").is_none());
        assert!(store.insert_if_absent("item", json_item("{}")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryItemStore::new();
        assert!(store.is_empty());
        store.insert_if_absent("a", json_item("{}"));
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn debug_reports_item_count() {
        let store = InMemoryItemStore::new();
        store.insert_if_absent("a", json_item("{}"));
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryItemStore"));
        assert!(debug.contains("item_count"));
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_inserts_for_one_name_have_one_winner() {
        let store = Arc::new(InMemoryItemStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.insert_if_absent("contested", json_item(&format!("{{\"writer\":{i}}}")))
                })
            })
            .collect();

        let wins: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(wins.iter().filter(|&&won| won).count(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_removes_for_one_name_have_one_winner() {
        let store = Arc::new(InMemoryItemStore::new());
        store.insert_if_absent("contested", json_item("{}"));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.remove("contested"))
            })
            .collect();

        let wins: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(wins.iter().filter(|&&won| won).count(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_reads_are_safe() {
        let store = Arc::new(InMemoryItemStore::new());
        store.insert_if_absent("shared", json_item(r#"{"shared":true}"#));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let item = store.get("shared").expect("should exist");
                    assert_eq!(item.content(), r#"{"shared":true}"#);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }
}
