//! The [`ItemStore`] trait defining the storage interface.

use docket_types::Item;

/// Storage backend for named items.
///
/// Implementations must be thread-safe (`Send + Sync`) and provide atomic
/// per-key semantics without any locking by the caller:
///
/// - `insert_if_absent` is a single check-then-insert step. Of any number of
///   concurrent inserts for the same name, at most one returns `true`.
/// - `remove` atomically reports whether the name existed. Of any number of
///   concurrent removes for the same name, exactly one returns `true`.
///
/// Names are case-sensitive and compared by exact equality. The trait
/// exposes no iteration or bulk operations; the registry only ever touches
/// one key per call.
pub trait ItemStore: Send + Sync {
    /// Read the item stored under `name`, if any. Clone-on-read: the caller
    /// gets its own copy and never a reference into the store.
    fn get(&self, name: &str) -> Option<Item>;

    /// Insert `item` under `name` only if the name is absent.
    ///
    /// Returns `true` if the item was inserted, `false` if the name was
    /// already taken (the existing item is left untouched).
    fn insert_if_absent(&self, name: &str, item: Item) -> bool;

    /// Remove the item stored under `name`.
    ///
    /// Returns `true` if the name existed and its item was removed.
    fn remove(&self, name: &str) -> bool;
}
