//! In-memory backing store implementation.

use std::collections::HashMap;
use std::fmt;

use super::StoreValue;

/// Callback invoked with the property key whenever a store entry is
/// written or removed.
pub type ChangeCallback = Box<dyn Fn(&str) + Send + Sync>;

#[derive(Clone, Debug)]
struct Entry {
    value: Box<dyn StoreValue>,
    changed: bool,
}

/// A string-keyed bag of heterogeneous property values.
///
/// Every model instance owns one store; all property access goes through
/// it. Reads recover the concrete type with a checked downcast, so a
/// type mismatch reads as an absent value rather than aborting.
///
/// ## Change tracking
///
/// While a payload is being decoded, initialization is marked incomplete
/// and writes are not counted as changes. Once
/// [`set_initialization_completed(true)`](Self::set_initialization_completed)
/// is called (the decode driver does this), subsequent writes mark their
/// key as changed. With
/// [`set_return_only_changed_values(true)`](Self::set_return_only_changed_values)
/// the store then answers reads only for changed keys, which makes a
/// re-serialization emit exactly the mutated properties.
///
/// ## Example
///
/// ```rust
/// use graph_models::store::InMemoryBackingStore;
///
/// let mut store = InMemoryBackingStore::new();
/// store.set("size", 42i64);
/// assert_eq!(store.get::<i64>("size"), Some(&42));
/// // A mismatched type reads as absent.
/// assert_eq!(store.get::<String>("size"), None);
/// ```
pub struct InMemoryBackingStore {
    entries: HashMap<String, Entry>,
    initialization_completed: bool,
    return_only_changed_values: bool,
    subscriptions: HashMap<String, ChangeCallback>,
}

impl Default for InMemoryBackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackingStore {
    /// Creates an empty store with initialization completed, so every
    /// write on a directly-constructed model counts as a change.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            initialization_completed: true,
            return_only_changed_values: false,
            subscriptions: HashMap::new(),
        }
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key is absent, when the stored value is
    /// of a different type, or when the store is in
    /// return-only-changed mode and the key has not changed since
    /// initialization completed.
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        let entry = self.entries.get(key)?;
        if self.return_only_changed_values && !entry.changed {
            return None;
        }
        entry.value.as_any().downcast_ref()
    }

    /// Mutable access to the value stored under `key`.
    ///
    /// Mutating through this handle does not mark the key changed.
    pub fn get_mut<T: 'static>(&mut self, key: &str) -> Option<&mut T> {
        self.entries
            .get_mut(key)
            .and_then(|entry| entry.value.as_any_mut().downcast_mut())
    }

    /// Returns the value under `key`, inserting `default()` first when
    /// the key is absent or holds a value of a different type.
    pub fn get_or_insert_with<T, F>(&mut self, key: &str, default: F) -> &mut T
    where
        T: StoreValue,
        F: FnOnce() -> T,
    {
        let present = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.value.as_any().is::<T>());
        if !present {
            self.set(key, default());
        }
        // The matching entry was verified or inserted just above.
        match self.get_mut(key) {
            Some(value) => value,
            None => unreachable!("entry inserted above"),
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The key is marked changed unless the store is still initializing.
    /// Subscribers are notified with the key.
    pub fn set<T: StoreValue>(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        let changed = self.initialization_completed;
        self.entries.insert(
            key.clone(),
            Entry {
                value: Box::new(value),
                changed,
            },
        );
        self.notify(&key);
    }

    /// Stores `Some` value under `key`, or removes the key for `None`.
    ///
    /// This is the shape every model setter uses: absent properties are
    /// omitted on the wire.
    pub fn set_optional<T: StoreValue>(&mut self, key: impl Into<String>, value: Option<T>) {
        let key = key.into();
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.remove(&key);
            }
        }
    }

    /// Removes the value under `key`. Returns `true` if a value was
    /// present. Subscribers are notified with the key.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.notify(key);
        }
        removed
    }

    /// Returns `true` if the store holds a value under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over all stored keys, changed or not.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over the keys written since initialization completed.
    pub fn changed_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.changed)
            .map(|(key, _)| key.as_str())
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry and resets change state.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` once the owning model has finished decoding (or
    /// was constructed directly).
    pub fn initialization_completed(&self) -> bool {
        self.initialization_completed
    }

    /// Marks initialization state. Completing initialization resets the
    /// changed flag on every entry, so change tracking starts from the
    /// decoded snapshot.
    pub fn set_initialization_completed(&mut self, completed: bool) {
        self.initialization_completed = completed;
        if completed {
            for entry in self.entries.values_mut() {
                entry.changed = false;
            }
        }
    }

    /// Returns `true` if reads are restricted to changed keys.
    pub fn return_only_changed_values(&self) -> bool {
        self.return_only_changed_values
    }

    /// Restricts (or restores) reads to changed keys.
    pub fn set_return_only_changed_values(&mut self, value: bool) {
        self.return_only_changed_values = value;
    }

    /// Registers a callback invoked with the key on every write or
    /// removal. A later registration under the same id replaces the
    /// earlier one.
    pub fn subscribe<F>(&mut self, id: impl Into<String>, callback: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.subscriptions.insert(id.into(), Box::new(callback));
    }

    /// Removes the callback registered under `id`. Returns `true` if
    /// one was present.
    pub fn unsubscribe(&mut self, id: &str) -> bool {
        self.subscriptions.remove(id).is_some()
    }

    fn notify(&self, key: &str) {
        for callback in self.subscriptions.values() {
            callback(key);
        }
    }
}

impl Clone for InMemoryBackingStore {
    /// Clones entries and tracking state. Subscriptions are not
    /// transferable and start empty on the clone.
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            initialization_completed: self.initialization_completed,
            return_only_changed_values: self.return_only_changed_values,
            subscriptions: HashMap::new(),
        }
    }
}

impl fmt::Debug for InMemoryBackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBackingStore")
            .field("entries", &self.entries)
            .field("initialization_completed", &self.initialization_completed)
            .field("return_only_changed_values", &self.return_only_changed_values)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
