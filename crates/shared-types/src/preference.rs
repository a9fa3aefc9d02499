use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::AppError;

/// Storage namespace used when the site config does not name one.
pub const DEFAULT_NAMESPACE: &str = "usacoguide";

/// Key prefix for the per-group expand flags in the navigation list.
const GROUP_EXPANDED_PREFIX: &str = "guide:sidebarnav:isexpanded:";

/// Durable key for the pinned preference, e.g. `usacoguide:sidebar:pinned`.
pub fn pinned_key(namespace: &str) -> String {
    format!("{namespace}:sidebar:pinned")
}

/// Durable key for a navigation group's expand flag.
pub fn group_expanded_key(label: &str) -> String {
    format!("{GROUP_EXPANDED_PREFIX}{label}")
}

pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Only the exact string `"true"` reads as set.
pub fn decode_flag(raw: &str) -> bool {
    raw == "true"
}

/// Client-side key/value storage for user preferences.
///
/// Implementations run on the UI thread; reads may complete after first
/// paint.
#[allow(async_fn_in_trait)]
pub trait PreferenceStorage {
    /// `Ok(None)` means the key was never written.
    async fn read(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// In-process storage. Clones share the same entries, so a test can keep a
/// handle and inspect what a component wrote, or simulate a reload by
/// handing the same storage to a fresh mount.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
            && self.fail_reads == other.fail_reads
            && self.fail_writes == other.fail_writes
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every read and write.
    pub fn unavailable() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Storage whose reads succeed but whose writes are rejected.
    pub fn read_only(self) -> Self {
        Self {
            fail_writes: true,
            ..self
        }
    }

    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        if self.fail_reads {
            return Err(AppError::storage_unavailable("memory storage disabled"));
        }
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::storage_write("memory storage is read-only"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// A single persisted boolean preference.
///
/// Read once on mount, written on every change. Storage failures are logged
/// and swallowed: a failed load behaves like an absent key, a failed save
/// leaves the in-memory value authoritative for the rest of the session.
pub struct PersistedFlag<S> {
    storage: S,
    key: String,
    last_known: Cell<Option<bool>>,
}

impl<S: PreferenceStorage> PersistedFlag<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            last_known: Cell::new(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored value. `None` when absent or unreadable.
    pub async fn load(&self) -> Option<bool> {
        match self.storage.read(&self.key).await {
            Ok(Some(raw)) => {
                let value = decode_flag(&raw);
                tracing::debug!(key = %self.key, value, "loaded preference");
                self.last_known.set(Some(value));
                Some(value)
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored preference");
                None
            }
            Err(err) if err.is_storage() => {
                tracing::warn!(key = %self.key, %err, "preference read failed, using default");
                None
            }
            Err(err) => {
                tracing::error!(key = %self.key, %err, "unexpected preference read error, using default");
                None
            }
        }
    }

    /// Write `value` unless it is already what storage holds.
    ///
    /// Returns `true` if a write reached storage.
    pub async fn save(&self, value: bool) -> bool {
        if self.last_known.get() == Some(value) {
            return false;
        }
        match self.storage.write(&self.key, encode_flag(value)).await {
            Ok(()) => {
                tracing::debug!(key = %self.key, value, "saved preference");
                self.last_known.set(Some(value));
                true
            }
            Err(err) if err.is_storage() => {
                tracing::warn!(key = %self.key, %err, "preference write failed");
                false
            }
            Err(err) => {
                tracing::error!(key = %self.key, %err, "unexpected preference write error");
                false
            }
        }
    }
}

/// The persisted `pinned` preference: the narrow `load() -> bool?` /
/// `save(bool)` port the sidebar store is seeded from.
pub type PinnedPreference<S> = PersistedFlag<S>;

impl<S: PreferenceStorage> PersistedFlag<S> {
    pub fn pinned(storage: S, namespace: &str) -> PinnedPreference<S> {
        PersistedFlag::new(storage, pinned_key(namespace))
    }

    pub fn group_expanded(storage: S, label: &str) -> Self {
        PersistedFlag::new(storage, group_expanded_key(label))
    }
}
