//! Minimal key-value persistence boundary.

use std::collections::HashMap;

use crate::error::Result;

/// Named-record load/save capability required by the tracker and the
/// companion. Values are opaque strings (JSON in practice).
pub trait ProgressStore {
    /// Fetch a record, `None` if it was never saved.
    ///
    /// # Errors
    /// Returns an error if the backing medium fails.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a record.
    ///
    /// # Errors
    /// Returns an error if the backing medium fails.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: ProgressStore + ?Sized> ProgressStore for &mut T {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
