//! In-memory config store.

use greybrainer_error::GreybrainerResult;
use greybrainer_interface::ConfigStore;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Config store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn get(&self, key: &str) -> GreybrainerResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GreybrainerResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> GreybrainerResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}
