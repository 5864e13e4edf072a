use crate::{CredentialStore, StoreErrorResult};

use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Option<&str>) -> StoreErrorResult<()> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        match value {
            Some(value) => {
                values.insert(key.to_string(), value.to_string());
            }
            None => {
                values.remove(key);
            }
        }
        Ok(())
    }

    fn clear(&self) -> StoreErrorResult<()> {
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        Ok(())
    }
}
