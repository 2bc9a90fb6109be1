//! In-memory storage.

use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;

use super::{CartStorage, StorageError};

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);

        items.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_key_reads_as_none() -> TestResult {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get_item("@RocketShoes:cart")?, None);

        Ok(())
    }

    #[test]
    fn set_item_overwrites_previous_value() -> TestResult {
        let storage = MemoryStorage::new();

        storage.set_item("@RocketShoes:cart", "[]")?;
        storage.set_item("@RocketShoes:cart", r#"[{"id":1,"amount":1}]"#)?;

        assert_eq!(
            storage.get_item("@RocketShoes:cart")?.as_deref(),
            Some(r#"[{"id":1,"amount":1}]"#)
        );

        Ok(())
    }
}
