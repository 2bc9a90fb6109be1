//! Storage
//!
//! Durable key-value slots that survive restarts, the way a browser's
//! `localStorage` does.

mod errors;
mod file;
mod memory;

use mockall::automock;

pub use errors::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// String key-value storage. Writes replace the whole value for a key.
#[automock]
pub trait CartStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
