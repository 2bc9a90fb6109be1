//! Storage errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error")]
    Io(#[from] std::io::Error),

    #[error("storage document is malformed")]
    Malformed(#[from] serde_json::Error),
}
