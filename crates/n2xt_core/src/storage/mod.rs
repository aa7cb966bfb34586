//! Durable key-value storage boundary.
//!
//! # Responsibility
//! - Define the string-keyed record store the cart and theme live in.
//! - Provide SQLite-backed and in-process implementations.
//!
//! # Invariants
//! - `set_item` is synchronous: a successful return means the value is
//!   visible to the next `get_item` on the same store.
//! - Missing keys read as `Ok(None)`, never as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryStore;
pub use sqlite_store::{SqliteStore, STORE_SCHEMA_VERSION};

/// Record key holding the serialized cart ledger.
pub const CART_RECORD_KEY: &str = "n2xt-cart";
/// Record key holding the presentation theme.
pub const THEME_RECORD_KEY: &str = "n2xt-theme";

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage transport errors.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    /// The store file was written by a newer build.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
    QuotaExceeded { key: String, limit_bytes: usize },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "store schema version {found} is newer than supported {supported}"
            ),
            Self::QuotaExceeded { key, limit_bytes } => write!(
                f,
                "storage quota of {limit_bytes} bytes exceeded while writing `{key}`"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed durable record store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
