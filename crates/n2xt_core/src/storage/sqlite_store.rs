//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist storefront records in one `storage_items` table.
//! - Create the table on first open and refuse files from newer builds.
//!
//! # Invariants
//! - The schema version lives in `PRAGMA user_version`.
//! - No record is read or written before the schema check passes.

use super::{KeyValueStore, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Schema version written by this build.
pub const STORE_SCHEMA_VERSION: u32 = 1;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_STORAGE_ITEMS: &str = "
CREATE TABLE IF NOT EXISTS storage_items (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// Key-value store over the `storage_items` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a store file.
    ///
    /// # Errors
    /// - `UnsupportedSchemaVersion` when the file carries a newer schema.
    /// - `Sqlite` when the file cannot be opened or initialised.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        open_with("file", || Connection::open(path))
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> StorageResult<Self> {
        open_with("memory", Connection::open_in_memory)
    }

    /// Schema version recorded in the underlying file.
    pub fn schema_version(&self) -> StorageResult<u32> {
        Ok(read_schema_version(&self.conn)?)
    }
}

fn open_with(
    mode: &'static str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StorageResult<SqliteStore> {
    let started_at = Instant::now();

    let result = open()
        .map_err(StorageError::from)
        .and_then(|mut conn| {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            ensure_schema(&mut conn)?;
            Ok(conn)
        });

    match result {
        Ok(conn) => {
            info!(
                "event=store_open module=storage status=ok mode={mode} schema_version={STORE_SCHEMA_VERSION} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(SqliteStore { conn })
        }
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode={mode} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn ensure_schema(conn: &mut Connection) -> StorageResult<()> {
    let found = read_schema_version(conn)?;
    if found > STORE_SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchemaVersion {
            found,
            supported: STORE_SCHEMA_VERSION,
        });
    }
    if found == STORE_SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_STORAGE_ITEMS)?;
    tx.pragma_update(None, "user_version", STORE_SCHEMA_VERSION)?;
    tx.commit()?;

    info!(
        "event=store_schema module=storage status=created from_version={found} to_version={STORE_SCHEMA_VERSION}"
    );
    Ok(())
}

fn read_schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_items WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO storage_items (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM storage_items WHERE key = ?1;", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SqliteStore, STORE_SCHEMA_VERSION};
    use crate::storage::KeyValueStore;

    #[test]
    fn set_get_overwrite_and_remove() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);

        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));

        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[test]
    fn fresh_store_records_current_schema() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.schema_version().unwrap(), STORE_SCHEMA_VERSION);
    }
}
