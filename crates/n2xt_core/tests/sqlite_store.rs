use n2xt_core::{
    KeyValueStore, SqliteStore, StorageError, Theme, ThemeRepository, CART_RECORD_KEY,
    STORE_SCHEMA_VERSION, THEME_RECORD_KEY,
};
use rusqlite::Connection;

#[test]
fn records_survive_reopening_the_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("n2xt.sqlite3");

    let first = SqliteStore::open(&path).unwrap();
    first.set_item(THEME_RECORD_KEY, "light").unwrap();
    first.set_item(CART_RECORD_KEY, "[]").unwrap();
    drop(first);

    let second = SqliteStore::open(&path).unwrap();
    assert_eq!(second.schema_version().unwrap(), STORE_SCHEMA_VERSION);
    assert_eq!(
        second.get_item(THEME_RECORD_KEY).unwrap().as_deref(),
        Some("light")
    );
    assert_eq!(
        ThemeRepository::new(&second).load_theme().unwrap(),
        Some(Theme::Light)
    );
    assert_eq!(
        second.get_item(CART_RECORD_KEY).unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn removed_record_stays_gone_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("n2xt.sqlite3");

    let store = SqliteStore::open(&path).unwrap();
    store.set_item(CART_RECORD_KEY, "[]").unwrap();
    store.remove_item(CART_RECORD_KEY).unwrap();
    store.remove_item("never-written").unwrap();
    drop(store);

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get_item(CART_RECORD_KEY).unwrap(), None);
}

#[test]
fn plain_sqlite_file_is_adopted_as_a_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.sqlite3");
    Connection::open(&path).unwrap();

    let store = SqliteStore::open(&path).unwrap();
    store.set_item(THEME_RECORD_KEY, "dark").unwrap();
    drop(store);

    let conn = Connection::open(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, STORE_SCHEMA_VERSION);
}

#[test]
fn store_file_from_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match SqliteStore::open(&path) {
        Err(StorageError::UnsupportedSchemaVersion { found, supported }) => {
            assert_eq!(found, 999);
            assert_eq!(supported, STORE_SCHEMA_VERSION);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("newer schema was accepted"),
    }
}
