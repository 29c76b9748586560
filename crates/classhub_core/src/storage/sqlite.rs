//! SQLite-backed durable key/value store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply storage migrations before returning a usable store.
//! - Implement the `BackingStore` contract over the `kv` table.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.
//! - `set` is an upsert; a key holds at most one value.

use super::migrations::apply_migrations;
use super::{BackingStore, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Durable `BackingStore` over a single SQLite `kv` table.
pub struct SqliteBackingStore {
    conn: Connection,
}

/// Opens a SQLite-backed store at `path` and applies pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StorageResult<SqliteBackingStore> {
    let started_at = Instant::now();
    info!("event=store_open module=storage status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(conn) {
        Ok(store) => {
            info!(
                "event=store_open module=storage status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(store)
        }
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory SQLite-backed store and applies pending migrations.
///
/// Contents do not survive the process; useful for tests and demos.
pub fn open_store_in_memory() -> StorageResult<SqliteBackingStore> {
    let started_at = Instant::now();
    info!("event=store_open module=storage status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode=memory duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(conn) {
        Ok(store) => {
            info!(
                "event=store_open module=storage status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(store)
        }
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode=memory duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(mut conn: Connection) -> StorageResult<SqliteBackingStore> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(&mut conn)?;
    Ok(SqliteBackingStore { conn })
}

impl BackingStore for SqliteBackingStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{open_store_in_memory, BackingStore};

    #[test]
    fn set_then_get_roundtrips_value() {
        let store = open_store_in_memory().unwrap();
        store.set("announcements", "[]").unwrap();
        assert_eq!(store.get("announcements").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = open_store_in_memory().unwrap();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn get_absent_key_returns_none() {
        let store = open_store_in_memory().unwrap();
        assert!(store.get("missing").unwrap().is_none());
    }
}
