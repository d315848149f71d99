//! Tagged knowledge store.
//!
//! The command dispatcher only sees the [`KnowledgeStore`] trait. [`SqliteStore`]
//! is the production implementation backed by a single shared SQLite connection.

pub mod items;
pub mod query;
pub mod types;

use anyhow::Result;
use rusqlite::Connection;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use types::{AddItemResult, ItemPackage};

/// Operations the bot needs from the archive.
///
/// All methods are synchronous. Callers in async contexts should use
/// `tokio::task::spawn_blocking`.
pub trait KnowledgeStore: Send + Sync {
    /// Human-readable summary of the records filed under `term`.
    fn get_summary(&self, term: &str) -> Result<String>;

    /// Every known tag, comma-joined.
    fn get_subjects(&self) -> Result<String>;

    /// Every known tag mapped to the records filed under it.
    fn get_subjects_dictionary(&self) -> Result<BTreeMap<String, Vec<String>>>;

    /// File a new record. Rejections come back as `Ok` with `added == false`.
    fn add_item(&self, package: &ItemPackage) -> Result<AddItemResult>;
}

/// [`KnowledgeStore`] over a shared SQLite connection.
#[derive(Clone)]
pub struct SqliteStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open (or create) the database at `path`.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::new(crate::db::open_database(path)?))
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.db
            .lock()
            .map_err(|e| anyhow::anyhow!("db lock poisoned: {e}"))
    }
}

impl KnowledgeStore for SqliteStore {
    fn get_summary(&self, term: &str) -> Result<String> {
        query::get_summary(&*self.conn()?, term)
    }

    fn get_subjects(&self) -> Result<String> {
        query::get_subjects(&*self.conn()?)
    }

    fn get_subjects_dictionary(&self) -> Result<BTreeMap<String, Vec<String>>> {
        query::get_subjects_dictionary(&*self.conn()?)
    }

    fn add_item(&self, package: &ItemPackage) -> Result<AddItemResult> {
        let mut conn = self.conn()?;
        let result = items::add_item(&mut conn, package)?;
        tracing::info!(
            content = %package.content,
            added = result.added,
            reason = %result.reason,
            "add_item finished"
        );
        Ok(result)
    }
}
