#![allow(dead_code)]

use arcadia_bot::bot::{CommandSettings, Dispatcher};
use arcadia_bot::db;
use arcadia_bot::store::types::ItemPackage;
use arcadia_bot::store::{KnowledgeStore, SqliteStore};
use std::sync::Arc;

/// Open a fresh in-memory store with schema and migrations applied.
pub fn test_store() -> SqliteStore {
    SqliteStore::new(db::open_memory_database().unwrap())
}

/// Dispatcher over a fresh in-memory store with default settings.
pub fn test_dispatcher() -> (Dispatcher, SqliteStore) {
    let store = test_store();
    let dispatcher = Dispatcher::new(Arc::new(store.clone()), CommandSettings::default());
    (dispatcher, store)
}

/// File `url` under the comma-separated `tags`, asserting it was added.
pub fn file_url(store: &SqliteStore, url: &str, tags: &str) {
    let package = ItemPackage::url(url, tags.split(',').map(String::from).collect());
    let result = store.add_item(&package).unwrap();
    assert!(result.added, "expected {url} to be added, got {:?}", result.reason);
}
