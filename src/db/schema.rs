//! SQL DDL for all Arcadia tables.
//!
//! Defines the `items`, `tags`, `item_tags`, `item_log`, and `schema_meta` tables.
//! All DDL uses `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

/// All schema DDL statements for Arcadia's core tables.
const SCHEMA_SQL: &str = r#"
-- Archived items (links)
CREATE TABLE IF NOT EXISTS items (
    id TEXT PRIMARY KEY,
    data_type TEXT NOT NULL CHECK(data_type IN ('url')),
    content TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

-- Tag universe; a tag outlives the items filed under it
CREATE TABLE IF NOT EXISTS tags (
    name TEXT PRIMARY KEY CHECK(length(name) > 0),
    created_at TEXT NOT NULL
);

-- Item <-> tag edges, in the order the tags were submitted
CREATE TABLE IF NOT EXISTS item_tags (
    item_id TEXT NOT NULL REFERENCES items(id) ON DELETE CASCADE,
    tag TEXT NOT NULL REFERENCES tags(name) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    PRIMARY KEY (item_id, tag)
);

-- Audit log
CREATE TABLE IF NOT EXISTS item_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    operation TEXT NOT NULL CHECK(operation IN ('create','reject')),
    item_id TEXT,
    details TEXT,
    created_at TEXT NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
