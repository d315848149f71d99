//! Write path: validation, duplicate detection, storage, and audit logging.
//!
//! [`add_item`] is the single entry point. It runs inside a transaction: reject
//! malformed packages, look for an existing item with the same content, insert
//! the item and its tag edges, and write an audit log row.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use crate::store::types::{AddItemResult, ItemPackage, StoredRecord};

/// Full write path: validate → duplicate check → insert item → tag edges → audit log.
///
/// Rejections are reported through [`AddItemResult`]; `Err` is reserved for database faults.
pub fn add_item(conn: &mut Connection, package: &ItemPackage) -> Result<AddItemResult> {
    let tx = conn.transaction()?;

    if package.content.trim().is_empty() {
        write_audit_log(
            &tx,
            "reject",
            None,
            Some(&serde_json::json!({"reason": "empty_content"})),
        )?;
        tx.commit()?;
        return Ok(AddItemResult::rejected());
    }

    if package.tags.is_empty() || package.tags.iter().any(|tag| tag.is_empty()) {
        write_audit_log(
            &tx,
            "reject",
            None,
            Some(&serde_json::json!({"reason": "empty_string_tag", "tags": &package.tags})),
        )?;
        tx.commit()?;
        return Ok(AddItemResult::empty_string_tag(package.tags.clone()));
    }

    if let Some(existing) = find_by_content(&tx, &package.content)? {
        tracing::debug!(content = %package.content, "item already archived");
        write_audit_log(
            &tx,
            "reject",
            None,
            Some(&serde_json::json!({"reason": "item_duplicate", "content": &package.content})),
        )?;
        tx.commit()?;
        return Ok(AddItemResult::duplicate(vec![existing]));
    }

    let id = uuid::Uuid::now_v7().to_string();
    insert_item(&tx, &id, package)?;
    for (position, tag) in package.tags.iter().enumerate() {
        insert_tag_edge(&tx, &id, tag, position)?;
    }
    write_audit_log(
        &tx,
        "create",
        Some(&id),
        Some(&serde_json::json!({"tags": &package.tags})),
    )?;

    tx.commit()?;
    Ok(AddItemResult::added())
}

/// Look up an item by exact content, with its tags in filing order.
pub fn find_by_content(conn: &Connection, content: &str) -> Result<Option<StoredRecord>> {
    let id: Option<String> = conn
        .query_row(
            "SELECT id FROM items WHERE content = ?1",
            params![content],
            |row| row.get(0),
        )
        .optional()?;

    let Some(id) = id else {
        return Ok(None);
    };

    Ok(Some(StoredRecord {
        content: content.to_string(),
        tags: tags_for_item(conn, &id)?,
    }))
}

/// Tags of one item, in the order they were submitted.
pub(crate) fn tags_for_item(conn: &Connection, item_id: &str) -> Result<Vec<String>> {
    let mut stmt =
        conn.prepare_cached("SELECT tag FROM item_tags WHERE item_id = ?1 ORDER BY position")?;
    let tags = stmt
        .query_map(params![item_id], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tags)
}

fn insert_item(conn: &Transaction, id: &str, package: &ItemPackage) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO items (id, data_type, content, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![id, package.data_type.as_str(), package.content, now],
    )?;
    Ok(())
}

/// Register the tag if new, then link it to the item. A tag repeated within
/// one package keeps its first position.
fn insert_tag_edge(conn: &Transaction, item_id: &str, tag: &str, position: usize) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT OR IGNORE INTO tags (name, created_at) VALUES (?1, ?2)",
        params![tag, now],
    )?;
    conn.execute(
        "INSERT OR IGNORE INTO item_tags (item_id, tag, position) VALUES (?1, ?2, ?3)",
        params![item_id, tag, position as i64],
    )?;
    Ok(())
}

/// Write an entry to the item_log audit table.
fn write_audit_log(
    conn: &Connection,
    operation: &str,
    item_id: Option<&str>,
    details: Option<&serde_json::Value>,
) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    let details_json = details.map(|d| d.to_string());
    conn.execute(
        "INSERT INTO item_log (operation, item_id, details, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![operation, item_id, details_json, now],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::AddReason;

    fn test_db() -> Connection {
        crate::db::open_memory_database().unwrap()
    }

    fn tags(raw: &str) -> Vec<String> {
        raw.split(',').map(String::from).collect()
    }

    #[test]
    fn test_add_new_item() {
        let mut conn = test_db();
        let package = ItemPackage::url("https://www.rust-lang.org", tags("rust,lang"));

        let result = add_item(&mut conn, &package).unwrap();
        assert!(result.added);
        assert_eq!(result.reason, AddReason::Success);
        assert!(result.conflicting_data.is_none());

        let stored = find_by_content(&conn, "https://www.rust-lang.org")
            .unwrap()
            .unwrap();
        assert_eq!(stored.tags, vec!["rust", "lang"]);

        let log_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM item_log WHERE operation = 'create'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(log_count, 1);
    }

    #[test]
    fn test_duplicate_reports_existing_tags() {
        let mut conn = test_db();
        add_item(
            &mut conn,
            &ItemPackage::url("https://docs.rs", tags("rust,docs")),
        )
        .unwrap();

        let result = add_item(
            &mut conn,
            &ItemPackage::url("https://docs.rs", tags("reference")),
        )
        .unwrap();

        assert!(!result.added);
        assert_eq!(result.reason, AddReason::ItemDuplicate);
        let conflicts = result.conflicting_data.unwrap();
        assert_eq!(conflicts[0].content, "https://docs.rs");
        assert_eq!(conflicts[0].tags, vec!["rust", "docs"]);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "duplicate must not be inserted");
    }

    #[test]
    fn test_empty_tag_is_rejected() {
        let mut conn = test_db();
        let result = add_item(
            &mut conn,
            &ItemPackage::url("https://crates.io", tags("rust,,crates")),
        )
        .unwrap();

        assert!(!result.added);
        assert_eq!(result.reason, AddReason::EmptyStringTag);
        assert_eq!(result.offending_tags.unwrap(), vec!["rust", "", "crates"]);
        assert!(find_by_content(&conn, "https://crates.io").unwrap().is_none());
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let mut conn = test_db();
        let result = add_item(&mut conn, &ItemPackage::url("  ", tags("misc"))).unwrap();
        assert!(!result.added);
        assert_eq!(result.reason, AddReason::Other);
    }

    #[test]
    fn test_repeated_tag_collapses() {
        let mut conn = test_db();
        let result = add_item(
            &mut conn,
            &ItemPackage::url("https://tokio.rs", tags("async,rust,async")),
        )
        .unwrap();
        assert!(result.added);

        let stored = find_by_content(&conn, "https://tokio.rs").unwrap().unwrap();
        assert_eq!(stored.tags, vec!["async", "rust"]);
    }

    #[test]
    fn test_untrimmed_tags_are_kept_verbatim() {
        let mut conn = test_db();
        add_item(
            &mut conn,
            &ItemPackage::url("https://serde.rs", tags("serde, json")),
        )
        .unwrap();

        let stored = find_by_content(&conn, "https://serde.rs").unwrap().unwrap();
        assert_eq!(stored.tags, vec!["serde", " json"]);
    }
}
