//! Read path: per-tag summaries and the tag index.

use anyhow::Result;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;

use crate::store::items::tags_for_item;
use crate::store::types::StoredRecord;

/// Indentation used for record lines in chat output.
const LINE_INDENT: &str = "     ";

/// Records filed under exactly `tag`, newest first.
pub fn records_by_tag(conn: &Connection, tag: &str) -> Result<Vec<StoredRecord>> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.content FROM items i \
         JOIN item_tags t ON t.item_id = i.id \
         WHERE t.tag = ?1 \
         ORDER BY i.created_at DESC, i.id DESC",
    )?;
    let rows = stmt
        .query_map(params![tag], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, content)| -> Result<StoredRecord> {
            Ok(StoredRecord {
                tags: tags_for_item(conn, &id)?,
                content,
            })
        })
        .collect()
}

/// Human-readable summary of everything filed under `term`.
pub fn get_summary(conn: &Connection, term: &str) -> Result<String> {
    let records = records_by_tag(conn, term)?;
    if records.is_empty() {
        return Ok(format!("*Nothing in Arcadia under '{term}'*"));
    }

    let lines: Vec<String> = records
        .iter()
        .map(|r| format!("{LINE_INDENT}{} [{}]", r.content, r.tags.join(", ")))
        .collect();
    Ok(format!(
        "*Arcadia summary for '{term}'*\n\n{}",
        lines.join("\n")
    ))
}

/// Every known tag, sorted, comma-joined.
pub fn get_subjects(conn: &Connection) -> Result<String> {
    let mut stmt = conn.prepare("SELECT name FROM tags ORDER BY name")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names.join(","))
}

/// Map of every known tag to the content of the items filed under it.
///
/// Tags whose items are all gone stay in the map with an empty list.
pub fn get_subjects_dictionary(conn: &Connection) -> Result<BTreeMap<String, Vec<String>>> {
    let mut dictionary: BTreeMap<String, Vec<String>> = BTreeMap::new();

    let mut stmt = conn.prepare(
        "SELECT tg.name, i.content FROM tags tg \
         LEFT JOIN item_tags t ON t.tag = tg.name \
         LEFT JOIN items i ON i.id = t.item_id \
         ORDER BY tg.name, i.created_at, i.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
    })?;

    for row in rows {
        let (tag, content) = row?;
        let entry = dictionary.entry(tag).or_default();
        if let Some(content) = content {
            entry.push(content);
        }
    }

    Ok(dictionary)
}
