use arcadia_bot::db;
use arcadia_bot::store::{KnowledgeStore, SqliteStore};
use tempfile::TempDir;

#[test]
fn open_creates_new_db_at_nonexistent_path() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("subdir").join("new.db");

    // Should not exist yet
    assert!(!db_path.exists());

    let conn = db::open_database(&db_path).unwrap();

    // Should have been created
    assert!(db_path.exists());

    // Should be functional
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn health_check_passes_on_valid_db() {
    let conn = db::open_memory_database().unwrap();

    let report = db::check_database_health(&conn).unwrap();
    assert!(report.integrity_ok);
    assert_eq!(report.schema_version, db::migrations::CURRENT_SCHEMA_VERSION);
    assert_eq!(report.item_count, 0);
    assert_eq!(report.tag_count, 0);
    assert_eq!(report.log_count, 0);
}

#[test]
fn busy_timeout_is_set() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("test.db");

    let conn = db::open_database(&db_path).unwrap();

    let timeout: i64 = conn
        .pragma_query_value(None, "busy_timeout", |row| row.get(0))
        .unwrap();
    assert_eq!(timeout, 5000);
}

#[test]
fn records_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("arcadia.db");

    {
        let store = SqliteStore::open(&db_path).unwrap();
        let package = arcadia_bot::store::types::ItemPackage::url(
            "https://example.com/persist",
            vec!["keep".into()],
        );
        assert!(store.add_item(&package).unwrap().added);
    }

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.get_subjects().unwrap(), "keep");
    assert!(store
        .get_summary("keep")
        .unwrap()
        .contains("https://example.com/persist"));
}
