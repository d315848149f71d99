//! CLI `doctor` command: run database diagnostics and print a health report.

use anyhow::{Context, Result};
use arcadia_bot::config::BotConfig;
use arcadia_bot::db;

pub fn doctor(config: &BotConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    if !db_path.exists() {
        println!("Database: not found at {}", db_path.display());
        println!("Run `arcadia-bot run` or `arcadia-bot exec` to initialize.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    let conn = db::open_database(&db_path).context("failed to open database (may be corrupt)")?;
    let report = db::check_database_health(&conn).context("failed to run health check")?;

    println!("Arcadia Health Report");
    println!("=====================");
    println!();
    println!("Database:          {}", db_path.display());
    println!("File size:         {} bytes", file_size);
    println!("Schema version:    {}", report.schema_version);
    println!();
    println!("Row counts:");
    println!("  Items:           {}", report.item_count);
    println!("  Tags:            {}", report.tag_count);
    println!("  Audit log:       {}", report.log_count);
    println!();
    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
        println!();
        println!("Recovery: restore {} from a backup.", db_path.display());
    }

    Ok(())
}
