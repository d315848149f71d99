//! CLI `exec` command: run one bot command against the local store.

use anyhow::Result;
use arcadia_bot::bot::{CommandSettings, Dispatcher};
use arcadia_bot::config::BotConfig;
use arcadia_bot::store::SqliteStore;
use std::sync::Arc;

/// Dispatch `body` exactly as the bot would and print the reply.
pub fn exec(config: &BotConfig, body: &str) -> Result<()> {
    let store = SqliteStore::open(config.resolved_db_path())?;
    let dispatcher = Dispatcher::new(Arc::new(store), CommandSettings::default());

    println!("{}", dispatcher.dispatch(body.trim()));
    Ok(())
}
