//! Bot startup: open the store, connect to the relay, and serve until Ctrl-C.

use anyhow::{Context, Result};
use arcadia_bot::bot::{Bot, CommandSettings, Dispatcher, PacketFilter};
use arcadia_bot::config::BotConfig;
use arcadia_bot::store::SqliteStore;
use arcadia_bot::transport::{ClientIdentity, SocketClient};
use std::sync::Arc;

/// Resolves on Ctrl-C. If the signal handler cannot be installed, never resolves.
async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

/// Connect and answer commands. Returns `Ok` on interrupt, `Err` on transport failure.
pub async fn serve(config: BotConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let store = SqliteStore::open(&db_path)?;
    tracing::info!(db = %db_path.display(), "store ready");

    let settings = CommandSettings::default();
    let filter = PacketFilter::new(settings.prefix.clone(), config.ignored_senders());
    let dispatcher = Dispatcher::new(Arc::new(store), settings);

    let identity = ClientIdentity {
        id: config.client.id.clone(),
        profile: config.client.profile.clone(),
    };
    let transport = SocketClient::connect(&config.server.host, config.server.port, identity)
        .await
        .context("could not reach the chat relay")?;

    tracing::info!("Arcadia bot running, waiting for commands");
    let mut bot = Bot::new(transport, filter, dispatcher);
    bot.run(interrupt()).await.context("bot stopped")?;

    tracing::info!("Arcadia bot shut down");
    Ok(())
}
