mod cli;
mod server;

use anyhow::Result;
use arcadia_bot::config::BotConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arcadia-bot", version, about = "Arcadia chat command bot")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Connect to the chat relay and answer commands until interrupted
    Run,
    /// Run one command against the local store and print the reply
    Exec {
        /// Command text without the prefix, e.g. `tags rust`
        command: Vec<String>,
    },
    /// Check the database and print a health report
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env is optional; real environment variables win.
    dotenvy::dotenv().ok();
    let config = BotConfig::load()?;

    // Log to stderr so `exec` output stays clean on stdout.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run => {
            server::serve(config).await?;
        }
        Command::Exec { command } => {
            cli::exec::exec(&config, &command.join(" "))?;
        }
        Command::Doctor => {
            cli::doctor::doctor(&config)?;
        }
    }

    Ok(())
}
