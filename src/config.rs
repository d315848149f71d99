use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BotConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub storage: StorageConfig,
}

/// Where the chat relay lives and how loud we log.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// How the bot identifies itself on the relay.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub id: String,
    pub profile: String,
    /// Sender ids whose packets are never treated as commands (the relay itself, other bots).
    pub ignored_senders: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            log_level: "info".into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            id: "arcadia_bot".into(),
            profile: "app".into(),
            ignored_senders: vec!["wh00t_server".into()],
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_arcadia_dir()
            .join("arcadia.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

/// Returns `~/.arcadia/`, or `./.arcadia/` when no home directory can be found.
pub fn default_arcadia_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".arcadia")
}

/// Returns the default config file path: `~/.arcadia/config.toml`
pub fn default_config_path() -> PathBuf {
    default_arcadia_dir().join("config.toml")
}

impl BotConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            BotConfig::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides (HOST_SERVER_ADDRESS, SOCKET_SERVER_PORT,
    /// SQL_LITE_DB, ARCADIA_LOG_LEVEL).
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HOST_SERVER_ADDRESS") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("SOCKET_SERVER_PORT") {
            self.server.port = val
                .trim()
                .parse()
                .with_context(|| format!("SOCKET_SERVER_PORT is not a valid port: {val:?}"))?;
        }
        if let Ok(val) = std::env::var("SQL_LITE_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("ARCADIA_LOG_LEVEL") {
            self.server.log_level = val;
        }
        Ok(())
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// Every sender id the packet filter must ignore. Always includes the bot's own id.
    pub fn ignored_senders(&self) -> Vec<String> {
        let mut senders = self.client.ignored_senders.clone();
        if !senders.contains(&self.client.id) {
            senders.push(self.client.id.clone());
        }
        senders
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
