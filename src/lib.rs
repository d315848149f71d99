//! Arcadia chat bot: file, search and list tagged links from a chat relay.
//!
//! Users on the relay type commands prefixed with `/arc`:
//!
//! | Command | Effect |
//! |---------|--------|
//! | `/arc <tag>` | Summary of the links filed under `<tag>` |
//! | `/arc tags` | Every tag with its links |
//! | `/arc tags <text>` | Tags containing `<text>` |
//! | `/arc <url> <a,b,c>` | File `<url>` under tags `a`, `b`, `c` |
//!
//! Anything else gets the help text.
//!
//! # Modules
//!
//! - [`bot`]: Packet filter, command grammar, dispatcher, and the run loop
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`db`]: SQLite database initialization, schema, migrations, and health checks
//! - [`store`]: The tagged knowledge store the dispatcher talks to
//! - [`transport`]: Newline-delimited JSON connection to the chat relay

pub mod bot;
pub mod config;
pub mod db;
pub mod store;
pub mod transport;
