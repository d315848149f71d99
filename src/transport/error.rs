use thiserror::Error;

/// Faults at the relay connection. None of these are recoverable by the bot.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {addr}, {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Send error: {0}")]
    Send(#[source] std::io::Error),

    #[error("Receive error: {0}")]
    Receive(#[source] std::io::Error),

    #[error("Connection closed by relay")]
    Closed,
}
