//! Connection to the chat relay.
//!
//! The bot's run loop only depends on the [`Transport`] trait; [`SocketClient`]
//! speaks newline-delimited JSON over TCP.

pub mod client;
pub mod error;
pub mod packet;

use async_trait::async_trait;

pub use client::{ClientIdentity, SocketClient};
pub use error::TransportError;
pub use packet::{InboundPacket, MessageCategory};

#[async_trait]
pub trait Transport: Send {
    /// Next packet from the relay, or `None` once the relay hangs up.
    async fn recv(&mut self) -> Result<Option<InboundPacket>, TransportError>;

    async fn send(&mut self, category: MessageCategory, text: &str) -> Result<(), TransportError>;
}
