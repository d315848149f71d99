//! The chat bot: packet filter, command grammar, dispatcher, and the run loop tying
//! them to a [`Transport`].

pub mod command;
pub mod dispatcher;
pub mod filter;
pub mod messages;

use std::future::Future;

use crate::transport::{InboundPacket, MessageCategory, Transport, TransportError};

pub use command::ParsedCommand;
pub use dispatcher::Dispatcher;
pub use filter::PacketFilter;
pub use messages::CommandSettings;

/// Owns the connection and answers commands one packet at a time.
pub struct Bot<T: Transport> {
    transport: T,
    filter: PacketFilter,
    dispatcher: Dispatcher,
}

impl<T: Transport> Bot<T> {
    pub fn new(transport: T, filter: PacketFilter, dispatcher: Dispatcher) -> Self {
        Self {
            transport,
            filter,
            dispatcher,
        }
    }

    /// Handle one packet. Returns whether a reply was sent.
    pub async fn handle_packet(&mut self, packet: InboundPacket) -> Result<bool, TransportError> {
        if !self.filter.should_handle(&packet) {
            tracing::trace!(sender = ?packet.id, "packet filtered out");
            return Ok(false);
        }
        let Some(message) = packet.message.as_deref() else {
            return Ok(false);
        };

        let body = self.filter.command_body(message).to_string();
        tracing::info!(sender = ?packet.id, body = %body, "command received");

        // Store calls are blocking SQLite work.
        let dispatcher = self.dispatcher.clone();
        let reply = match tokio::task::spawn_blocking(move || dispatcher.dispatch(&body)).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "command task failed");
                messages::store_unavailable(&self.dispatcher.settings().help_text)
            }
        };

        self.transport
            .send(MessageCategory::ChatMessage, &reply)
            .await?;
        Ok(true)
    }

    /// Serve packets in arrival order until `shutdown` resolves or the transport fails.
    ///
    /// `shutdown` is only observed between packets, so a reply is never cut short.
    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) -> Result<(), TransportError> {
        tokio::pin!(shutdown);

        loop {
            let packet = tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("received interrupt, closing bot");
                    return Ok(());
                }
                packet = self.transport.recv() => packet?,
            };

            let Some(packet) = packet else {
                tracing::warn!("relay closed the connection");
                return Err(TransportError::Closed);
            };

            self.handle_packet(packet).await?;
        }
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
