//! TCP client for the chat relay.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use super::packet::{decode_bytes, InboundPacket, MessageCategory, OutboundPacket};
use super::{Transport, TransportError};

/// Who this client says it is on every outbound packet.
#[derive(Debug, Clone)]
pub struct ClientIdentity {
    pub id: String,
    pub profile: String,
}

/// Newline-delimited JSON connection to the relay.
pub struct SocketClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    identity: ClientIdentity,
}

impl SocketClient {
    pub async fn connect(
        host: &str,
        port: u16,
        identity: ClientIdentity,
    ) -> Result<Self, TransportError> {
        let addr = format!("{host}:{port}");
        let stream = TcpStream::connect(&addr)
            .await
            .map_err(|source| TransportError::Connect {
                addr: addr.clone(),
                source,
            })?;
        stream.set_nodelay(true).ok();
        tracing::info!(addr = %addr, id = %identity.id, "connected to relay");

        let (read, writer) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read),
            writer,
            identity,
        })
    }
}

#[async_trait]
impl Transport for SocketClient {
    async fn recv(&mut self) -> Result<Option<InboundPacket>, TransportError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = self
                .reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(TransportError::Receive)?;
            if n == 0 {
                return Ok(None);
            }
            if let Some(packet) = decode_bytes(&buf) {
                return Ok(Some(packet));
            }
        }
    }

    async fn send(&mut self, category: MessageCategory, text: &str) -> Result<(), TransportError> {
        let packet = OutboundPacket {
            id: &self.identity.id,
            profile: &self.identity.profile,
            category,
            message: text,
            time: chrono::Local::now().format("%m/%d|%H:%M").to_string(),
        };
        let mut line = serde_json::to_string(&packet)
            .map_err(|e| TransportError::Send(std::io::Error::other(e)))?;
        line.push('\n');

        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(TransportError::Send)?;
        self.writer.flush().await.map_err(TransportError::Send)?;
        Ok(())
    }
}
