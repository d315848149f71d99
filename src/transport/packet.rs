//! Wire packets exchanged with the chat relay.
//!
//! One JSON object per line. Every inbound field is optional; whether a packet
//! is worth acting on is decided by [`PacketFilter`](crate::bot::filter::PacketFilter).

use serde::{Deserialize, Serialize};

/// Kind of packet on the relay. Only chat text is acted on or sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    ChatMessage,
    /// Any category this client does not understand.
    #[serde(other)]
    Other,
}

impl MessageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChatMessage => "chat_message",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A packet as delivered by the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InboundPacket {
    /// Sender id.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub category: Option<MessageCategory>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl InboundPacket {
    /// Chat packet from `sender`, as a test or replay convenience.
    pub fn chat(sender: &str, message: &str) -> Self {
        Self {
            id: Some(sender.to_string()),
            category: Some(MessageCategory::ChatMessage),
            message: Some(message.to_string()),
            ..Self::default()
        }
    }
}

/// A packet sent by this client.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundPacket<'a> {
    pub id: &'a str,
    pub profile: &'a str,
    pub category: MessageCategory,
    pub message: &'a str,
    pub time: String,
}

/// Decode one line from the relay. `None` for anything that is not a packet.
pub fn decode_line(line: &str) -> Option<InboundPacket> {
    decode_bytes(line.as_bytes())
}

/// Decode one raw line from the relay, which may not be valid UTF-8.
pub fn decode_bytes(line: &[u8]) -> Option<InboundPacket> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_slice(line) {
        Ok(packet) => Some(packet),
        Err(e) => {
            tracing::debug!(error = %e, "dropping undecodable packet");
            None
        }
    }
}
