//! Decides which relay packets are commands addressed to the bot.

use crate::transport::{InboundPacket, MessageCategory};

#[derive(Debug, Clone)]
pub struct PacketFilter {
    prefix: String,
    ignored_senders: Vec<String>,
}

impl PacketFilter {
    /// `ignored_senders` must include the bot's own id and the relay's id, or the
    /// bot will answer itself.
    pub fn new(prefix: impl Into<String>, ignored_senders: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ignored_senders,
        }
    }

    /// True only for chat text from someone else that opens with the command prefix.
    pub fn should_handle(&self, packet: &InboundPacket) -> bool {
        let (Some(sender), Some(message), Some(MessageCategory::ChatMessage)) =
            (packet.id.as_deref(), packet.message.as_deref(), packet.category)
        else {
            return false;
        };

        if self.ignored_senders.iter().any(|ignored| ignored == sender) {
            tracing::trace!(sender, "ignoring packet from reserved sender");
            return false;
        }

        message.starts_with(&self.prefix)
    }

    /// The command text after the prefix, trimmed. Empty when the message is only the prefix.
    pub fn command_body<'a>(&self, message: &'a str) -> &'a str {
        message
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(message)
            .trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> PacketFilter {
        PacketFilter::new("/arc", vec!["wh00t_server".into(), "arcadia_bot".into()])
    }

    #[test]
    fn admits_prefixed_chat_from_user() {
        assert!(filter().should_handle(&InboundPacket::chat("alice", "/arc tags plant")));
        assert!(filter().should_handle(&InboundPacket::chat("alice", "/arc")));
    }

    #[test]
    fn rejects_reserved_senders_whatever_the_content() {
        let f = filter();
        for sender in ["wh00t_server", "arcadia_bot"] {
            assert!(!f.should_handle(&InboundPacket::chat(sender, "/arc tags")));
            assert!(!f.should_handle(&InboundPacket::chat(sender, "/arc")));
        }
    }

    #[test]
    fn rejects_missing_fields() {
        let f = filter();

        let mut no_sender = InboundPacket::chat("alice", "/arc tags");
        no_sender.id = None;
        assert!(!f.should_handle(&no_sender));

        let mut no_message = InboundPacket::chat("alice", "/arc tags");
        no_message.message = None;
        assert!(!f.should_handle(&no_message));

        let mut no_category = InboundPacket::chat("alice", "/arc tags");
        no_category.category = None;
        assert!(!f.should_handle(&no_category));

        assert!(!f.should_handle(&InboundPacket::default()));
    }

    #[test]
    fn rejects_other_categories() {
        let mut packet = InboundPacket::chat("alice", "/arc tags");
        packet.category = Some(MessageCategory::Other);
        assert!(!filter().should_handle(&packet));
    }

    #[test]
    fn rejects_chat_without_leading_prefix() {
        let f = filter();
        assert!(!f.should_handle(&InboundPacket::chat("alice", "hello there")));
        assert!(!f.should_handle(&InboundPacket::chat("alice", " /arc tags")));
        assert!(!f.should_handle(&InboundPacket::chat("alice", "try /arc tags")));
    }

    #[test]
    fn command_body_strips_prefix_and_whitespace() {
        let f = filter();
        assert_eq!(f.command_body("/arc tags plant  "), "tags plant");
        assert_eq!(f.command_body("/arc"), "");
        assert_eq!(f.command_body("/arc    "), "");
        assert_eq!(f.command_body("/arc  rust"), "rust");
    }
}
