use crate::error::DecodeError;
use crate::payload::{decode_variant, FieldReader, TaggedUnion, TdObject};
use crate::{ChatId, MessageId, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Who originally sent a forwarded message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageForwardOrigin {
    /// Originally sent by a known user
    User {
        /// Identifier of the user
        sender_user_id: UserId,
    },
    /// Originally sent by an anonymous chat administrator
    Chat {
        /// Identifier of the chat
        sender_chat_id: ChatId,
        /// Original author signature
        author_signature: String,
    },
    /// Originally sent by a user who hides the link to their account
    HiddenUser {
        /// Name of the sender
        sender_name: String,
    },
    /// Originally a channel post
    Channel {
        /// Identifier of the channel
        chat_id: ChatId,
        /// Identifier of the original post
        message_id: MessageId,
        /// Original post author signature
        author_signature: String,
    },
}

impl TdObject for MessageForwardOrigin {
    const TYPE_NAME: &'static str = "MessageForwardOrigin";

    fn decode(payload: &Value) -> Result<Self, DecodeError> {
        decode_variant(payload)
    }
}

impl TaggedUnion for MessageForwardOrigin {
    const VARIANTS: &'static [&'static str] = &["user", "chat", "hidden_user", "channel"];
}

/// Forwarding details of a message
///
/// Read-only like [`Message`](crate::Message); the source fields are set
/// through the consuming `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageForwardInfo {
    origin: MessageForwardOrigin,
    date: i32,
    public_service_announcement_type: String,
    from_chat_id: ChatId,
    from_message_id: MessageId,
}

impl MessageForwardInfo {
    #[must_use]
    pub fn new(origin: MessageForwardOrigin, date: i32) -> Self {
        Self {
            origin,
            date,
            public_service_announcement_type: String::new(),
            from_chat_id: 0,
            from_message_id: 0,
        }
    }

    /// Record the chat and message this was last forwarded from
    #[must_use]
    pub fn with_source(mut self, chat_id: ChatId, message_id: MessageId) -> Self {
        self.from_chat_id = chat_id;
        self.from_message_id = message_id;
        self
    }

    #[must_use]
    pub fn with_public_service_announcement(mut self, kind: impl Into<String>) -> Self {
        self.public_service_announcement_type = kind.into();
        self
    }

    /// Origin of the forwarded message
    #[must_use]
    pub fn origin(&self) -> &MessageForwardOrigin {
        &self.origin
    }

    /// Unix timestamp of the original message
    #[must_use]
    pub fn date(&self) -> i32 {
        self.date
    }

    /// Public service announcement type; empty for ordinary forwards
    #[must_use]
    pub fn public_service_announcement_type(&self) -> &str {
        &self.public_service_announcement_type
    }

    /// Chat the message was forwarded from last time; 0 if unknown
    #[must_use]
    pub fn from_chat_id(&self) -> ChatId {
        self.from_chat_id
    }

    /// Message identifier in `from_chat_id`; 0 if unknown
    #[must_use]
    pub fn from_message_id(&self) -> MessageId {
        self.from_message_id
    }

    #[must_use]
    pub fn is_public_service_announcement(&self) -> bool {
        !self.public_service_announcement_type.is_empty()
    }
}

impl TdObject for MessageForwardInfo {
    const TYPE_NAME: &'static str = "MessageForwardInfo";

    fn decode(payload: &Value) -> Result<Self, DecodeError> {
        let reader = FieldReader::new(Self::TYPE_NAME, payload)?;
        Ok(Self {
            origin: reader.required_object("origin")?,
            date: reader.required("date")?,
            public_service_announcement_type: reader.required("public_service_announcement_type")?,
            from_chat_id: reader.required("from_chat_id")?,
            from_message_id: reader.required("from_message_id")?,
        })
    }
}

impl<'de> Deserialize<'de> for MessageForwardInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}
