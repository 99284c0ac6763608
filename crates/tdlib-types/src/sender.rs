use crate::error::DecodeError;
use crate::payload::{decode_variant, TaggedUnion, TdObject};
use crate::{ChatId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Originator of a message: a user, or a chat posting on its own behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageSender {
    /// Message was sent on behalf of a chat
    Chat {
        /// Identifier of the chat
        chat_id: ChatId,
    },
    /// Message was sent by a known user
    User {
        /// Identifier of the user
        user_id: UserId,
    },
}

impl MessageSender {
    #[must_use]
    pub fn chat(chat_id: ChatId) -> Self {
        Self::Chat { chat_id }
    }

    #[must_use]
    pub fn user(user_id: UserId) -> Self {
        Self::User { user_id }
    }

    /// The sending user, if this is the `User` variant
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User { user_id } => Some(*user_id),
            Self::Chat { .. } => None,
        }
    }

    /// The sending chat, if this is the `Chat` variant
    #[must_use]
    pub fn chat_id(&self) -> Option<ChatId> {
        match self {
            Self::Chat { chat_id } => Some(*chat_id),
            Self::User { .. } => None,
        }
    }
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat { chat_id } => write!(f, "chat {chat_id}"),
            Self::User { user_id } => write!(f, "user {user_id}"),
        }
    }
}

impl TdObject for MessageSender {
    const TYPE_NAME: &'static str = "MessageSender";

    fn decode(payload: &Value) -> Result<Self, DecodeError> {
        decode_variant(payload)
    }
}

impl TaggedUnion for MessageSender {
    const VARIANTS: &'static [&'static str] = &["chat", "user"];
}
