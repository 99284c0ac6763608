//! TDLib Types - Typed values for TDLib message payloads
//!
//! Models the `message` object of the TDLib JSON interface and the values it
//! carries, with decoding from and encoding to JSON payloads.
//!
//! ## Payload shape
//!
//! - Records are JSON objects keyed by field name
//! - Polymorphic values carry a `type` discriminator in snake_case
//!   (`{"type": "user", "user_id": 42}`)
//! - Absent optional fields are omitted; `null` decodes as absent
//!
//! Decoding is all-or-nothing and reports the offending field through
//! [`DecodeError::field_path`].

pub mod content;
pub mod error;
pub mod forward;
pub mod markup;
pub mod message;
pub mod number;
pub mod payload;
pub mod sender;
pub mod state;

/// Message identifier, unique within a chat
pub type MessageId = i64;

/// Chat identifier
pub type ChatId = i64;

/// User identifier
pub type UserId = i64;

pub use content::{MessageContent, OtherContent};
pub use error::{DecodeError, EncodeError};
pub use forward::{MessageForwardInfo, MessageForwardOrigin};
pub use markup::{
    InlineKeyboardButton, InlineKeyboardButtonType, KeyboardButton, KeyboardButtonType,
    ReplyMarkup,
};
pub use message::{Message, MessageBuilder};
pub use number::Double;
pub use payload::{Payload, TaggedUnion, TdObject, DISCRIMINATOR};
pub use sender::MessageSender;
pub use state::{MessageSchedulingState, MessageSendingState};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{DecodeError, Message, MessageContent, MessageSender, TdObject};
}
