//! Reply markup: custom keyboards and inline keyboards

use crate::error::DecodeError;
use crate::payload::{decode_variant, TaggedUnion, TdObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a custom keyboard button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeyboardButtonType {
    /// Sends the button text
    Text,
    /// Shares the user's phone number
    RequestPhoneNumber,
    /// Shares the user's location
    RequestLocation,
    /// Asks the user to create a poll
    RequestPoll {
        /// Only regular polls may be created
        force_regular: bool,
        /// Only quizzes may be created
        force_quiz: bool,
    },
}

/// A button of a custom reply keyboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    /// Button label
    pub text: String,
    /// Button behaviour
    #[serde(rename = "type")]
    pub kind: KeyboardButtonType,
}

/// What an inline keyboard button does when pressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineKeyboardButtonType {
    /// Opens a URL
    Url {
        /// HTTP or tg:// URL
        url: String,
    },
    /// Sends a callback query to the bot
    Callback {
        /// Base64-encoded callback data
        data: String,
    },
    /// Switches the user to inline mode
    SwitchInline {
        /// Inline query to insert
        query: String,
        /// Stay in the current chat
        in_current_chat: bool,
    },
    /// Pays for an invoice
    Buy,
}

/// A button of an inline keyboard attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Button label
    pub text: String,
    /// Button behaviour
    #[serde(rename = "type")]
    pub kind: InlineKeyboardButtonType,
}

/// Reply markup attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyMarkup {
    /// Hide any custom keyboard
    RemoveKeyboard {
        /// Only for mentioned users and the replied-to sender
        is_personal: bool,
    },
    /// Force the client to reply to this message
    ForceReply {
        /// Only for mentioned users and the replied-to sender
        is_personal: bool,
    },
    /// Show a custom keyboard
    ShowKeyboard {
        /// Button rows
        rows: Vec<Vec<KeyboardButton>>,
        /// Resize the keyboard vertically to fit
        resize_keyboard: bool,
        /// Hide after the first use
        one_time: bool,
        /// Only for mentioned users and the replied-to sender
        is_personal: bool,
    },
    /// Inline keyboard below the message
    InlineKeyboard {
        /// Button rows
        rows: Vec<Vec<InlineKeyboardButton>>,
    },
}

impl ReplyMarkup {
    /// Number of buttons across all rows
    #[must_use]
    pub fn button_count(&self) -> usize {
        match self {
            Self::RemoveKeyboard { .. } | Self::ForceReply { .. } => 0,
            Self::ShowKeyboard { rows, .. } => rows.iter().map(Vec::len).sum(),
            Self::InlineKeyboard { rows } => rows.iter().map(Vec::len).sum(),
        }
    }
}

impl TdObject for ReplyMarkup {
    const TYPE_NAME: &'static str = "ReplyMarkup";

    fn decode(payload: &Value) -> Result<Self, DecodeError> {
        decode_variant(payload)
    }
}

impl TaggedUnion for ReplyMarkup {
    const VARIANTS: &'static [&'static str] = &[
        "remove_keyboard",
        "force_reply",
        "show_keyboard",
        "inline_keyboard",
    ];
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_keyboard() {
        let payload = json!({
            "type": "inline_keyboard",
            "rows": [
                [
                    {"text": "Docs", "type": {"type": "url", "url": "https://core.telegram.org"}},
                    {"text": "Like", "type": {"type": "callback", "data": "bGlrZQ=="}}
                ],
                [
                    {"text": "Share", "type": {"type": "switch_inline", "query": "", "in_current_chat": false}}
                ]
            ]
        });

        let markup = ReplyMarkup::decode(&payload).unwrap();
        assert_eq!(markup.button_count(), 3);
        assert_eq!(markup.encode().unwrap(), payload);
    }

    #[test]
    fn test_show_keyboard() {
        let payload = json!({
            "type": "show_keyboard",
            "rows": [[
                {"text": "Phone", "type": {"type": "request_phone_number"}},
                {"text": "Poll", "type": {"type": "request_poll", "force_regular": false, "force_quiz": true}}
            ]],
            "resize_keyboard": true,
            "one_time": true,
            "is_personal": false
        });

        let markup = ReplyMarkup::decode(&payload).unwrap();
        let ReplyMarkup::ShowKeyboard { rows, .. } = &markup else {
            panic!("Expected ShowKeyboard");
        };
        assert_eq!(rows[0][0].kind, KeyboardButtonType::RequestPhoneNumber);
        assert_eq!(markup.encode().unwrap(), payload);
    }

    #[test]
    fn test_bad_button_is_invalid_variant() {
        let payload = json!({
            "type": "inline_keyboard",
            "rows": [[{"text": "?", "type": {"type": "teleport"}}]]
        });
        let err = ReplyMarkup::decode(&payload).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidVariant { ref discriminator, .. } if discriminator == "inline_keyboard"
        ));
    }

    #[test]
    fn test_force_reply() {
        let markup = ReplyMarkup::decode(&json!({"type": "force_reply", "is_personal": true})).unwrap();
        assert_eq!(markup, ReplyMarkup::ForceReply { is_personal: true });
        assert_eq!(markup.button_count(), 0);
    }
}
