use crate::error::DecodeError;
use crate::number::Double;
use crate::payload::{decode_variant, Payload, TaggedUnion, TdObject, DISCRIMINATOR};
use crate::{MessageId, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Content of a message
///
/// Kinds without a variant of their own decode as [`MessageContent::Other`],
/// keeping every field so the payload encodes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    /// A text message
    Text {
        /// Message text
        text: String,
    },
    /// A point on the map, live if `live_period` is non-zero
    Location {
        /// Latitude in degrees
        latitude: Double,
        /// Longitude in degrees
        longitude: Double,
        /// Seconds the location is updated for; 0 if static
        live_period: i32,
        /// Seconds left before live updates stop
        expires_in: i32,
    },
    /// A shared contact
    Contact {
        /// Phone number of the contact
        phone_number: String,
        /// First name of the contact
        first_name: String,
        /// Last name of the contact
        last_name: String,
        /// Telegram user id of the contact; 0 if unknown
        user_id: UserId,
    },
    /// An animated emoji with a random value
    Dice {
        /// The dice emoji
        emoji: String,
        /// Rolled value; 0 until the roll finishes
        value: i32,
    },
    /// The chat title was changed
    ChatChangeTitle {
        /// New title
        title: String,
    },
    /// A message was pinned
    PinMessage {
        /// Identifier of the pinned message
        message_id: MessageId,
    },
    /// A screenshot of a secret chat message was taken
    ScreenshotTaken,
    /// Content TDLib could not represent
    Unsupported,
    /// Any other content kind (photo, video, document, sticker, ...)
    #[serde(untagged)]
    Other(OtherContent),
}

/// Raw payload of a content kind without a dedicated variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OtherContent {
    fields: Payload,
}

impl OtherContent {
    /// Wrap a payload whose `type` is a string naming an unmodelled kind
    #[must_use]
    pub fn from_fields(fields: Payload) -> Option<Self> {
        match fields.get(DISCRIMINATOR) {
            Some(Value::String(kind)) if !MessageContent::VARIANTS.contains(&kind.as_str()) => {
                Some(Self { fields })
            }
            _ => None,
        }
    }

    /// The content's `type` discriminator
    #[must_use]
    pub fn kind(&self) -> &str {
        self.fields
            .get(DISCRIMINATOR)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Every field of the payload, `type` included
    #[must_use]
    pub fn fields(&self) -> &Payload {
        &self.fields
    }
}

impl<'de> Deserialize<'de> for OtherContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Payload::deserialize(deserializer)?;
        Self::from_fields(fields).ok_or_else(|| {
            serde::de::Error::custom("content `type` is missing or names a modelled kind")
        })
    }
}

impl MessageContent {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The discriminator of this content
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Location { .. } => "location",
            Self::Contact { .. } => "contact",
            Self::Dice { .. } => "dice",
            Self::ChatChangeTitle { .. } => "chat_change_title",
            Self::PinMessage { .. } => "pin_message",
            Self::ScreenshotTaken => "screenshot_taken",
            Self::Unsupported => "unsupported",
            Self::Other(other) => other.kind(),
        }
    }

    /// Text body for text content
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }

    /// True for service messages generated by chat events
    #[must_use]
    pub fn is_service(&self) -> bool {
        matches!(
            self,
            Self::ChatChangeTitle { .. } | Self::PinMessage { .. } | Self::ScreenshotTaken
        )
    }
}

impl TdObject for MessageContent {
    const TYPE_NAME: &'static str = "MessageContent";

    fn decode(payload: &Value) -> Result<Self, DecodeError> {
        match decode_variant(payload) {
            Err(err @ DecodeError::UnknownDiscriminator { .. }) => payload
                .as_object()
                .and_then(|fields| OtherContent::from_fields(fields.clone()))
                .map(Self::Other)
                .ok_or(err),
            decoded => decoded,
        }
    }
}

impl TaggedUnion for MessageContent {
    const VARIANTS: &'static [&'static str] = &[
        "text",
        "location",
        "contact",
        "dice",
        "chat_change_title",
        "pin_message",
        "screenshot_taken",
        "unsupported",
    ];
}
