//! Sending and scheduling states attached to a message
//!
//! The transitions between these states are driven by TDLib; a message only
//! carries the current one.

use crate::error::DecodeError;
use crate::number::Double;
use crate::payload::{decode_variant, TaggedUnion, TdObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sending state of an outgoing message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageSendingState {
    /// The message is being sent now
    Pending,
    /// The message failed to be sent
    Failed {
        /// Error code returned by the server
        error_code: i32,
        /// Error message returned by the server
        error_message: String,
        /// True, if the message can be re-sent
        can_retry: bool,
        /// Seconds to wait before the message can be re-sent
        retry_after: Double,
    },
}

impl TdObject for MessageSendingState {
    const TYPE_NAME: &'static str = "MessageSendingState";

    fn decode(payload: &Value) -> Result<Self, DecodeError> {
        decode_variant(payload)
    }
}

impl TaggedUnion for MessageSendingState {
    const VARIANTS: &'static [&'static str] = &["pending", "failed"];
}

/// When a scheduled message will be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageSchedulingState {
    /// Sent at a fixed point in time
    SendAtDate {
        /// Unix timestamp
        send_date: i32,
    },
    /// Sent once the peer comes online
    SendWhenOnline,
}

impl TdObject for MessageSchedulingState {
    const TYPE_NAME: &'static str = "MessageSchedulingState";

    fn decode(payload: &Value) -> Result<Self, DecodeError> {
        decode_variant(payload)
    }
}

impl TaggedUnion for MessageSchedulingState {
    const VARIANTS: &'static [&'static str] = &["send_at_date", "send_when_online"];
}
