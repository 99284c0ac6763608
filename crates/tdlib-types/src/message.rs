use crate::content::MessageContent;
use crate::error::DecodeError;
use crate::forward::MessageForwardInfo;
use crate::markup::ReplyMarkup;
use crate::number::Double;
use crate::payload::{FieldReader, TdObject};
use crate::sender::MessageSender;
use crate::state::{MessageSchedulingState, MessageSendingState};
use crate::{ChatId, MessageId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A chat message
///
/// Immutable once built: fields are only readable. To change a message,
/// build a new one with [`Message::to_builder`].
///
/// Zero and empty values are sentinels only where TDLib defines them so
/// (`edit_date`, `reply_to_message_id`, `ttl`, `via_bot_user_id`,
/// `media_album_id`, `restriction_reason`). Fields that may be missing are
/// `Option`s and are omitted from the encoded payload when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    id: MessageId,
    sender: MessageSender,
    chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    sending_state: Option<MessageSendingState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheduling_state: Option<MessageSchedulingState>,
    is_outgoing: bool,
    can_be_edited: bool,
    can_be_forwarded: bool,
    can_be_deleted_only_for_self: bool,
    can_be_deleted_for_all_users: bool,
    is_channel_post: bool,
    contains_unread_mention: bool,
    date: i32,
    edit_date: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    forward_info: Option<MessageForwardInfo>,
    reply_to_message_id: MessageId,
    ttl: i32,
    ttl_expires_in: Double,
    via_bot_user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_signature: Option<String>,
    media_album_id: i64,
    restriction_reason: String,
    content: MessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<ReplyMarkup>,
}

impl Message {
    /// Start building a message from its identifying fields
    #[must_use]
    pub fn builder(
        id: MessageId,
        sender: MessageSender,
        chat_id: ChatId,
        content: MessageContent,
    ) -> MessageBuilder {
        MessageBuilder::new(id, sender, chat_id, content)
    }

    /// A builder seeded with every field of this message
    #[must_use]
    pub fn to_builder(&self) -> MessageBuilder {
        MessageBuilder {
            message: self.clone(),
        }
    }

    /// Message identifier, unique within its chat
    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn sender(&self) -> &MessageSender {
        &self.sender
    }

    #[must_use]
    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    #[must_use]
    pub fn sending_state(&self) -> Option<&MessageSendingState> {
        self.sending_state.as_ref()
    }

    #[must_use]
    pub fn scheduling_state(&self) -> Option<&MessageSchedulingState> {
        self.scheduling_state.as_ref()
    }

    #[must_use]
    pub fn is_outgoing(&self) -> bool {
        self.is_outgoing
    }

    #[must_use]
    pub fn can_be_edited(&self) -> bool {
        self.can_be_edited
    }

    #[must_use]
    pub fn can_be_forwarded(&self) -> bool {
        self.can_be_forwarded
    }

    #[must_use]
    pub fn can_be_deleted_only_for_self(&self) -> bool {
        self.can_be_deleted_only_for_self
    }

    #[must_use]
    pub fn can_be_deleted_for_all_users(&self) -> bool {
        self.can_be_deleted_for_all_users
    }

    /// True for messages posted to a broadcast channel
    #[must_use]
    pub fn is_channel_post(&self) -> bool {
        self.is_channel_post
    }

    #[must_use]
    pub fn contains_unread_mention(&self) -> bool {
        self.contains_unread_mention
    }

    /// Unix timestamp when the message was sent
    #[must_use]
    pub fn date(&self) -> i32 {
        self.date
    }

    /// Unix timestamp of the last edit; 0 if never edited
    #[must_use]
    pub fn edit_date(&self) -> i32 {
        self.edit_date
    }

    #[must_use]
    pub fn forward_info(&self) -> Option<&MessageForwardInfo> {
        self.forward_info.as_ref()
    }

    /// Identifier of the replied-to message; 0 if not a reply
    #[must_use]
    pub fn reply_to_message_id(&self) -> MessageId {
        self.reply_to_message_id
    }

    /// Self-destruct timer in seconds; 0 if none
    #[must_use]
    pub fn ttl(&self) -> i32 {
        self.ttl
    }

    /// Seconds left before the message self-destructs.
    ///
    /// Stored as received, even when `ttl` is 0.
    #[must_use]
    pub fn ttl_expires_in(&self) -> f64 {
        self.ttl_expires_in.value()
    }

    /// Bot the message was sent through; 0 if none
    #[must_use]
    pub fn via_bot_user_id(&self) -> UserId {
        self.via_bot_user_id
    }

    /// Author signature of a channel post, if any
    #[must_use]
    pub fn author_signature(&self) -> Option<&str> {
        self.author_signature.as_deref()
    }

    /// Album this message is grouped into; 0 if none
    #[must_use]
    pub fn media_album_id(&self) -> i64 {
        self.media_album_id
    }

    /// Why access to the message is restricted; empty if it is not
    #[must_use]
    pub fn restriction_reason(&self) -> &str {
        &self.restriction_reason
    }

    #[must_use]
    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    #[must_use]
    pub fn reply_markup(&self) -> Option<&ReplyMarkup> {
        self.reply_markup.as_ref()
    }

    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.edit_date != 0
    }

    #[must_use]
    pub fn reply_to(&self) -> Option<MessageId> {
        non_zero(self.reply_to_message_id)
    }

    #[must_use]
    pub fn via_bot(&self) -> Option<UserId> {
        non_zero(self.via_bot_user_id)
    }

    #[must_use]
    pub fn album_id(&self) -> Option<i64> {
        non_zero(self.media_album_id)
    }

    #[must_use]
    pub fn restriction(&self) -> Option<&str> {
        Some(self.restriction_reason.as_str()).filter(|reason| !reason.is_empty())
    }

    #[must_use]
    pub fn is_self_destructing(&self) -> bool {
        self.ttl > 0
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending_state.is_some()
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduling_state.is_some()
    }

    #[must_use]
    pub fn is_forwarded(&self) -> bool {
        self.forward_info.is_some()
    }

    /// Send time; `None` for a zero timestamp
    #[must_use]
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.date)
    }

    /// Last edit time; `None` if never edited
    #[must_use]
    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.edit_date)
    }
}

fn non_zero(value: i64) -> Option<i64> {
    (value != 0).then_some(value)
}

fn timestamp(secs: i32) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(i64::from(secs), 0)
}

impl TdObject for Message {
    const TYPE_NAME: &'static str = "Message";

    fn decode(payload: &Value) -> Result<Self, DecodeError> {
        let reader = FieldReader::new(Self::TYPE_NAME, payload)?;
        Ok(Self {
            id: reader.required("id")?,
            sender: reader.required_object("sender")?,
            chat_id: reader.required("chat_id")?,
            sending_state: reader.optional_object("sending_state")?,
            scheduling_state: reader.optional_object("scheduling_state")?,
            is_outgoing: reader.required("is_outgoing")?,
            can_be_edited: reader.required("can_be_edited")?,
            can_be_forwarded: reader.required("can_be_forwarded")?,
            can_be_deleted_only_for_self: reader.required("can_be_deleted_only_for_self")?,
            can_be_deleted_for_all_users: reader.required("can_be_deleted_for_all_users")?,
            is_channel_post: reader.required("is_channel_post")?,
            contains_unread_mention: reader.required("contains_unread_mention")?,
            date: reader.required("date")?,
            edit_date: reader.required("edit_date")?,
            forward_info: reader.optional_object("forward_info")?,
            reply_to_message_id: reader.required("reply_to_message_id")?,
            ttl: reader.required("ttl")?,
            ttl_expires_in: reader.required("ttl_expires_in")?,
            via_bot_user_id: reader.required("via_bot_user_id")?,
            author_signature: reader.optional("author_signature")?,
            media_album_id: reader.required("media_album_id")?,
            restriction_reason: reader.required("restriction_reason")?,
            content: reader.required_object("content")?,
            reply_markup: reader.optional_object("reply_markup")?,
        })
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}

/// Builds a [`Message`]; every field not set keeps its "none" value
#[derive(Debug, Clone)]
#[must_use]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new(
        id: MessageId,
        sender: MessageSender,
        chat_id: ChatId,
        content: MessageContent,
    ) -> Self {
        Self {
            message: Message {
                id,
                sender,
                chat_id,
                sending_state: None,
                scheduling_state: None,
                is_outgoing: false,
                can_be_edited: false,
                can_be_forwarded: false,
                can_be_deleted_only_for_self: false,
                can_be_deleted_for_all_users: false,
                is_channel_post: false,
                contains_unread_mention: false,
                date: 0,
                edit_date: 0,
                forward_info: None,
                reply_to_message_id: 0,
                ttl: 0,
                ttl_expires_in: Double::from(0.0),
                via_bot_user_id: 0,
                author_signature: None,
                media_album_id: 0,
                restriction_reason: String::new(),
                content,
                reply_markup: None,
            },
        }
    }

    pub fn id(mut self, id: MessageId) -> Self {
        self.message.id = id;
        self
    }

    pub fn sender(mut self, sender: MessageSender) -> Self {
        self.message.sender = sender;
        self
    }

    pub fn chat_id(mut self, chat_id: ChatId) -> Self {
        self.message.chat_id = chat_id;
        self
    }

    pub fn sending_state(mut self, state: Option<MessageSendingState>) -> Self {
        self.message.sending_state = state;
        self
    }

    pub fn scheduling_state(mut self, state: Option<MessageSchedulingState>) -> Self {
        self.message.scheduling_state = state;
        self
    }

    pub fn is_outgoing(mut self, value: bool) -> Self {
        self.message.is_outgoing = value;
        self
    }

    pub fn can_be_edited(mut self, value: bool) -> Self {
        self.message.can_be_edited = value;
        self
    }

    pub fn can_be_forwarded(mut self, value: bool) -> Self {
        self.message.can_be_forwarded = value;
        self
    }

    pub fn can_be_deleted_only_for_self(mut self, value: bool) -> Self {
        self.message.can_be_deleted_only_for_self = value;
        self
    }

    pub fn can_be_deleted_for_all_users(mut self, value: bool) -> Self {
        self.message.can_be_deleted_for_all_users = value;
        self
    }

    pub fn is_channel_post(mut self, value: bool) -> Self {
        self.message.is_channel_post = value;
        self
    }

    pub fn contains_unread_mention(mut self, value: bool) -> Self {
        self.message.contains_unread_mention = value;
        self
    }

    pub fn date(mut self, date: i32) -> Self {
        self.message.date = date;
        self
    }

    pub fn edit_date(mut self, edit_date: i32) -> Self {
        self.message.edit_date = edit_date;
        self
    }

    pub fn forward_info(mut self, info: Option<MessageForwardInfo>) -> Self {
        self.message.forward_info = info;
        self
    }

    pub fn reply_to_message_id(mut self, id: MessageId) -> Self {
        self.message.reply_to_message_id = id;
        self
    }

    /// Sets both TTL fields; they are not checked against each other
    pub fn ttl(mut self, ttl: i32, expires_in: f64) -> Self {
        self.message.ttl = ttl;
        self.message.ttl_expires_in = Double::from(expires_in);
        self
    }

    pub fn via_bot_user_id(mut self, user_id: UserId) -> Self {
        self.message.via_bot_user_id = user_id;
        self
    }

    pub fn author_signature(mut self, signature: Option<String>) -> Self {
        self.message.author_signature = signature;
        self
    }

    pub fn media_album_id(mut self, album_id: i64) -> Self {
        self.message.media_album_id = album_id;
        self
    }

    pub fn restriction_reason(mut self, reason: impl Into<String>) -> Self {
        self.message.restriction_reason = reason.into();
        self
    }

    pub fn content(mut self, content: MessageContent) -> Self {
        self.message.content = content;
        self
    }

    pub fn reply_markup(mut self, markup: Option<ReplyMarkup>) -> Self {
        self.message.reply_markup = markup;
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
