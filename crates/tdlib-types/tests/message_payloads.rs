//! Decoding and encoding of complete message payloads

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::{json, Value};
use std::sync::Arc;
use tdlib_types::{
    DecodeError, Message, MessageContent, MessageForwardInfo, MessageForwardOrigin, MessageSchedulingState,
    MessageSender, MessageSendingState, ReplyMarkup, TdObject,
};

/// Minimal payload: every required field, no optional ones
fn text_payload() -> Value {
    json!({
        "id": 5,
        "sender": {"type": "user", "user_id": 42},
        "chat_id": 7,
        "is_outgoing": true,
        "can_be_edited": true,
        "can_be_forwarded": true,
        "can_be_deleted_only_for_self": false,
        "can_be_deleted_for_all_users": true,
        "is_channel_post": false,
        "contains_unread_mention": false,
        "date": 1_700_000_000,
        "edit_date": 0,
        "reply_to_message_id": 0,
        "ttl": 0,
        "ttl_expires_in": 0.0,
        "via_bot_user_id": 0,
        "media_album_id": 0,
        "restriction_reason": "",
        "content": {"type": "text", "text": "hi"}
    })
}

/// Channel post with every optional field populated
fn channel_payload() -> Value {
    json!({
        "id": 3_145_728,
        "sender": {"type": "chat", "chat_id": -1_001_234_567_890_i64},
        "chat_id": -1_001_234_567_890_i64,
        "sending_state": {
            "type": "failed",
            "error_code": 400,
            "error_message": "CHAT_WRITE_FORBIDDEN",
            "can_retry": false,
            "retry_after": 0.0
        },
        "scheduling_state": {"type": "send_at_date", "send_date": 1_700_003_600},
        "is_outgoing": true,
        "can_be_edited": false,
        "can_be_forwarded": true,
        "can_be_deleted_only_for_self": false,
        "can_be_deleted_for_all_users": true,
        "is_channel_post": true,
        "contains_unread_mention": false,
        "date": 1_700_000_000,
        "edit_date": 1_700_000_300,
        "forward_info": {
            "origin": {"type": "user", "sender_user_id": 777},
            "date": 1_690_000_000,
            "public_service_announcement_type": "",
            "from_chat_id": 0,
            "from_message_id": 0
        },
        "reply_to_message_id": 2_097_152,
        "ttl": 0,
        "ttl_expires_in": 0.0,
        "via_bot_user_id": 93_372_553,
        "author_signature": "Night Editor",
        "media_album_id": 13_012_345_678_901_234_i64,
        "restriction_reason": "",
        "content": {
            "type": "location",
            "latitude": 48.8584,
            "longitude": 2.2945,
            "live_period": 0,
            "expires_in": 0
        },
        "reply_markup": {
            "type": "inline_keyboard",
            "rows": [[{"text": "Open", "type": {"type": "url", "url": "https://t.me/rust"}}]]
        }
    })
}

fn without(mut payload: Value, field: &str) -> Value {
    payload.as_object_mut().unwrap().remove(field);
    payload
}

fn with(mut payload: Value, field: &str, value: Value) -> Value {
    payload
        .as_object_mut()
        .unwrap()
        .insert(field.to_string(), value);
    payload
}

#[test]
fn test_text_message_scenario() {
    let message = Message::decode(&text_payload()).unwrap();

    assert_eq!(message.id(), 5);
    assert_eq!(*message.sender(), MessageSender::User { user_id: 42 });
    assert_eq!(message.chat_id(), 7);
    assert!(message.is_outgoing());
    assert_eq!(message.content(), &MessageContent::text("hi"));
}

#[test]
fn test_round_trip_minimal() {
    let payload = text_payload();
    let message = Message::decode(&payload).unwrap();
    assert_eq!(message.encode().unwrap(), payload);
}

#[test]
fn test_round_trip_all_optionals() {
    let payload = channel_payload();
    let message = Message::decode(&payload).unwrap();

    assert!(message.is_channel_post());
    assert!(message.is_sending());
    assert!(message.is_scheduled());
    assert!(message.is_forwarded());
    assert!(message.is_edited());
    assert_eq!(message.reply_to(), Some(2_097_152));
    assert_eq!(message.via_bot(), Some(93_372_553));
    assert_eq!(message.album_id(), Some(13_012_345_678_901_234));
    assert_eq!(message.author_signature(), Some("Night Editor"));
    assert!(matches!(
        message.sending_state(),
        Some(MessageSendingState::Failed { error_code: 400, .. })
    ));
    assert_eq!(
        message.scheduling_state(),
        Some(&MessageSchedulingState::SendAtDate {
            send_date: 1_700_003_600
        })
    );
    assert_eq!(
        message.forward_info().map(MessageForwardInfo::origin),
        Some(&MessageForwardOrigin::User {
            sender_user_id: 777
        })
    );
    assert!(matches!(
        message.reply_markup(),
        Some(ReplyMarkup::InlineKeyboard { .. })
    ));

    assert_eq!(message.encode().unwrap(), payload);
}

#[test]
fn test_missing_required_fields_fail() {
    for field in ["id", "chat_id", "sender", "content"] {
        let err = Message::decode(&without(text_payload(), field)).unwrap_err();
        assert!(
            matches!(&err, DecodeError::MissingField { field: f, .. } if f == field),
            "{field}: {err}"
        );
        assert_eq!(err.field_path().as_deref(), Some(field));
    }
}

#[test]
fn test_every_non_optional_field_is_required() {
    let optional = [
        "sending_state",
        "scheduling_state",
        "forward_info",
        "author_signature",
        "reply_markup",
    ];
    let payload = channel_payload();
    for field in payload.as_object().unwrap().keys() {
        let result = Message::decode(&without(payload.clone(), field));
        assert_eq!(
            result.is_ok(),
            optional.contains(&field.as_str()),
            "unexpected result when removing {field}"
        );
    }
}

#[test]
fn test_omitted_optionals_are_absent() {
    let message = Message::decode(&text_payload()).unwrap();
    assert!(message.sending_state().is_none());
    assert!(message.scheduling_state().is_none());
    assert!(message.forward_info().is_none());
    assert!(message.author_signature().is_none());
    assert!(message.reply_markup().is_none());
}

#[test]
fn test_null_optionals_are_absent_and_omitted() {
    let payload = with(text_payload(), "author_signature", Value::Null);
    let payload = with(payload, "reply_markup", Value::Null);

    let message = Message::decode(&payload).unwrap();
    assert!(message.author_signature().is_none());
    assert!(message.reply_markup().is_none());
    assert_eq!(message.encode().unwrap(), text_payload());
}

#[test]
fn test_ttl_values_preserved() {
    let payload = with(text_payload(), "ttl", json!(30));
    let payload = with(payload, "ttl_expires_in", json!(12.5));

    let message = Message::decode(&payload).unwrap();
    assert_eq!(message.ttl(), 30);
    assert!((message.ttl_expires_in() - 12.5).abs() < f64::EPSILON);
    assert!(message.is_self_destructing());
    assert_eq!(message.encode().unwrap(), payload);
}

#[test]
fn test_ttl_zero_accepts_any_expiry() {
    let payload = with(text_payload(), "ttl_expires_in", json!(99.75));

    let message = Message::decode(&payload).unwrap();
    assert_eq!(message.ttl(), 0);
    assert!((message.ttl_expires_in() - 99.75).abs() < f64::EPSILON);
    assert!(!message.is_self_destructing());
}

#[test]
fn test_unknown_sender_type_fails() {
    let payload = with(
        text_payload(),
        "sender",
        json!({"type": "bot", "user_id": 42}),
    );

    let err = Message::decode(&payload).unwrap_err();
    assert_eq!(err.field_path().as_deref(), Some("sender.type"));
    let DecodeError::Nested { source, .. } = err else {
        panic!("Expected a nested sender error");
    };
    assert!(matches!(
        *source,
        DecodeError::UnknownDiscriminator { ref discriminator, .. } if discriminator == "bot"
    ));
}

#[test]
fn test_non_integer_id_fails() {
    let err = Message::decode(&with(text_payload(), "id", json!("5"))).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidField { ref field, .. } if field == "id"));

    let err = Message::decode(&with(text_payload(), "id", json!(5.5))).unwrap_err();
    assert_eq!(err.field_path().as_deref(), Some("id"));
}

#[test]
fn test_out_of_range_date_fails() {
    let err = Message::decode(&with(text_payload(), "date", json!(1_099_511_627_776_i64))).unwrap_err();
    assert_eq!(err.field_path().as_deref(), Some("date"));
}

#[test]
fn test_wrong_flag_type_fails() {
    let err = Message::decode(&with(text_payload(), "is_outgoing", json!(1))).unwrap_err();
    assert_eq!(err.field_path().as_deref(), Some("is_outgoing"));
}

#[test]
fn test_integer_ttl_expiry_round_trips() {
    let payload = with(text_payload(), "ttl_expires_in", json!(0));
    let message = Message::decode(&payload).unwrap();
    assert!(message.ttl_expires_in().abs() < f64::EPSILON);
    assert_eq!(message.encode().unwrap(), payload);
}

#[test]
fn test_photo_content_round_trips() {
    let photo = json!({
        "type": "photo",
        "photo": {
            "has_stickers": false,
            "minithumbnail": null,
            "sizes": [
                {"type": "m", "width": 320, "height": 240, "photo": {"id": 11, "size": 18_432}},
                {"type": "y", "width": 1280, "height": 960, "photo": {"id": 12, "size": 204_800}}
            ]
        },
        "caption": {"text": "Harbour at dusk", "entities": []},
        "is_secret": false
    });
    let payload = with(text_payload(), "content", photo);

    let message = Message::decode(&payload).unwrap();
    assert_eq!(message.content().kind(), "photo");
    assert!(matches!(message.content(), MessageContent::Other(_)));
    assert_eq!(message.content().as_text(), None);
    assert_eq!(message.encode().unwrap(), payload);
}

#[test]
fn test_content_without_type_fails() {
    let payload = with(text_payload(), "content", json!({"text": "hi"}));
    let err = Message::decode(&payload).unwrap_err();
    assert_eq!(err.field_path().as_deref(), Some("content.type"));
}

#[test]
fn test_malformed_modelled_content_fails() {
    let payload = with(text_payload(), "content", json!({"type": "text", "text": 5}));
    let err = Message::decode(&payload).unwrap_err();
    assert_eq!(err.field_path().as_deref(), Some("content"));
}

#[test]
fn test_nested_forward_error_path() {
    let mut payload = channel_payload();
    payload["forward_info"]["origin"] = json!({"type": "ghost"});

    let err = Message::decode(&payload).unwrap_err();
    assert_eq!(
        err.field_path().as_deref(),
        Some("forward_info.origin.type")
    );
}

#[test]
fn test_non_object_payload_fails() {
    let err = Message::decode(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, DecodeError::NotAnObject { type_name: "Message" }));
}

#[test]
fn test_decode_str_and_serde_agree() {
    let text = text_payload().to_string();
    let decoded = Message::decode_str(&text).unwrap();
    let deserialized: Message = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, deserialized);
}

#[test]
fn test_serde_error_mentions_field() {
    let text = without(text_payload(), "chat_id").to_string();
    let err = serde_json::from_str::<Message>(&text).unwrap_err();
    assert!(err.to_string().contains("chat_id"));
}

#[test]
fn test_message_list_decodes() {
    let list = json!([text_payload(), channel_payload()]);
    let messages: Vec<Message> = serde_json::from_value(list).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].sender().chat_id(), Some(-1_001_234_567_890));
}

#[test]
fn test_shared_across_threads() {
    let message = Arc::new(Message::decode(&text_payload()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let message = Arc::clone(&message);
            std::thread::spawn(move || message.content().as_text().map(str::to_owned))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("hi"));
    }
}
