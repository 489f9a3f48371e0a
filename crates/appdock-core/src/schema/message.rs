//! Message, room, user, and attachment records

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A room a message is addressed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Room {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            unknown_fields: HashMap::new(),
        }
    }
}

/// A workspace user (sender or editor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            name: None,
            unknown_fields: HashMap::new(),
        }
    }
}

/// One attachment on a message. Pure data; rendering is the consumer's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl MessageAttachment {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// An immutable message snapshot, produced by [`crate::MessageBuilder`]
/// and consumed by a persistence/send collaborator.
///
/// `emoji` and `avatar_url` may both be present; the one set most recently
/// on the builder takes display precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Assigned by the persistence layer, never by the builder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub room: Room,

    pub sender: User,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Emoji code used as the sender avatar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// Image URL used as the sender avatar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Display text shown in place of the sender's username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<MessageAttachment>,

    /// User performing an edit of an existing message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<User>,

    /// Whether this message may visually group with adjacent ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupable: Option<bool>,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_roundtrip_minimal() {
        let json = r##"{
            "room": {"id": "GENERAL"},
            "sender": {"id": "u1", "username": "bot"}
        }"##;

        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.room.id, "GENERAL");
        assert_eq!(msg.sender.username, "bot");
        assert!(msg.id.is_none());
        assert!(msg.attachments.is_empty());

        let serialized = serde_json::to_string(&msg).unwrap();
        let reparsed: Message = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, reparsed);
    }

    #[test]
    fn test_message_roundtrip_complete() {
        let json = r##"{
            "id": "msg-1",
            "room": {"id": "GENERAL", "name": "general"},
            "sender": {"id": "u1", "username": "bot", "name": "Bot"},
            "text": "hello",
            "emoji": ":robot:",
            "avatarUrl": "https://example.test/a.png",
            "alias": "Robo",
            "attachments": [{"title": "t", "text": "body", "color": "#ff0000"}],
            "editor": {"id": "u2", "username": "admin"},
            "groupable": false
        }"##;

        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.avatar_url.as_deref(), Some("https://example.test/a.png"));
        assert_eq!(msg.attachments.len(), 1);
        assert_eq!(msg.editor.as_ref().unwrap().username, "admin");
        assert_eq!(msg.groupable, Some(false));

        let serialized = serde_json::to_string(&msg).unwrap();
        let reparsed: Message = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, reparsed);
    }

    #[test]
    fn test_message_preserves_unknown_fields() {
        let json = r##"{
            "room": {"id": "GENERAL"},
            "sender": {"id": "u1", "username": "bot"},
            "threadId": "thread-9",
            "reactions": {":+1:": 2}
        }"##;

        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.unknown_fields.len(), 2);
        assert!(msg.unknown_fields.contains_key("threadId"));

        let serialized = serde_json::to_string(&msg).unwrap();
        let reparsed: Message = serde_json::from_str(&serialized).unwrap();
        assert_eq!(
            msg.unknown_fields.get("reactions"),
            reparsed.unknown_fields.get("reactions")
        );
    }
}
