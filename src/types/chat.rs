//! Chat and its newest message.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::errors::BuildError;
use crate::json;

/// A single message, nested within a [`Chat`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// `chatId` in the API.
    #[serde(rename = "chatId")]
    pub chat_uid: String,
    pub timestamp: DateTime<Utc>,
    /// Uid of the sending user.
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Message {
    fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "message")?;
        Ok(Self {
            chat_uid: json::req_str(obj, "message", "chatId")?.to_string(),
            timestamp: json::req_timestamp(obj, "message", "timestamp")?,
            user: json::req_str(obj, "message", "user")?.to_string(),
            text: json::opt_str(obj, "message", "text")?,
        })
    }
}

/// A chat thread, as returned by the chats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chat {
    /// `id` in the API.
    #[serde(rename = "id")]
    pub uid: String,
    /// The newest message in the thread.
    pub message: Message,
    /// Uids of the participating users.
    pub participants: Vec<String>,
    /// `newestTimestamp` in the API.
    #[serde(rename = "newestTimestamp")]
    pub newest_timestamp: DateTime<Utc>,
}

impl Chat {
    /// Parse a chat from one item of a `chats` payload.
    pub fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "chat")?;
        let message = Message::from_value(json::req_object(obj, "chat", "message")?)?;
        Ok(Self {
            uid: json::req_str(obj, "chat", "id")?.to_string(),
            message,
            participants: json::req_str_array(obj, "chat", "participants")?,
            newest_timestamp: json::req_timestamp(obj, "chat", "newestTimestamp")?,
        })
    }
}

impl fmt::Display for Chat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chat(uid='{}', newest_time: {}, …)",
            self.uid, self.newest_timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn simple_chat_data() -> Value {
        json!({
            "id": "C047A563CF7AF47DE2F3CENA5E4E28",
            "message": {
                "chatId": "C047A563CF7AF47DE2F3CENA5E4E28",
                "timestamp": "2023-05-01T09:30:00Z",
                "user": "6F63AF02CE05328153ABA477C76E6189",
                "text": "See you at training",
            },
            "participants": [
                "6F63AF02CE05328153ABA477C76E6189",
                "364C188137AD92DC0F32E1A31A0E1731",
            ],
            "newestTimestamp": "2023-05-01T09:30:00Z",
        })
    }

    #[test]
    fn parses_chat_with_message() {
        let chat = Chat::from_value(&simple_chat_data()).unwrap();

        assert_eq!(chat.uid, "C047A563CF7AF47DE2F3CENA5E4E28");
        assert_eq!(chat.message.chat_uid, chat.uid);
        assert_eq!(chat.message.user, "6F63AF02CE05328153ABA477C76E6189");
        assert_eq!(chat.message.text.as_deref(), Some("See you at training"));
        assert_eq!(chat.participants.len(), 2);
        assert_eq!(
            chat.newest_timestamp.to_rfc3339(),
            "2023-05-01T09:30:00+00:00"
        );
    }

    #[test]
    fn message_text_is_optional() {
        let mut data = simple_chat_data();
        data["message"]
            .as_object_mut()
            .unwrap()
            .remove("text")
            .unwrap();
        let chat = Chat::from_value(&data).unwrap();
        assert_eq!(chat.message.text, None);
    }

    #[test]
    fn rejects_missing_participants() {
        let mut data = simple_chat_data();
        data.as_object_mut().unwrap().remove("participants").unwrap();
        let err = Chat::from_value(&data).unwrap_err();
        assert_eq!(err, BuildError::missing_field("chat", "participants"));
    }
}
