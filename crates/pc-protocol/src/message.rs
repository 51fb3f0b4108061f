//! Chat message types for backend conversations.

use serde::{Deserialize, Serialize};

/// Role in a chat conversation.
///
/// The generative-language API distinguishes the user's turns from the
/// model's turns; there is no separate assistant/system split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single turn in a chat session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_helpers() {
        let user = ChatMessage::user("hello");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.text, "hello");

        let model = ChatMessage::model("hi there");
        assert_eq!(model.role, Role::Model);
        assert_eq!(model.text, "hi there");
    }

    #[test]
    fn role_serialization() {
        let user = Role::User;
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, "\"user\"");

        let model = Role::Model;
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, "\"model\"");
    }

    #[test]
    fn message_roundtrip() {
        let msg = ChatMessage::user("evaluate this idea");
        let json = serde_json::to_string(&msg).unwrap();
        let msg2: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, msg2);
    }
}
