//! Recommender conversation store

use crate::catalog::product::Product;
use serde::{Deserialize, Serialize};

/// Greeting shown when a conversation opens
pub const GREETING: &str = "Hi! I'm your shopping assistant. Tell me what you're looking for \
and I'll suggest a few products.";

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message in the conversation (Entity)
///
/// Only assistant messages carry suggested products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            products: Vec::new(),
        }
    }

    pub fn assistant(text: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            products,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Append-only conversation plus the "assistant is typing" flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatStore {
    messages: Vec<ChatMessage>,
    typing: bool,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: impl IntoIterator<Item = ChatMessage>) -> Self {
        Self {
            messages: messages.into_iter().collect(),
            typing: false,
        }
    }

    /// A conversation opened by the assistant greeting
    pub fn with_greeting() -> Self {
        Self::with_messages([ChatMessage::assistant(GREETING, Vec::new())])
    }

    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Display-only indicator; does not affect ordering.
    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Clear the conversation and the typing flag
    pub fn reset(&mut self) {
        self.messages.clear();
        self.typing = false;
    }
}
