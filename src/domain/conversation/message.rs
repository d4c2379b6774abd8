//! Message input for conversation aggregation.

use serde::{Deserialize, Serialize};

/// One message in a conversation history, oldest-to-newest ordering is
/// the caller's responsibility.
///
/// The body is optional: attachment-only messages have none and are
/// skipped during aggregation rather than treated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    body: Option<String>,
}

impl ConversationMessage {
    /// Creates a message with a text body.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    /// Creates a bodiless message (e.g. an attachment-only message).
    pub fn without_body() -> Self {
        Self { body: None }
    }

    /// Returns the body, if the message has one.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
