//! Conversation module - message history input types.

mod message;

pub use message::ConversationMessage;
