//! Channel trait and the message types that flow through it.

use std::pin::Pin;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::Stream;
use uuid::Uuid;

use crate::error::ChannelError;

/// Stream of candidate messages produced by a channel.
pub type MessageStream = Pin<Box<dyn Stream<Item = IncomingMessage> + Send>>;

/// A message typed by the candidate.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel that received the message.
    pub channel: String,
    /// Channel-specific sender identifier.
    pub sender: String,
    /// Raw text as typed.
    pub content: String,
    pub received_at: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(channel: &str, sender: &str, content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel: channel.to_string(),
            sender: sender.to_string(),
            content: content.to_string(),
            received_at: Utc::now(),
        }
    }
}

/// An assistant reply to deliver to the candidate.
#[derive(Debug, Clone)]
pub struct OutgoingResponse {
    pub content: String,
}

impl OutgoingResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Transient presentation hints that don't become transcript turns.
#[derive(Debug, Clone)]
pub enum StatusUpdate {
    /// The assistant is composing a reply.
    Typing,
    /// Free-form informational status.
    Status(String),
}

/// A bidirectional conversation surface (terminal, chat widget, ...).
#[async_trait]
pub trait Channel: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &str;

    /// Start receiving messages. May only be called once.
    async fn start(&self) -> Result<MessageStream, ChannelError>;

    /// Deliver a reply. `msg` is the message being answered, if any.
    async fn respond(
        &self,
        msg: Option<&IncomingMessage>,
        response: OutgoingResponse,
    ) -> Result<(), ChannelError>;

    /// Show a transient status. Default: ignore.
    async fn send_status(&self, _status: StatusUpdate) -> Result<(), ChannelError> {
        Ok(())
    }

    /// Release any resources. Default: nothing to do.
    async fn shutdown(&self) -> Result<(), ChannelError> {
        Ok(())
    }
}
