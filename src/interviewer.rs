//! Interviewer — runs one screening session over a channel.
//!
//! Pulls candidate messages from the channel one at a time, feeds them to the
//! [`ScreeningSession`], and sends back the reply (plus the rendered question
//! set on the turn that opens the assessment). A message is fully handled,
//! reply delivered, before the next one is read.

use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::channels::{Channel, IncomingMessage, OutgoingResponse, StatusUpdate};
use crate::config::ScreeningConfig;
use crate::error::Error;
use crate::screening::{ScreeningSession, ScreeningStatus, Stage, TechnicalQuestion};

/// Host commands handled outside the screening flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Status,
    Quit,
}

fn parse_command(content: &str) -> Option<Command> {
    match content.trim() {
        "/status" => Some(Command::Status),
        "/quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Drives a single candidate conversation over one channel.
pub struct Interviewer {
    channel: Box<dyn Channel>,
    session: ScreeningSession,
}

impl Interviewer {
    pub fn new(config: &ScreeningConfig, channel: Box<dyn Channel>) -> Self {
        Self {
            channel,
            session: ScreeningSession::new(config),
        }
    }

    /// Use a pre-built session (e.g. one with a seeded random source).
    pub fn with_session(session: ScreeningSession, channel: Box<dyn Channel>) -> Self {
        Self { channel, session }
    }

    /// Run until the candidate ends the conversation, the channel closes, or
    /// Ctrl+C. Returns the final session snapshot.
    pub async fn run(mut self) -> Result<ScreeningStatus, Error> {
        let mut messages = self.channel.start().await?;
        info!(channel = self.channel.name(), "Interviewer ready");

        if let Some(greeting) = self.session.start() {
            let text = greeting.content.clone();
            self.deliver(None, text).await;
        }

        loop {
            let message = tokio::select! {
                biased;
                _ = tokio::signal::ctrl_c() => {
                    info!("Ctrl+C received, shutting down...");
                    break;
                }
                msg = messages.next() => {
                    match msg {
                        Some(m) => m,
                        None => {
                            info!("Channel stream ended, shutting down...");
                            break;
                        }
                    }
                }
            };

            match parse_command(&message.content) {
                Some(Command::Quit) => {
                    info!("Quit command received, exiting...");
                    break;
                }
                Some(Command::Status) => {
                    self.send_status_snapshot(&message).await;
                    continue;
                }
                None => {}
            }

            self.handle_message(&message).await;

            if self.session.stage() == Stage::Ended {
                info!("Conversation ended");
                break;
            }
        }

        if let Err(e) = self.channel.shutdown().await {
            warn!("Channel shutdown failed: {}", e);
        }

        Ok(self.session.status())
    }

    async fn handle_message(&mut self, message: &IncomingMessage) {
        let outcome = self.session.handle_turn(&message.content);
        debug!(
            message_id = %message.id,
            from = %outcome.previous,
            to = %outcome.stage,
            "Turn processed"
        );

        if let Err(e) = self.channel.send_status(StatusUpdate::Typing).await {
            debug!("Typing status not shown: {}", e);
        }
        self.deliver(Some(message), outcome.reply).await;

        if let Some(questions) = outcome.questions {
            self.deliver(Some(message), render_questions(&questions)).await;
        }
    }

    async fn send_status_snapshot(&self, message: &IncomingMessage) {
        match serde_json::to_string_pretty(&self.session.status()) {
            Ok(json) => self.deliver(Some(message), json).await,
            Err(e) => warn!("Failed to serialize session status: {}", e),
        }
    }

    async fn deliver(&self, message: Option<&IncomingMessage>, text: String) {
        if let Err(e) = self
            .channel
            .respond(message, OutgoingResponse::text(text))
            .await
        {
            warn!(channel = self.channel.name(), "Failed to deliver reply: {}", e);
        }
    }
}

/// Render the whole question set as one message.
pub fn render_questions(questions: &[TechnicalQuestion]) -> String {
    let mut parts = vec!["# Technical Questions".to_string()];
    parts.extend(questions.iter().map(TechnicalQuestion::render));
    parts.join("\n\n")
}
