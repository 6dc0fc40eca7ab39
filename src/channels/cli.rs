//! CLI channel — stdin/stdout conversation for local use.

use std::time::Duration;

use async_trait::async_trait;
use futures::stream;
use rand::Rng;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::channels::{Channel, IncomingMessage, MessageStream, OutgoingResponse, StatusUpdate};
use crate::config::ScreeningConfig;
use crate::error::ChannelError;

/// Reads candidate messages from stdin and prints replies to stdout.
///
/// Replies are held back by a simulated typing delay; the delay is purely
/// cosmetic and replies are always printed in the order they were produced.
pub struct CliChannel {
    typing_delay: Duration,
    typing_jitter: Duration,
}

impl CliChannel {
    pub fn new(config: &ScreeningConfig) -> Self {
        Self {
            typing_delay: config.typing_delay,
            typing_jitter: config.typing_jitter,
        }
    }

    fn reply_delay(&self) -> Duration {
        let jitter_ms = self.typing_jitter.as_millis() as u64;
        let extra = if jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter_ms)
        };
        self.typing_delay + Duration::from_millis(extra)
    }
}

#[async_trait]
impl Channel for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    async fn start(&self) -> Result<MessageStream, ChannelError> {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        tokio::spawn(async move {
            let stdin = tokio::io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        // Empty lines are forwarded too; the screening flow re-prompts on them.
                        let msg = IncomingMessage::new("cli", "local-candidate", &line);
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF
                    Err(e) => {
                        tracing::error!("Error reading stdin: {}", e);
                        break;
                    }
                }
            }
        });

        let stream = stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|msg| (msg, rx))
        });

        Ok(Box::pin(stream))
    }

    async fn respond(
        &self,
        _msg: Option<&IncomingMessage>,
        response: OutgoingResponse,
    ) -> Result<(), ChannelError> {
        let delay = self.reply_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("\n{}\n\n", response.content).as_bytes())
            .await?;
        stdout.flush().await?;
        eprint!("> ");
        Ok(())
    }

    async fn send_status(&self, status: StatusUpdate) -> Result<(), ChannelError> {
        match status {
            StatusUpdate::Typing => eprintln!("💬 typing..."),
            StatusUpdate::Status(msg) => eprintln!("ℹ️  {}", msg),
        }
        Ok(())
    }
}
