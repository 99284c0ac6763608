//! Line-by-line decoding of message payloads

use crate::config::{Config, OutputFormat};
use anyhow::{Context, Result};
use tdlib_types::{Message, TdObject};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Counts from one inspection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub decoded: usize,
    pub failed: usize,
}

/// Decodes newline-delimited message payloads and writes one line per message
pub struct Inspector {
    format: OutputFormat,
    fail_fast: bool,
}

impl Inspector {
    pub fn new(format: OutputFormat, fail_fast: bool) -> Self {
        Self { format, fail_fast }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.output.format, config.decode.fail_fast)
    }

    /// Process every line of `reader`, writing results to `writer`
    ///
    /// Blank lines are skipped. Payloads that fail to decode are logged and
    /// counted, or abort the run when fail-fast is on.
    pub async fn run<R, W>(&self, reader: R, writer: &mut W) -> Result<Report>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut report = Report::default();
        let mut line_number = 0usize;

        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            line_number += 1;
            let payload = line.trim();
            if payload.is_empty() {
                continue;
            }

            match Message::decode_str(payload) {
                Ok(message) => {
                    debug!(
                        "Line {}: decoded message {} in chat {}",
                        line_number,
                        message.id(),
                        message.chat_id()
                    );
                    let rendered = self.render(&message)?;
                    writer.write_all(rendered.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                    report.decoded += 1;
                }
                Err(e) if self.fail_fast => {
                    return Err(e)
                        .with_context(|| format!("Line {line_number}: failed to decode message"));
                }
                Err(e) => {
                    let field = e.field_path().unwrap_or_else(|| "-".to_string());
                    warn!(
                        line = line_number,
                        field = %field,
                        "Skipping undecodable payload: {}",
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        writer.flush().await?;
        info!(
            "Inspected {} payloads: {} decoded, {} failed",
            report.decoded + report.failed,
            report.decoded,
            report.failed
        );
        Ok(report)
    }

    fn render(&self, message: &Message) -> Result<String> {
        match self.format {
            OutputFormat::Summary => Ok(summarize(message)),
            OutputFormat::Json => {
                let payload = message.encode()?;
                Ok(serde_json::to_string(&payload)?)
            }
        }
    }
}

/// One-line description of a message
///
/// `message 5 in chat 7 from user 42: text "hi" (edited, reply to 3)`
pub fn summarize(message: &Message) -> String {
    let content = match message.content().as_text() {
        Some(text) => format!("text {text:?}"),
        None => message.content().kind().to_string(),
    };

    let mut notes = Vec::new();
    if message.is_sending() {
        notes.push("sending".to_string());
    }
    if message.is_scheduled() {
        notes.push("scheduled".to_string());
    }
    if message.is_edited() {
        notes.push("edited".to_string());
    }
    if message.is_forwarded() {
        notes.push("forwarded".to_string());
    }
    if let Some(reply_to) = message.reply_to() {
        notes.push(format!("reply to {reply_to}"));
    }
    if message.is_self_destructing() {
        notes.push(format!("ttl {}s", message.ttl()));
    }

    let mut summary = format!(
        "message {} in chat {} from {}: {}",
        message.id(),
        message.chat_id(),
        message.sender(),
        content
    );
    if !notes.is_empty() {
        summary.push_str(&format!(" ({})", notes.join(", ")));
    }
    summary
}
