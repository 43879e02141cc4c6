//! Transcript Parser.
//!
//! Turns a raw chat export into an ordered sequence of typed messages.
//! Pure regex matching over lines - no date library is consulted until a
//! caller asks for a message's clock time.

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::error::AnalysisError;

/// Content marker used by the export format for attachments.
pub const MEDIA_MARKER: &str = "<Media omitted>";

/// Header grammar for an exported message line. Matches formats like:
/// `[02/01/23, 10:15:30] John Doe: Hello there!`
/// `2/1/23, 10:15 - John Doe: Hello there!`
///
/// The sender capture stops at the first colon, so content may contain
/// colons freely. Years may be 2 or 4 digits; seconds are optional.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[?(\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?::\d{2})?)\]?\s(?:-\s)?([^:]+):\s(.+)$")
        .expect("Invalid regex: message header pattern")
});

/// Accepted timestamp layouts, 2-digit years first so `1/1/23` resolves to
/// 2023 rather than year 23.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%y, %H:%M:%S",
    "%m/%d/%y, %H:%M",
    "%m/%d/%Y, %H:%M:%S",
    "%m/%d/%Y, %H:%M",
];

/// Classification of a parsed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Ordinary text content.
    Text,
    /// The export replaced an attachment with the media marker.
    Media,
    /// Reserved for service notices; never produced by the header grammar.
    System,
}

/// A single message reconstructed from the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Raw timestamp text as exported (`M/D/YY, H:MM[:SS]`).
    pub timestamp: String,
    /// Sender display name, trimmed.
    pub sender: String,
    /// Message body; continuation lines are joined with `\n`.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

impl ChatMessage {
    /// Resolve the raw timestamp to a clock time.
    ///
    /// The header grammar only guarantees digit shapes, so out-of-range
    /// values (month 13, hour 25) surface here as `MalformedTimestamp`.
    pub fn occurred_at(&self) -> Result<NaiveDateTime, AnalysisError> {
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&self.timestamp, format).ok())
            .ok_or_else(|| AnalysisError::MalformedTimestamp(self.timestamp.clone()))
    }
}

/// Line scanner for chat exports.
///
/// Modeled as a two-state machine: either no message is open, or one message
/// is accumulating content. A header line finalizes the open message and
/// starts the next; any other line extends the open message or, when none is
/// open yet, is discarded.
pub struct TranscriptParser;

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptParser {
    /// Create a new transcript parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a full export into messages, preserving input order.
    ///
    /// Malformed or empty input yields an empty vector; deciding whether
    /// that is an application error belongs to the caller.
    pub fn parse(&self, text: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::new();
        let mut current: Option<ChatMessage> = None;

        for line in text.lines() {
            if let Some(captures) = HEADER_PATTERN.captures(line) {
                if let Some(finished) = current.take() {
                    messages.push(finished);
                }

                let content = captures[3].to_string();
                let kind = if content.contains(MEDIA_MARKER) {
                    MessageKind::Media
                } else {
                    MessageKind::Text
                };

                current = Some(ChatMessage {
                    timestamp: captures[1].to_string(),
                    sender: captures[2].trim().to_string(),
                    content,
                    kind,
                });
            } else if let Some(message) = current.as_mut() {
                message.content.push('\n');
                message.content.push_str(line);
            }
        }

        if let Some(finished) = current {
            messages.push(finished);
        }

        debug!("Parsed {} messages from transcript", messages.len());
        messages
    }
}
