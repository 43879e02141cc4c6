//! Lexical Aggregator.
//!
//! Computes word/emoji frequency tables and basic counts over a parsed
//! message sequence. Total over malformed input: a message whose timestamp
//! cannot be resolved simply drops out of the hour histogram.

use chrono::Timelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use super::parser::{ChatMessage, MessageKind};

/// Punctuation stripped before word counting. Apostrophes and question marks
/// are not in the set and survive inside tokens.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Words this short carry no signal in the frequency table.
const MIN_WORD_CHARS: usize = 3;

/// Single scalars with an emoji presentation, modifier, or component
/// property. Keycap bases (digits, `#`, `*`) carry the component property
/// and therefore count.
static EMOJI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Emoji_Presentation}\p{Emoji_Modifier}\p{Emoji_Component}]")
        .expect("Invalid regex: emoji class pattern")
});

/// A ranked token with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub token: String,
    pub count: usize,
}

/// Token occurrence counts that remember first-insertion order, so ranking
/// ties resolve to the token seen first.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a token.
    pub fn increment(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
                self.order.push(token.to_string());
            }
        }
    }

    /// Occurrence count for a token, 0 when absent.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Distinct tokens in first-seen order.
    pub fn tokens(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `n` most frequent entries, count descending. The sort is stable,
    /// so equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<FrequencyEntry> {
        let mut entries: Vec<FrequencyEntry> = self
            .order
            .iter()
            .map(|token| FrequencyEntry {
                token: token.clone(),
                count: self.counts[token],
            })
            .collect();

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(n);
        entries
    }
}

/// Aggregate statistics over one parsed transcript.
#[derive(Debug, Clone)]
pub struct LexicalStats {
    /// Distinct senders in order of first appearance.
    pub participants: Vec<String>,
    /// Message counts per sender; values sum to `message_count`.
    pub messages_by_participant: HashMap<String, usize>,
    pub message_count: usize,
    pub media_count: usize,
    /// Whitespace-delimited tokens across all contents, short words included.
    pub word_count: usize,
    /// Words per message.
    pub average_message_length: f64,
    pub word_frequency: FrequencyTable,
    pub emoji_frequency: FrequencyTable,
    /// 24 buckets keyed `"0"`..`"23"`; always fully populated.
    pub hour_histogram: HashMap<String, usize>,
}

/// Join message contents with single spaces for text-level scoring.
pub fn combined_content(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|message| message.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Frequency and count computation over parsed messages.
pub struct LexicalAggregator;

impl Default for LexicalAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalAggregator {
    /// Create a new aggregator.
    pub fn new() -> Self {
        Self
    }

    /// Compute all aggregate statistics for a message sequence.
    pub fn aggregate(&self, messages: &[ChatMessage]) -> LexicalStats {
        let mut participants = Vec::new();
        let mut messages_by_participant: HashMap<String, usize> = HashMap::new();

        for message in messages {
            if !messages_by_participant.contains_key(&message.sender) {
                participants.push(message.sender.clone());
            }
            *messages_by_participant.entry(message.sender.clone()).or_insert(0) += 1;
        }

        let media_count = messages
            .iter()
            .filter(|message| message.kind == MessageKind::Media)
            .count();

        let combined = combined_content(messages);
        let word_frequency = self.word_frequency(&combined);
        let emoji_frequency = self.emoji_frequency(&combined);
        let hour_histogram = self.hour_histogram(messages);

        let message_count = messages.len();
        let word_count = combined.split_whitespace().count();
        let average_message_length = if message_count == 0 {
            0.0
        } else {
            word_count as f64 / message_count as f64
        };

        LexicalStats {
            participants,
            messages_by_participant,
            message_count,
            media_count,
            word_count,
            average_message_length,
            word_frequency,
            emoji_frequency,
            hour_histogram,
        }
    }

    /// Count lowercased, punctuation-stripped words longer than two characters.
    fn word_frequency(&self, text: &str) -> FrequencyTable {
        let cleaned = text.to_lowercase().replace(PUNCTUATION, "");
        let mut table = FrequencyTable::new();

        for token in cleaned.split_whitespace() {
            if token.chars().count() >= MIN_WORD_CHARS {
                table.increment(token);
            }
        }

        table
    }

    /// Count every emoji scalar in the text.
    fn emoji_frequency(&self, text: &str) -> FrequencyTable {
        let mut table = FrequencyTable::new();

        for found in EMOJI_PATTERN.find_iter(text) {
            table.increment(found.as_str());
        }

        table
    }

    /// Bucket messages by hour of day. Unresolvable timestamps are skipped.
    fn hour_histogram(&self, messages: &[ChatMessage]) -> HashMap<String, usize> {
        let mut histogram: HashMap<String, usize> =
            (0..24).map(|hour: u32| (hour.to_string(), 0)).collect();

        for message in messages {
            match message.occurred_at() {
                Ok(when) => {
                    *histogram.entry(when.hour().to_string()).or_insert(0) += 1;
                }
                Err(err) => {
                    debug!("Skipping histogram contribution: {}", err);
                }
            }
        }

        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parser::TranscriptParser;

    fn sample_messages(text: &str) -> Vec<ChatMessage> {
        TranscriptParser::new().parse(text)
    }

    #[test]
    fn test_participants_first_appearance_order() {
        let messages = sample_messages(
            "[1/1/23, 10:00] Bob: one\n[1/1/23, 10:01] Alice: two\n[1/1/23, 10:02] Bob: three",
        );
        let stats = LexicalAggregator::new().aggregate(&messages);

        assert_eq!(stats.participants, vec!["Bob", "Alice"]);
        assert_eq!(stats.messages_by_participant["Bob"], 2);
        assert_eq!(stats.messages_by_participant["Alice"], 1);
    }

    #[test]
    fn test_participant_counts_sum_to_message_count() {
        let messages = sample_messages(
            "[1/1/23, 10:00] A: x\n[1/1/23, 10:01] B: y\n[1/1/23, 10:02] A: z",
        );
        let stats = LexicalAggregator::new().aggregate(&messages);

        let total: usize = stats.messages_by_participant.values().sum();
        assert_eq!(total, stats.message_count);
        assert_eq!(stats.message_count, 3);
    }

    #[test]
    fn test_word_frequency_folds_case_and_strips_punctuation() {
        let messages = sample_messages("[1/1/23, 10:00] A: Coffee, coffee! COFFEE now");
        let stats = LexicalAggregator::new().aggregate(&messages);

        assert_eq!(stats.word_frequency.count("coffee"), 3);
        assert_eq!(stats.word_frequency.count("now"), 1);
    }

    #[test]
    fn test_short_words_excluded_from_table_but_counted() {
        let messages = sample_messages("[1/1/23, 10:00] A: it is so very late");
        let stats = LexicalAggregator::new().aggregate(&messages);

        assert_eq!(stats.word_frequency.count("it"), 0);
        assert_eq!(stats.word_frequency.count("very"), 1);
        // word_count keeps the short tokens the table drops
        assert_eq!(stats.word_count, 5);
    }

    #[test]
    fn test_average_message_length() {
        let messages = sample_messages(
            "[1/1/23, 10:00] A: one two three\n[1/1/23, 10:01] B: four five six",
        );
        let stats = LexicalAggregator::new().aggregate(&messages);

        assert_eq!(stats.word_count, 6);
        assert!((stats.average_message_length - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_emoji_frequency() {
        let messages = sample_messages("[1/1/23, 10:00] A: so happy 😊😊 👍");
        let stats = LexicalAggregator::new().aggregate(&messages);

        assert_eq!(stats.emoji_frequency.count("😊"), 2);
        assert_eq!(stats.emoji_frequency.count("👍"), 1);
        assert_eq!(stats.emoji_frequency.tokens(), ["😊", "👍"]);
    }

    #[test]
    fn test_media_count() {
        let messages = sample_messages(
            "[1/1/23, 10:00] A: <Media omitted>\n[1/1/23, 10:01] B: hello there",
        );
        let stats = LexicalAggregator::new().aggregate(&messages);

        assert_eq!(stats.media_count, 1);
    }

    #[test]
    fn test_hour_histogram_buckets_by_hour() {
        let messages = sample_messages(
            "[1/1/23, 09:05] A: early\n[1/1/23, 09:45] B: still early\n[1/1/23, 22:10] A: late",
        );
        let stats = LexicalAggregator::new().aggregate(&messages);

        assert_eq!(stats.hour_histogram["9"], 2);
        assert_eq!(stats.hour_histogram["22"], 1);
        assert_eq!(stats.hour_histogram["0"], 0);
        assert_eq!(stats.hour_histogram.len(), 24);
    }

    #[test]
    fn test_hour_histogram_skips_unresolvable_timestamps() {
        let mut messages = sample_messages("[1/1/23, 09:05] A: fine");
        messages.push(ChatMessage {
            timestamp: "13/40/23, 09:05".to_string(),
            sender: "A".to_string(),
            content: "broken clock".to_string(),
            kind: MessageKind::Text,
        });

        let stats = LexicalAggregator::new().aggregate(&messages);

        let bucketed: usize = stats.hour_histogram.values().sum();
        assert_eq!(bucketed, 1);
        assert_eq!(stats.message_count, 2);
    }

    #[test]
    fn test_top_ties_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        for token in ["beta", "alpha", "beta", "gamma", "alpha", "delta"] {
            table.increment(token);
        }

        let top = table.top(3);
        assert_eq!(top[0].token, "beta");
        assert_eq!(top[1].token, "alpha");
        // gamma and delta tie at 1; gamma was seen first
        assert_eq!(top[2].token, "gamma");
    }

    #[test]
    fn test_top_truncates() {
        let mut table = FrequencyTable::new();
        for token in ["a1", "b2", "c3", "d4"] {
            table.increment(token);
        }

        assert_eq!(table.top(2).len(), 2);
        assert_eq!(table.top(10).len(), 4);
    }
}
