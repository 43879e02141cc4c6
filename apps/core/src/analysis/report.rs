//! Chat Analysis record - the pipeline's output structure.
//!
//! Field names serialize in camelCase; this is the contract the presentation
//! layer renders from.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::aggregator::FrequencyEntry;
use super::personality::PersonalityTraits;

/// Immutable composite of everything derived from one transcript. Built once
/// per analysis, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatAnalysis {
    /// Number of distinct senders.
    pub participant_count: usize,

    /// Distinct senders in order of first appearance.
    pub participants: Vec<String>,

    /// Total messages parsed.
    pub message_count: usize,

    /// Message counts per sender; values sum to `message_count`.
    pub messages_by_participant: HashMap<String, usize>,

    /// Whitespace-delimited tokens across all message contents.
    pub word_count: usize,

    /// Words per message.
    pub average_message_length: f64,

    /// Messages carrying the media marker.
    pub media_count: usize,

    /// Distinct emoji in first-seen order.
    pub emojis: Vec<String>,

    /// Most frequent words, count descending.
    pub top_words: Vec<FrequencyEntry>,

    /// Most frequent emoji, count descending.
    pub top_emojis: Vec<FrequencyEntry>,

    /// Overall sentiment in [-1, 1].
    pub sentiment_score: f64,

    /// Hour-of-day histogram, 24 buckets keyed `"0"`..`"23"`.
    pub message_time_distribution: HashMap<String, usize>,

    /// Normalized Big Five scores with the dominant trait.
    pub personality_traits: PersonalityTraits,
}

impl ChatAnalysis {
    /// One-line digest for logging.
    pub fn summary(&self) -> String {
        format!(
            "Participants: {}, Messages: {}, Words: {}, Media: {}, Sentiment: {:.2}, Dominant: {}",
            self.participant_count,
            self.message_count,
            self.word_count,
            self.media_count,
            self.sentiment_score,
            self.personality_traits.dominant,
        )
    }
}
