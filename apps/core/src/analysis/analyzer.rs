//! Chat Analyzer - orchestrator for the analysis pipeline.
//!
//! Runs parse, aggregation, and scoring in order and assembles the immutable
//! analysis record. Deterministic: the same input text always produces the
//! same record.

use tracing::info;

use super::aggregator::{combined_content, LexicalAggregator};
use super::parser::TranscriptParser;
use super::personality::TraitScorer;
use super::report::ChatAnalysis;
use super::sentiment::SentimentScorer;
use crate::error::AnalysisError;

/// Ranked words kept in the record.
const TOP_WORD_COUNT: usize = 20;

/// Ranked emoji kept in the record.
const TOP_EMOJI_COUNT: usize = 10;

/// Full-pipeline analyzer over raw transcript text.
pub struct ChatAnalyzer {
    parser: TranscriptParser,
    aggregator: LexicalAggregator,
    sentiment: SentimentScorer,
    traits: TraitScorer,
}

impl Default for ChatAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatAnalyzer {
    /// Create an analyzer with the default components.
    pub fn new() -> Self {
        Self {
            parser: TranscriptParser::new(),
            aggregator: LexicalAggregator::new(),
            sentiment: SentimentScorer::new(),
            traits: TraitScorer::new(),
        }
    }

    /// Analyze a raw transcript.
    ///
    /// Fails with `EmptyTranscript` when the text yields no messages - the
    /// caller is expected to surface that to the user and stop. Every other
    /// input degrades gracefully inside the pipeline.
    pub fn analyze(&self, text: &str) -> Result<ChatAnalysis, AnalysisError> {
        // 1. Parse the export into ordered messages
        let messages = self.parser.parse(text);
        if messages.is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        // 2. Aggregate counts and frequency tables
        let stats = self.aggregator.aggregate(&messages);

        // 3. Score sentiment and traits over the combined content
        let combined = combined_content(&messages);
        let sentiment_score = self.sentiment.score(&combined);
        let personality_traits = self.traits.score(&combined);

        // 4. Compose the record
        let analysis = ChatAnalysis {
            participant_count: stats.participants.len(),
            participants: stats.participants,
            message_count: stats.message_count,
            messages_by_participant: stats.messages_by_participant,
            word_count: stats.word_count,
            average_message_length: stats.average_message_length,
            media_count: stats.media_count,
            emojis: stats.emoji_frequency.tokens().to_vec(),
            top_words: stats.word_frequency.top(TOP_WORD_COUNT),
            top_emojis: stats.emoji_frequency.top(TOP_EMOJI_COUNT),
            sentiment_score,
            message_time_distribution: stats.hour_histogram,
            personality_traits,
        };

        info!("Chat analysis complete: {}", analysis.summary());
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::personality::Trait;

    #[test]
    fn test_empty_input_is_an_error() {
        let analyzer = ChatAnalyzer::new();

        assert_eq!(analyzer.analyze(""), Err(AnalysisError::EmptyTranscript));
        assert_eq!(
            analyzer.analyze("no message headers at all"),
            Err(AnalysisError::EmptyTranscript)
        );
    }

    #[test]
    fn test_two_party_analysis() {
        let analyzer = ChatAnalyzer::new();

        let analysis = analyzer
            .analyze(
                "[1/1/23, 09:05] Alice: I love this, thank you!\n[1/1/23, 09:06] Bob: I am so worried and sad",
            )
            .unwrap();

        assert_eq!(analysis.message_count, 2);
        assert_eq!(analysis.participants, vec!["Alice", "Bob"]);
        assert_eq!(analysis.messages_by_participant["Alice"], 1);
        assert_eq!(analysis.messages_by_participant["Bob"], 1);
        assert!(analysis.sentiment_score > 0.0);
        // "thank"/"love" and "worried"/"sad" tie; agreeableness wins the tie
        assert_eq!(analysis.personality_traits.dominant, Trait::Agreeableness);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = ChatAnalyzer::new();
        let text = "[1/1/23, 10:00] Alice: coffee time 😊\n[1/1/23, 10:05] Bob: always coffee";

        let first = analyzer.analyze(text).unwrap();
        let second = analyzer.analyze(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_counts_are_consistent() {
        let analyzer = ChatAnalyzer::new();
        let text = "[1/1/23, 10:00] Alice: one two three\n[1/1/23, 10:05] Bob: four five\n[1/1/23, 10:06] Alice: six";

        let analysis = analyzer.analyze(text).unwrap();

        let by_participant: usize = analysis.messages_by_participant.values().sum();
        assert_eq!(by_participant, analysis.message_count);

        let expected_average = analysis.word_count as f64 / analysis.message_count as f64;
        assert!((analysis.average_message_length - expected_average).abs() < f64::EPSILON);
    }
}
