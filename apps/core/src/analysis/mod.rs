//! # Analysis Module
//!
//! The transcript analysis pipeline: raw export text in, immutable analysis
//! record out. Every component is a synchronous pure function over the
//! values it is given.
//!
//! ## Components
//! - `parser`: header-grammar line scanner producing typed messages
//! - `aggregator`: frequency tables, counts, hour histogram
//! - `sentiment`: word-list sentiment score in [-1, 1]
//! - `personality`: Big Five keyword scoring with dominant trait
//! - `report`: output data structure
//! - `analyzer`: main orchestrator

pub mod aggregator;
pub mod analyzer;
pub mod parser;
pub mod personality;
pub mod report;
pub mod sentiment;

// Re-export main types for convenience
pub use aggregator::{combined_content, FrequencyEntry, FrequencyTable, LexicalAggregator, LexicalStats};
pub use analyzer::ChatAnalyzer;
pub use parser::{ChatMessage, MessageKind, TranscriptParser, MEDIA_MARKER};
pub use personality::{PersonalityTraits, Trait, TraitScorer};
pub use report::ChatAnalysis;
pub use sentiment::SentimentScorer;
