//! # ChatPersona Analysis Core
//!
//! Pure analysis pipeline for exported two-party chat transcripts. Parses
//! the raw export into messages, aggregates lexical statistics, scores
//! sentiment and Big Five personality traits, and maps the dominant trait to
//! a discrete set of avatar attributes.
//!
//! The crate performs no I/O and holds no state between calls: the embedding
//! application supplies the text and renders the returned records. The only
//! non-deterministic path is avatar perturbation, which takes an injected
//! random generator.
//!
//! ```
//! use chatpersona_core::{map_dominant_trait, ChatAnalyzer};
//!
//! let analyzer = ChatAnalyzer::new();
//! let analysis = analyzer
//!     .analyze("[1/1/23, 09:05] Alice: I love this, thank you!")
//!     .expect("transcript has messages");
//! let avatar = map_dominant_trait(analysis.personality_traits.dominant);
//! assert!(!avatar.background.is_empty());
//! ```

pub mod analysis;
pub mod avatar;
pub mod error;

#[cfg(test)]
mod tests;

pub use analysis::{
    ChatAnalysis, ChatAnalyzer, ChatMessage, FrequencyEntry, LexicalAggregator, MessageKind,
    PersonalityTraits, SentimentScorer, Trait, TraitScorer, TranscriptParser,
};
pub use avatar::{map_dominant_trait, perturb, AvatarAttributes};
pub use error::AnalysisError;
