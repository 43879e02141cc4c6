//! Big Five personality trait scoring from chat text.
//!
//! A bag-of-words approximation: five fixed keyword lists, exact token
//! membership, max-normalization. The list contents, the normalization, and
//! the tie-break order are a compatibility contract with the consuming UI -
//! this is not a calibrated psychometric model.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const EXTRAVERSION_WORDS: &[&str] = &[
    "we", "us", "together", "party", "friends", "social", "exciting", "fun", "outgoing",
];

const AGREEABLENESS_WORDS: &[&str] = &[
    "please", "thank", "happy", "help", "appreciate", "kind", "good", "nice", "love",
];

const CONSCIENTIOUSNESS_WORDS: &[&str] = &[
    "should", "must", "need", "responsibility", "work", "time", "plan", "organized",
];

const NEUROTICISM_WORDS: &[&str] = &[
    "worried", "nervous", "stress", "anxiety", "fear", "sad", "upset", "sorry", "problem",
];

const OPENNESS_WORDS: &[&str] = &[
    "wonder", "idea", "interesting", "curious", "imagine", "explore", "learn", "create", "art",
];

/// The five traits, in tie-break order: when scores are equal the
/// earlier-declared trait wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Openness,
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Trait {
    /// Lowercase identifier matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Trait::Extraversion => "extraversion",
            Trait::Agreeableness => "agreeableness",
            Trait::Conscientiousness => "conscientiousness",
            Trait::Neuroticism => "neuroticism",
            Trait::Openness => "openness",
        }
    }

    /// Short behavioral description for display.
    pub fn description(&self) -> &'static str {
        match self {
            Trait::Extraversion => "Outgoing, energetic, talkative",
            Trait::Agreeableness => "Friendly, compassionate, cooperative",
            Trait::Conscientiousness => "Organized, responsible, hardworking",
            Trait::Neuroticism => "Experiences negative emotions more frequently",
            Trait::Openness => "Creative, curious, appreciates art",
        }
    }
}

/// Normalized trait scores with the dominant trait precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub extraversion: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub neuroticism: f64,
    pub openness: f64,
    pub dominant: Trait,
}

impl PersonalityTraits {
    /// Build from raw scores, clamping each to [0, 1] and computing the
    /// dominant trait.
    pub fn from_scores(
        extraversion: f64,
        agreeableness: f64,
        conscientiousness: f64,
        neuroticism: f64,
        openness: f64,
    ) -> Self {
        let scored = [
            (Trait::Extraversion, extraversion.clamp(0.0, 1.0)),
            (Trait::Agreeableness, agreeableness.clamp(0.0, 1.0)),
            (Trait::Conscientiousness, conscientiousness.clamp(0.0, 1.0)),
            (Trait::Neuroticism, neuroticism.clamp(0.0, 1.0)),
            (Trait::Openness, openness.clamp(0.0, 1.0)),
        ];

        let mut dominant = scored[0];
        for &(kind, score) in &scored[1..] {
            if score > dominant.1 {
                dominant = (kind, score);
            }
        }

        Self {
            extraversion: scored[0].1,
            agreeableness: scored[1].1,
            conscientiousness: scored[2].1,
            neuroticism: scored[3].1,
            openness: scored[4].1,
            dominant: dominant.0,
        }
    }

    /// Scores paired with their trait, in declaration order.
    pub fn scores(&self) -> [(Trait, f64); 5] {
        [
            (Trait::Extraversion, self.extraversion),
            (Trait::Agreeableness, self.agreeableness),
            (Trait::Conscientiousness, self.conscientiousness),
            (Trait::Neuroticism, self.neuroticism),
            (Trait::Openness, self.openness),
        ]
    }
}

/// Keyword-membership trait scorer.
pub struct TraitScorer {
    keywords: [(Trait, HashSet<&'static str>); 5],
}

impl Default for TraitScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TraitScorer {
    /// Create a scorer over the built-in keyword lists.
    pub fn new() -> Self {
        Self {
            keywords: [
                (Trait::Extraversion, EXTRAVERSION_WORDS.iter().copied().collect()),
                (Trait::Agreeableness, AGREEABLENESS_WORDS.iter().copied().collect()),
                (Trait::Conscientiousness, CONSCIENTIOUSNESS_WORDS.iter().copied().collect()),
                (Trait::Neuroticism, NEUROTICISM_WORDS.iter().copied().collect()),
                (Trait::Openness, OPENNESS_WORDS.iter().copied().collect()),
            ],
        }
    }

    /// Score a text. Tokens are the lowercased text split on whitespace, with
    /// no punctuation stripping; a token may contribute to several traits.
    /// Raw counts are normalized by the maximum across the five traits, so
    /// the strongest trait scores 1.0 (all zeros when nothing matches).
    pub fn score(&self, text: &str) -> PersonalityTraits {
        let lowered = text.to_lowercase();
        let mut counts = [0usize; 5];

        for token in lowered.split_whitespace() {
            for (slot, (_, words)) in self.keywords.iter().enumerate() {
                if words.contains(token) {
                    counts[slot] += 1;
                }
            }
        }

        let max = counts.iter().copied().max().unwrap_or(0);
        let normalized = if max == 0 {
            [0.0; 5]
        } else {
            counts.map(|count| count as f64 / max as f64)
        };

        PersonalityTraits::from_scores(
            normalized[0],
            normalized[1],
            normalized[2],
            normalized[3],
            normalized[4],
        )
    }
}
