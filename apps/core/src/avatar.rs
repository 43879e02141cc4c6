//! Avatar attribute mapping.
//!
//! Maps the dominant personality trait onto a fixed bundle of discrete
//! visual attributes, and supports generating variations by perturbing the
//! trait scores with caller-supplied randomness. Rendering the attributes
//! into an image is a downstream concern; this module stops at the values.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::personality::{PersonalityTraits, Trait};

/// Half-width of the uniform noise applied to each score on regeneration.
const PERTURBATION_RANGE: f64 = 0.1;

/// Discrete visual attributes for one avatar. A value type: regeneration
/// replaces the whole bundle, never individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarAttributes {
    pub head: String,
    pub eyes: String,
    pub eyebrows: String,
    pub mouth: String,
    pub accessories: String,
    pub hair_style: String,
    /// Hex color.
    pub hair_color: String,
    pub facial_hair: String,
    /// Hex color.
    pub skin_tone: String,
    /// Hex color.
    pub background: String,
}

impl Default for AvatarAttributes {
    /// The base bundle, used as the canvas for every trait mapping.
    fn default() -> Self {
        Self {
            head: "round".to_string(),
            eyes: "default".to_string(),
            eyebrows: "default".to_string(),
            mouth: "default".to_string(),
            accessories: "none".to_string(),
            hair_style: "short".to_string(),
            hair_color: "#5E3B28".to_string(),
            facial_hair: "none".to_string(),
            skin_tone: "#F8D5C2".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

/// Map a dominant trait to its fixed attribute bundle.
pub fn map_dominant_trait(dominant: Trait) -> AvatarAttributes {
    let base = AvatarAttributes::default();

    match dominant {
        Trait::Extraversion => AvatarAttributes {
            eyes: "wide".to_string(),
            eyebrows: "raised".to_string(),
            mouth: "big-smile".to_string(),
            hair_style: "wild".to_string(),
            hair_color: "#FF9500".to_string(),
            background: "#FFE082".to_string(),
            ..base
        },
        Trait::Agreeableness => AvatarAttributes {
            eyes: "round".to_string(),
            eyebrows: "relaxed".to_string(),
            mouth: "smile".to_string(),
            hair_style: "wavy".to_string(),
            hair_color: "#8D6E63".to_string(),
            skin_tone: "#FFE0B2".to_string(),
            background: "#E1F5FE".to_string(),
            ..base
        },
        Trait::Conscientiousness => AvatarAttributes {
            eyes: "focused".to_string(),
            eyebrows: "straight".to_string(),
            mouth: "neutral".to_string(),
            accessories: "glasses".to_string(),
            hair_style: "neat".to_string(),
            hair_color: "#3E2723".to_string(),
            skin_tone: "#FFF9C4".to_string(),
            background: "#E8F5E9".to_string(),
            ..base
        },
        Trait::Neuroticism => AvatarAttributes {
            eyes: "worried".to_string(),
            eyebrows: "worried".to_string(),
            mouth: "slight-frown".to_string(),
            hair_style: "messy".to_string(),
            hair_color: "#37474F".to_string(),
            skin_tone: "#EFEBE9".to_string(),
            background: "#F3E5F5".to_string(),
            ..base
        },
        Trait::Openness => AvatarAttributes {
            eyes: "curious".to_string(),
            eyebrows: "expressive".to_string(),
            mouth: "thoughtful".to_string(),
            accessories: "earring".to_string(),
            hair_style: "artistic".to_string(),
            hair_color: "#7E57C2".to_string(),
            skin_tone: "#FFF3E0".to_string(),
            background: "#BBDEFB".to_string(),
            ..base
        },
    }
}

/// Generate an avatar variation.
///
/// Adds uniform noise in `[-0.1, 0.1]` to each trait score (clamped back to
/// [0, 1]), recomputes the dominant trait, and maps it. The generator is
/// injected so variation is reproducible under test.
pub fn perturb<R: Rng>(traits: &PersonalityTraits, rng: &mut R) -> AvatarAttributes {
    let mut jitter =
        |score: f64| score + rng.gen_range(-PERTURBATION_RANGE..=PERTURBATION_RANGE);

    let varied = PersonalityTraits::from_scores(
        jitter(traits.extraversion),
        jitter(traits.agreeableness),
        jitter(traits.conscientiousness),
        jitter(traits.neuroticism),
        jitter(traits.openness),
    );

    map_dominant_trait(varied.dominant)
}
