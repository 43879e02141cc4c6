//! Sentiment scoring over chat text.
//!
//! Deliberately coarse: fixed word lists, substring containment, saturating
//! normalization. The list contents and the formula are a compatibility
//! contract with the consuming UI.

/// Words and emoji whose presence counts toward a positive score.
const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "excellent",
    "wonderful",
    "amazing",
    "love",
    "like",
    "best",
    "awesome",
    "fantastic",
    "beautiful",
    "perfect",
    "thank",
    "thanks",
    "glad",
    "pleased",
    "joy",
    "exciting",
    "excited",
    "haha",
    "lol",
    "😊",
    "😄",
    "👍",
];

/// Words and emoji whose presence counts toward a negative score.
const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "dislike",
    "worst",
    "poor",
    "disappointed",
    "disappointing",
    "sad",
    "unhappy",
    "sorry",
    "unfortunately",
    "fail",
    "failed",
    "problem",
    "issue",
    "angry",
    "mad",
    "😠",
    "😡",
    "👎",
];

/// Sentiment scorer holding its word lists as immutable configuration.
pub struct SentimentScorer {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Create a scorer over the built-in word lists.
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS,
            negative: NEGATIVE_WORDS,
        }
    }

    /// Score a text in [-1, 1].
    ///
    /// Each list entry contributes at most once, by substring containment on
    /// the lowercased text - an entry matching inside a longer token still
    /// counts. A raw counter of 0 scores 0; otherwise the counter is divided
    /// by `max(|counter|, 10)`, so scores saturate at ±1.
    pub fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let mut counter: i64 = 0;

        for word in self.positive {
            if lowered.contains(word) {
                counter += 1;
            }
        }
        for word in self.negative {
            if lowered.contains(word) {
                counter -= 1;
            }
        }

        if counter == 0 {
            0.0
        } else {
            counter as f64 / counter.abs().max(10) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = SentimentScorer::new();

        let score = scorer.score("what a wonderful, amazing day");
        assert!(score > 0.0);
        assert!((score - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_text() {
        let scorer = SentimentScorer::new();

        let score = scorer.score("terrible, awful, just bad");
        assert!((score - (-0.3)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_neutral_text() {
        let scorer = SentimentScorer::new();

        assert_eq!(scorer.score("the meeting is at noon"), 0.0);
        assert_eq!(scorer.score(""), 0.0);
    }

    #[test]
    fn test_emoji_entries_count() {
        let scorer = SentimentScorer::new();

        assert!(scorer.score("😊") > 0.0);
        assert!(scorer.score("😡") < 0.0);
    }

    #[test]
    fn test_substring_containment() {
        let scorer = SentimentScorer::new();

        // "dislike" carries -1 but also contains "like" (+1)
        assert_eq!(scorer.score("i dislike this"), 0.0);
    }

    #[test]
    fn test_score_saturates() {
        let scorer = SentimentScorer::new();

        let everything_positive = POSITIVE_WORDS.join(" ");
        assert_eq!(scorer.score(&everything_positive), 1.0);

        let everything_negative = NEGATIVE_WORDS.join(" ");
        assert_eq!(scorer.score(&everything_negative), -1.0);
    }
}
