//! Sentiment and emotion scoring
//!
//! Converts categorical sentiment labels to the signed -3..=3 scale and maps
//! scores and emotion labels to display abbreviations and colors. All color
//! functions are total; unrecognized emotion labels fall back to neutral gray.

use serde::{Deserialize, Serialize};

use crate::vocab::SENTIMENT_INDEX;

/// Neutral gray used for unknown emotions and flat trends.
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// Signed score for a sentiment label, `None` when the label is not in the
/// vocabulary. The upstream data is expected to use the canonical spellings;
/// anything else is the caller's problem to surface.
pub fn sentiment_score(label: &str) -> Option<i32> {
    SENTIMENT_INDEX.get(label).copied()
}

/// Lenient scoring used inside aggregation loops: unrecognized labels score
/// as neutral (0) and are logged, so a single bad record never poisons a
/// whole bucket.
pub fn sentiment_score_or_neutral(label: &str) -> i32 {
    match sentiment_score(label) {
        Some(score) => score,
        None => {
            tracing::warn!("unrecognized sentiment label {:?}, scoring as neutral", label);
            0
        }
    }
}

/// Two-letter abbreviation for a sentiment score. Out-of-range scores clamp
/// to the nearest extreme, so this never fails.
pub fn sentiment_abbreviation(score: i32) -> &'static str {
    match score {
        i32::MIN..=-3 => "SN",
        -2 => "MN",
        -1 => "WN",
        0 => "N",
        1 => "WP",
        2 => "MP",
        3..=i32::MAX => "SP",
    }
}

/// Five-way color banding for a sentiment score.
pub fn sentiment_color(score: i32) -> &'static str {
    if score <= -2 {
        "#ef4444" // red
    } else if score == -1 {
        "#f97316" // orange
    } else if score == 0 {
        NEUTRAL_COLOR
    } else if score == 1 {
        "#eab308" // yellow
    } else {
        "#22c55e" // green
    }
}

/// Display color for an emotion label, neutral gray for anything unknown.
pub fn emotion_color(emotion: &str) -> &'static str {
    match emotion {
        "anger" => "#ef4444",
        "fear" => "#f97316",
        "disgust" => "#84cc16",
        "sadness" => "#3b82f6",
        "surprise" => "#8b5cf6",
        "enjoyment" => "#10b981",
        "neutral" => NEUTRAL_COLOR,
        _ => NEUTRAL_COLOR,
    }
}

/// Three-way sentiment classification used by the distribution aggregators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBucket {
    Positive,
    Neutral,
    Negative,
}

impl SentimentBucket {
    /// Positive at score >= 1, negative at score <= -1, neutral at 0.
    pub fn from_score(score: i32) -> Self {
        if score >= 1 {
            Self::Positive
        } else if score <= -1 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Bucket for a conversation-level sentiment label.
    pub fn from_label(label: &str) -> Self {
        Self::from_score(sentiment_score_or_neutral(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::SENTIMENT_LEVELS;

    #[test]
    fn test_sentiment_score_known_labels() {
        assert_eq!(sentiment_score("strong negative"), Some(-3));
        assert_eq!(sentiment_score("neutral"), Some(0));
        assert_eq!(sentiment_score("strong positive"), Some(3));
    }

    #[test]
    fn test_sentiment_score_unknown_label() {
        assert_eq!(sentiment_score("ecstatic"), None);
        assert_eq!(sentiment_score(""), None);
        // lenient path defaults to neutral instead of the old -4 artifact
        assert_eq!(sentiment_score_or_neutral("ecstatic"), 0);
    }

    #[test]
    fn test_abbreviation_round_trips_label_sign() {
        for label in SENTIMENT_LEVELS {
            let score = sentiment_score(label).unwrap();
            let abbrev = sentiment_abbreviation(score);
            if score < 0 {
                assert!(abbrev.ends_with('N'), "{} -> {}", label, abbrev);
                assert_ne!(abbrev, "N");
            } else if score > 0 {
                assert!(abbrev.ends_with('P'), "{} -> {}", label, abbrev);
            } else {
                assert_eq!(abbrev, "N");
            }
        }
    }

    #[test]
    fn test_abbreviation_clamps_out_of_range() {
        assert_eq!(sentiment_abbreviation(-10), "SN");
        assert_eq!(sentiment_abbreviation(10), "SP");
        assert_eq!(sentiment_abbreviation(0), "N");
    }

    #[test]
    fn test_sentiment_color_banding() {
        assert_eq!(sentiment_color(-3), sentiment_color(-2));
        assert_ne!(sentiment_color(-1), sentiment_color(-2));
        assert_eq!(sentiment_color(0), NEUTRAL_COLOR);
        assert_ne!(sentiment_color(1), sentiment_color(2));
        assert_eq!(sentiment_color(2), sentiment_color(3));
    }

    #[test]
    fn test_emotion_color_fallback() {
        assert_eq!(emotion_color("anger"), "#ef4444");
        assert_eq!(emotion_color("boredom"), NEUTRAL_COLOR);
        assert_eq!(emotion_color(""), NEUTRAL_COLOR);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(SentimentBucket::from_score(1), SentimentBucket::Positive);
        assert_eq!(SentimentBucket::from_score(0), SentimentBucket::Neutral);
        assert_eq!(SentimentBucket::from_score(-1), SentimentBucket::Negative);
        assert_eq!(SentimentBucket::from_score(3), SentimentBucket::Positive);
        assert_eq!(SentimentBucket::from_score(-3), SentimentBucket::Negative);
    }
}
