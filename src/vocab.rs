//! Canonical vocabularies for sentiment, emotion and topic labels
//!
//! Every aggregator reads these tables from this single definition site.
//! The sentiment ordering is load-bearing: a label's numeric score is its
//! index here minus 3, so the spelling and order must not change.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Ordered sentiment vocabulary, weakest to strongest.
/// Score of a label = index - 3, yielding the signed range -3..=3.
pub const SENTIMENT_LEVELS: [&str; 7] = [
    "strong negative",
    "moderate negative",
    "weak negative",
    "neutral",
    "weak positive",
    "moderate positive",
    "strong positive",
];

/// Fixed emotion label set used for both conversation-level label lists
/// and per-message intensity maps.
pub const EMOTION_TYPES: [&str; 7] = [
    "anger",
    "fear",
    "disgust",
    "sadness",
    "surprise",
    "enjoyment",
    "neutral",
];

/// Service-area topic labels used for grouping.
pub const TOPIC_TYPES: [&str; 5] = ["Billing", "Maintenance", "Amenities", "Noise", "Cleaning"];

/// Emotions counted as positive in agent performance tallies.
pub const POSITIVE_EMOTIONS: [&str; 2] = ["enjoyment", "surprise"];

/// Emotions counted as negative in agent performance tallies.
pub const NEGATIVE_EMOTIONS: [&str; 4] = ["anger", "fear", "disgust", "sadness"];

lazy_static! {
    /// Label -> signed score lookup built from SENTIMENT_LEVELS.
    pub static ref SENTIMENT_INDEX: HashMap<&'static str, i32> = SENTIMENT_LEVELS
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, i as i32 - 3))
        .collect();
}

/// Whether a label belongs to the fixed emotion vocabulary.
pub fn is_known_emotion(label: &str) -> bool {
    EMOTION_TYPES.contains(&label)
}

/// Whether a label belongs to the fixed topic vocabulary.
pub fn is_known_topic(label: &str) -> bool {
    TOPIC_TYPES.contains(&label)
}
