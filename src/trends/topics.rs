//! Trending service-area topics
//!
//! Ranks topics by conversation volume in the current window and, when the
//! caller supplies the preceding window's conversations, marks each topic as
//! rising, falling or stable against it. Without a prior period the
//! direction is simply absent; nothing is guessed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Conversation;
use crate::scoring::sentiment_score_or_neutral;

/// Volume movement of a topic versus the prior period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicDirection {
    Up,
    Down,
    Stable,
}

/// Whether a topic's conversations skew positive or negative overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentImpact {
    Positive,
    Neutral,
    Negative,
}

impl SentimentImpact {
    /// Positive at mean score > 0.5, negative at < -0.5. Exactly +-0.5
    /// stays neutral.
    fn from_mean(mean: f64) -> Self {
        if mean > 0.5 {
            Self::Positive
        } else if mean < -0.5 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// One topic row in the trending-topics panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicTrend {
    pub topic: String,
    /// Conversations tagged with this topic in the current window.
    pub count: u32,
    /// count / window conversation count * 100, unrounded. Can exceed the
    /// sum-to-100 intuition because conversations carry multiple topics.
    pub share: f64,
    /// Mean conversation-level sentiment score over the topic's conversations.
    pub avg_sentiment: f64,
    pub impact: SentimentImpact,
    /// Movement vs the prior period; `None` when no prior period was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<TopicDirection>,
}

fn topic_counts(conversations: &[Conversation]) -> BTreeMap<&str, (u32, i64)> {
    let mut counts: BTreeMap<&str, (u32, i64)> = BTreeMap::new();
    for conversation in conversations {
        let score = sentiment_score_or_neutral(&conversation.sentiment) as i64;
        for topic in &conversation.topics {
            let entry = counts.entry(topic.as_str()).or_default();
            entry.0 += 1;
            entry.1 += score;
        }
    }
    counts
}

/// Topic volume ranking for the current window, most-discussed first.
/// `previous` is the conversation set of the equally-sized preceding window.
pub fn trending_topics(
    current: &[Conversation],
    previous: Option<&[Conversation]>,
) -> Vec<TopicTrend> {
    if current.is_empty() {
        return Vec::new();
    }
    let window_total = current.len() as f64;
    let prior = previous.map(topic_counts);

    let mut rows: Vec<TopicTrend> = topic_counts(current)
        .into_iter()
        .map(|(topic, (count, score_sum))| {
            let avg_sentiment = score_sum as f64 / count as f64;
            let direction = prior.as_ref().map(|prev| {
                let prev_count = prev.get(topic).map(|(c, _)| *c).unwrap_or(0);
                if count > prev_count {
                    TopicDirection::Up
                } else if count < prev_count {
                    TopicDirection::Down
                } else {
                    TopicDirection::Stable
                }
            });
            TopicTrend {
                topic: topic.to_string(),
                count,
                share: count as f64 / window_total * 100.0,
                avg_sentiment,
                impact: SentimentImpact::from_mean(avg_sentiment),
                direction,
            }
        })
        .collect();

    // Stable sort: equal volumes keep alphabetical order from the BTreeMap.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
