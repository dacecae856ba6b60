//! Agent performance ranking
//!
//! Builds one row per active agent from the conversations they handled,
//! ranks the rows under a chosen criterion, then lets the UI re-sort the
//! ranked rows for display without disturbing the rank numbers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::metrics::emotion::EmotionCounts;
use crate::metrics::SentimentBucketCounts;
use crate::models::{Agent, Conversation, ConversationStatus};
use crate::scoring::sentiment_score_or_neutral;
use crate::vocab::{NEGATIVE_EMOTIONS, POSITIVE_EMOTIONS};

/// What "best" means when ranking agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RankingCriterion {
    /// resolution_rate * 0.6 + avg_sentiment * 40
    #[default]
    Overall,
    Resolution,
    Sentiment,
}

impl From<&str> for RankingCriterion {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "resolution" => RankingCriterion::Resolution,
            "sentiment" => RankingCriterion::Sentiment,
            _ => RankingCriterion::Overall,
        }
    }
}

/// One agent's aggregated performance row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformance {
    pub agent_id: String,
    pub agent_name: String,
    pub total_tickets: u32,
    pub solved_tickets: u32,
    /// solved / total * 100.
    pub resolution_rate: f64,
    /// Mean conversation-level sentiment score, -3..=3.
    pub avg_sentiment: f64,
    pub sentiment_breakdown: SentimentBucketCounts,
    pub emotion_breakdown: EmotionCounts,
    /// Conversation-level emotion tags with positive polarity.
    pub positive_emotions: u32,
    pub negative_emotions: u32,
    /// 1-based position under the chosen criterion; ties are broken by
    /// the agents' input order, so every row gets a distinct rank.
    pub rank: u32,
}

impl AgentPerformance {
    fn score(&self, criterion: RankingCriterion) -> f64 {
        match criterion {
            RankingCriterion::Overall => self.resolution_rate * 0.6 + self.avg_sentiment * 40.0,
            RankingCriterion::Resolution => self.resolution_rate,
            RankingCriterion::Sentiment => self.avg_sentiment,
        }
    }
}

/// Aggregate and rank agents over a (time-filtered) conversation set.
///
/// Rows follow the `agents` input order before ranking, so ties in the
/// criterion score keep that order. Agents with no conversations in the set
/// are omitted entirely rather than shown with empty stats.
pub fn rank_agents(
    conversations: &[Conversation],
    agents: &[Agent],
    criterion: RankingCriterion,
) -> Vec<AgentPerformance> {
    let mut rows: Vec<AgentPerformance> = agents
        .iter()
        .filter_map(|agent| build_row(conversations, agent))
        .collect();

    rows.sort_by(|a, b| {
        b.score(criterion)
            .partial_cmp(&a.score(criterion))
            .unwrap_or(Ordering::Equal)
    });

    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position as u32 + 1;
    }
    rows
}

fn build_row(conversations: &[Conversation], agent: &Agent) -> Option<AgentPerformance> {
    let handled: Vec<&Conversation> = conversations
        .iter()
        .filter(|c| c.agent_ids.iter().any(|id| id == &agent.id))
        .collect();
    if handled.is_empty() {
        return None;
    }

    let total = handled.len() as u32;
    let solved = handled
        .iter()
        .filter(|c| c.status == ConversationStatus::Solved)
        .count() as u32;

    let mut sentiment_breakdown = SentimentBucketCounts::default();
    let mut emotion_breakdown = EmotionCounts::default();
    let mut positive_emotions = 0;
    let mut negative_emotions = 0;
    let mut score_sum = 0i64;
    for conversation in &handled {
        sentiment_breakdown.add_label(&conversation.sentiment);
        score_sum += sentiment_score_or_neutral(&conversation.sentiment) as i64;
        for emotion in &conversation.emotions {
            emotion_breakdown.add(emotion);
            if POSITIVE_EMOTIONS.contains(&emotion.as_str()) {
                positive_emotions += 1;
            } else if NEGATIVE_EMOTIONS.contains(&emotion.as_str()) {
                negative_emotions += 1;
            }
        }
    }

    Some(AgentPerformance {
        agent_id: agent.id.clone(),
        agent_name: agent.name.clone(),
        total_tickets: total,
        solved_tickets: solved,
        resolution_rate: solved as f64 / total as f64 * 100.0,
        avg_sentiment: score_sum as f64 / total as f64,
        sentiment_breakdown,
        emotion_breakdown,
        positive_emotions,
        negative_emotions,
        rank: 0,
    })
}

/// Column to re-sort ranked rows by for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Rank,
    Name,
    Tickets,
    Resolution,
    Sentiment,
    #[serde(rename = "positiveEmotions")]
    PositiveEmotions,
    #[serde(rename = "negativeEmotions")]
    NegativeEmotions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Display sort, applied after ranking. Rank values are untouched, so a
/// table sorted by name still shows each agent's criterion rank.
pub fn sort_rows(rows: &mut [AgentPerformance], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match field {
            SortField::Rank => a.rank.cmp(&b.rank),
            SortField::Name => a.agent_name.cmp(&b.agent_name),
            SortField::Tickets => a.total_tickets.cmp(&b.total_tickets),
            SortField::Resolution => a
                .resolution_rate
                .partial_cmp(&b.resolution_rate)
                .unwrap_or(Ordering::Equal),
            SortField::Sentiment => a
                .avg_sentiment
                .partial_cmp(&b.avg_sentiment)
                .unwrap_or(Ordering::Equal),
            SortField::PositiveEmotions => a.positive_emotions.cmp(&b.positive_emotions),
            SortField::NegativeEmotions => a.negative_emotions.cmp(&b.negative_emotions),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
