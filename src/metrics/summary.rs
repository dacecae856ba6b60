//! Dashboard KPI summary
//!
//! The headline stat cards: totals, resolution state, negative-sentiment and
//! urgent counts, active agent count. Computed locally from whatever
//! conversation set the caller hands in (usually the unfiltered fetch).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Conversation, ConversationStatus};
use crate::scoring::SentimentBucket;

/// Aggregated KPI counters for the stat cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: u32,
    pub in_progress: u32,
    pub solved: u32,
    /// Conversations whose overall sentiment is negative (score <= -1).
    pub negative: u32,
    /// In progress AND negative: needs immediate attention.
    pub urgent: u32,
    /// Distinct agent ids seen across the set.
    pub agent_count: u32,
    /// solved / total * 100, 0.0 for an empty set.
    pub resolution_rate: f64,
}

/// Compute the KPI summary in one pass.
pub fn dashboard_summary(conversations: &[Conversation]) -> DashboardSummary {
    let mut summary = DashboardSummary::default();
    let mut agents: HashSet<&str> = HashSet::new();

    for conversation in conversations {
        summary.total += 1;

        let negative =
            SentimentBucket::from_label(&conversation.sentiment) == SentimentBucket::Negative;
        if negative {
            summary.negative += 1;
        }

        match conversation.status {
            ConversationStatus::InProgress => {
                summary.in_progress += 1;
                if negative {
                    summary.urgent += 1;
                }
            }
            ConversationStatus::Solved => summary.solved += 1,
            ConversationStatus::Unknown => {}
        }

        for id in &conversation.agent_ids {
            agents.insert(id.as_str());
        }
    }

    summary.agent_count = agents.len() as u32;
    summary.resolution_rate = if summary.total > 0 {
        summary.solved as f64 / summary.total as f64 * 100.0
    } else {
        0.0
    };
    summary
}
