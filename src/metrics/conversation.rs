//! Per-conversation trend summaries
//!
//! Compares the first and last tenant message in a thread to show whether a
//! conversation improved or degraded while it was open. Agent messages are
//! ignored; the trend is about the customer's trajectory.

use serde::{Deserialize, Serialize};

use crate::models::Conversation;
use crate::scoring::{sentiment_abbreviation, NEUTRAL_COLOR};

/// Direction of the tenant's sentiment across a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Flat,
}

/// Compact first-to-last trend for one conversation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTrend {
    /// "{first} - {last}" in two-letter abbreviations, e.g. "MN - WP".
    pub label: String,
    pub direction: TrendDirection,
    /// Display color: green improving, red declining, gray flat.
    pub color: &'static str,
}

/// Trend of tenant sentiment from the first to the last tenant message.
/// A conversation with no tenant messages reads as flat neutral ("N - N").
pub fn conversation_trend(conversation: &Conversation) -> ConversationTrend {
    let mut tenant = conversation.tenant_messages();
    let first = match tenant.next() {
        Some(message) => message,
        None => {
            return ConversationTrend {
                label: "N - N".to_string(),
                direction: TrendDirection::Flat,
                color: NEUTRAL_COLOR,
            }
        }
    };
    let last = tenant.last().unwrap_or(first);

    let direction = if last.sentiment > first.sentiment {
        TrendDirection::Improving
    } else if last.sentiment < first.sentiment {
        TrendDirection::Declining
    } else {
        TrendDirection::Flat
    };
    let color = match direction {
        TrendDirection::Improving => "#22c55e",
        TrendDirection::Declining => "#ef4444",
        TrendDirection::Flat => NEUTRAL_COLOR,
    };

    ConversationTrend {
        label: format!(
            "{} - {}",
            sentiment_abbreviation(first.sentiment),
            sentiment_abbreviation(last.sentiment)
        ),
        direction,
        color,
    }
}
