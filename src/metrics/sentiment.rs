//! Sentiment distribution aggregations
//!
//! Week-over-week sentiment percentage trends and per-topic breakdowns.
//! Callers are expected to time-filter the conversation list first
//! (`timerange::filter_by_range`); these functions only group and count.
//! The weekly trend buckets by `last_updated`, matching the dashboard's
//! trend charts; topic breakdowns use the conversation's topic tags with
//! fan-out (a conversation tagged N topics contributes to N rows).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SentimentBucketCounts;
use crate::models::Conversation;
use crate::timerange::week_start_sunday;

/// One week's sentiment percentages for the trend chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySentimentPoint {
    /// Sunday that starts the week, YYYY-MM-DD.
    pub week_start: String,
    /// Short display label, e.g. "Aug 10".
    pub label: String,
    pub positive_percent: u32,
    pub neutral_percent: u32,
    pub negative_percent: u32,
    pub total: u32,
}

/// Group conversations by Sunday-anchored week of `last_updated` and compute
/// the positive/neutral/negative percentage split per week, oldest first.
pub fn weekly_sentiment_trend(conversations: &[Conversation]) -> Vec<WeeklySentimentPoint> {
    let mut weeks: BTreeMap<NaiveDate, SentimentBucketCounts> = BTreeMap::new();

    for conversation in conversations {
        let week = week_start_sunday(conversation.last_updated.date());
        weeks
            .entry(week)
            .or_default()
            .add_label(&conversation.sentiment);
    }

    weeks
        .into_iter()
        .map(|(week, counts)| WeeklySentimentPoint {
            week_start: week.format("%Y-%m-%d").to_string(),
            label: week.format("%b %d").to_string(),
            positive_percent: counts.positive_percent(),
            neutral_percent: counts.neutral_percent(),
            negative_percent: counts.negative_percent(),
            total: counts.total,
        })
        .collect()
}

/// Sentiment split for one service-area topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSentiment {
    pub topic: String,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub total: u32,
    pub positive_percent: u32,
    pub neutral_percent: u32,
    pub negative_percent: u32,
    /// Set when more than 40% of the topic's conversations are negative.
    pub needs_attention: bool,
}

/// Per-topic sentiment breakdown over the filtered set, sorted by volume
/// descending. Topics with no matching conversations are absent, so the
/// percentage math never divides by zero. Per-topic totals can exceed the
/// conversation count because of fan-out.
pub fn topic_sentiment_breakdown(conversations: &[Conversation]) -> Vec<TopicSentiment> {
    let mut topics: BTreeMap<&str, SentimentBucketCounts> = BTreeMap::new();

    for conversation in conversations {
        for topic in &conversation.topics {
            topics
                .entry(topic.as_str())
                .or_default()
                .add_label(&conversation.sentiment);
        }
    }

    let mut rows: Vec<TopicSentiment> = topics
        .into_iter()
        .map(|(topic, counts)| {
            let negative_percent = counts.negative_percent();
            TopicSentiment {
                topic: topic.to_string(),
                positive: counts.positive,
                neutral: counts.neutral,
                negative: counts.negative,
                total: counts.total,
                positive_percent: counts.positive_percent(),
                neutral_percent: counts.neutral_percent(),
                negative_percent,
                needs_attention: negative_percent > 40,
            }
        })
        .collect();

    // Stable sort keeps the alphabetical base order for equal volumes.
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConversationStatus;
    use chrono::NaiveDateTime;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn conv(id: &str, sentiment: &str, topics: &[&str], last_updated: &str) -> Conversation {
        Conversation {
            id: id.to_string(),
            tenant_id: "1".to_string(),
            agent_ids: vec![],
            status: ConversationStatus::Solved,
            sentiment: sentiment.to_string(),
            emotions: vec![],
            topics: topics.iter().map(|t| t.to_string()).collect(),
            summary: String::new(),
            messages: vec![],
            started_at: dt(last_updated),
            last_updated: dt(last_updated),
        }
    }

    #[test]
    fn test_weekly_trend_groups_by_sunday() {
        // Aug 5/7 2025 fall in the week of Sunday Aug 3; Aug 12 in Aug 10.
        let conversations = vec![
            conv("a", "strong positive", &[], "2025-08-05T09:00:00"),
            conv("b", "neutral", &[], "2025-08-07T09:00:00"),
            conv("c", "strong negative", &[], "2025-08-12T09:00:00"),
        ];
        let trend = weekly_sentiment_trend(&conversations);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].week_start, "2025-08-03");
        assert_eq!(trend[0].total, 2);
        assert_eq!(trend[0].positive_percent, 50);
        assert_eq!(trend[0].neutral_percent, 50);
        assert_eq!(trend[1].week_start, "2025-08-10");
        assert_eq!(trend[1].negative_percent, 100);
        // chronological order
        assert!(trend[0].week_start < trend[1].week_start);
    }

    #[test]
    fn test_weekly_trend_three_way_split() {
        let conversations = vec![
            conv("a", "strong positive", &[], "2025-08-05T09:00:00"),
            conv("b", "neutral", &[], "2025-08-06T09:00:00"),
            conv("c", "strong negative", &[], "2025-08-07T09:00:00"),
        ];
        let trend = weekly_sentiment_trend(&conversations);
        assert_eq!(trend.len(), 1);
        let week = &trend[0];
        assert_eq!(
            (week.positive_percent, week.neutral_percent, week.negative_percent),
            (33, 33, 33)
        );
    }

    #[test]
    fn test_topic_breakdown_fan_out() {
        let conversations = vec![
            conv("a", "moderate negative", &["Billing", "Maintenance"], "2025-08-05T09:00:00"),
            conv("b", "weak positive", &["Billing"], "2025-08-06T09:00:00"),
        ];
        let rows = topic_sentiment_breakdown(&conversations);
        assert_eq!(rows.len(), 2);
        // fan-out: totals across topics (3) exceed conversation count (2)
        let total: u32 = rows.iter().map(|r| r.total).sum();
        assert_eq!(total, 3);

        let billing = rows.iter().find(|r| r.topic == "Billing").unwrap();
        assert_eq!(billing.total, 2);
        assert_eq!(billing.negative_percent, 50);
        assert_eq!(billing.positive_percent, 50);
        assert!(billing.needs_attention);
    }

    #[test]
    fn test_topic_breakdown_drops_empty_topics() {
        let conversations = vec![conv("a", "neutral", &["Noise"], "2025-08-05T09:00:00")];
        let rows = topic_sentiment_breakdown(&conversations);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].topic, "Noise");
        assert!(!rows[0].needs_attention);
    }

    #[test]
    fn test_topic_percentages_sum_to_100_when_nonempty() {
        let conversations = vec![
            conv("a", "strong positive", &["Cleaning"], "2025-08-05T09:00:00"),
            conv("b", "weak negative", &["Cleaning"], "2025-08-05T10:00:00"),
            conv("c", "neutral", &["Cleaning"], "2025-08-05T11:00:00"),
        ];
        let rows = topic_sentiment_breakdown(&conversations);
        let r = &rows[0];
        let sum = r.positive_percent + r.neutral_percent + r.negative_percent;
        assert!((99..=101).contains(&sum));
    }

    #[test]
    fn test_topic_breakdown_sorted_by_volume() {
        let conversations = vec![
            conv("a", "neutral", &["Noise"], "2025-08-05T09:00:00"),
            conv("b", "neutral", &["Billing"], "2025-08-05T09:00:00"),
            conv("c", "neutral", &["Billing"], "2025-08-05T09:00:00"),
        ];
        let rows = topic_sentiment_breakdown(&conversations);
        assert_eq!(rows[0].topic, "Billing");
        assert_eq!(rows[1].topic, "Noise");
    }
}
