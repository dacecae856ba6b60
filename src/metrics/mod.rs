//! Distribution aggregators
//!
//! Pure single-pass aggregations over a (time-filtered) conversation list:
//! - sentiment bucket counts and weekly percentage trends
//! - emotion count/intensity time series with dense buckets
//! - per-topic sentiment breakdowns
//! - dashboard KPI summary
//! - per-conversation trend summaries

pub mod conversation;
pub mod emotion;
pub mod sentiment;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::scoring::SentimentBucket;

/// Positive/neutral/negative counts for one group of conversations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBucketCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub total: u32,
}

impl SentimentBucketCounts {
    /// Bucket one conversation-level sentiment label.
    pub fn add_label(&mut self, label: &str) {
        match SentimentBucket::from_label(label) {
            SentimentBucket::Positive => self.positive += 1,
            SentimentBucket::Neutral => self.neutral += 1,
            SentimentBucket::Negative => self.negative += 1,
        }
        self.total += 1;
    }

    fn percent(&self, count: u32) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (count as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Share of positive conversations, rounded to the nearest integer.
    pub fn positive_percent(&self) -> u32 {
        self.percent(self.positive)
    }

    pub fn neutral_percent(&self) -> u32 {
        self.percent(self.neutral)
    }

    pub fn negative_percent(&self) -> u32 {
        self.percent(self.negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_counts_three_way_split() {
        let mut counts = SentimentBucketCounts::default();
        counts.add_label("strong positive");
        counts.add_label("neutral");
        counts.add_label("strong negative");

        assert_eq!(counts.positive, 1);
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.total, 3);

        // 1/3 rounds to 33; independent rounding may leave the three
        // percentages summing to 99 here.
        assert_eq!(counts.positive_percent(), 33);
        assert_eq!(counts.neutral_percent(), 33);
        assert_eq!(counts.negative_percent(), 33);
    }

    #[test]
    fn test_percentages_sum_near_100() {
        let mut counts = SentimentBucketCounts::default();
        for label in ["weak positive", "weak positive", "neutral", "moderate negative"] {
            counts.add_label(label);
        }
        let sum =
            counts.positive_percent() + counts.neutral_percent() + counts.negative_percent();
        assert!((99..=101).contains(&sum), "sum was {}", sum);
    }

    #[test]
    fn test_empty_counts_have_zero_percentages() {
        let counts = SentimentBucketCounts::default();
        assert_eq!(counts.positive_percent(), 0);
        assert_eq!(counts.neutral_percent(), 0);
        assert_eq!(counts.negative_percent(), 0);
    }

    #[test]
    fn test_unrecognized_label_counts_as_neutral() {
        let mut counts = SentimentBucketCounts::default();
        counts.add_label("somewhat miffed");
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.total, 1);
    }
}
