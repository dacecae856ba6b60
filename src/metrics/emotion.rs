//! Emotion time-series aggregations
//!
//! Builds dense, chart-ready bucket sequences: 24 hourly buckets for the
//! "today" view, or one bucket per calendar day across the data span
//! otherwise. Buckets with no conversations still appear with zeros so the
//! chart axis stays contiguous.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::Conversation;
use crate::timerange::RangeSelection;

/// How the time axis is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucketing {
    /// 24 hour-of-day buckets on the earliest matching day.
    Hourly,
    /// One bucket per calendar day, earliest through latest inclusive.
    Daily,
}

impl From<&RangeSelection> for Bucketing {
    fn from(selection: &RangeSelection) -> Self {
        match selection {
            RangeSelection::Today => Self::Hourly,
            _ => Self::Daily,
        }
    }
}

/// Occurrence counts for each emotion label in one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionCounts {
    pub anger: u32,
    pub fear: u32,
    pub disgust: u32,
    pub sadness: u32,
    pub surprise: u32,
    pub enjoyment: u32,
    pub neutral: u32,
}

impl EmotionCounts {
    /// Count one label occurrence; labels outside the vocabulary are ignored.
    pub fn add(&mut self, label: &str) {
        match label {
            "anger" => self.anger += 1,
            "fear" => self.fear += 1,
            "disgust" => self.disgust += 1,
            "sadness" => self.sadness += 1,
            "surprise" => self.surprise += 1,
            "enjoyment" => self.enjoyment += 1,
            "neutral" => self.neutral += 1,
            _ => {}
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Average intensity per emotion in one bucket, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionIntensities {
    pub anger: f64,
    pub fear: f64,
    pub disgust: f64,
    pub sadness: f64,
    pub surprise: f64,
    pub enjoyment: f64,
    pub neutral: f64,
}

/// One bucket of emotion label counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionCountPoint {
    /// Display label: "9 AM" for hourly buckets, "Aug 5" for daily.
    pub label: String,
    pub bucket_start: NaiveDateTime,
    #[serde(flatten)]
    pub counts: EmotionCounts,
}

/// One bucket of average emotion intensities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionIntensityPoint {
    pub label: String,
    pub bucket_start: NaiveDateTime,
    #[serde(flatten)]
    pub intensities: EmotionIntensities,
}

/// The contiguous bucket starts for a conversation set. Empty input yields
/// an empty sequence (there is no anchor day to chart).
fn bucket_starts(conversations: &[Conversation], bucketing: Bucketing) -> Vec<NaiveDateTime> {
    let earliest = match conversations.iter().map(|c| c.started_at).min() {
        Some(t) => t,
        None => return Vec::new(),
    };

    match bucketing {
        Bucketing::Hourly => {
            let day = earliest.date();
            (0..24)
                .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
                .collect()
        }
        Bucketing::Daily => {
            // latest exists whenever earliest does
            let latest = conversations
                .iter()
                .map(|c| c.started_at)
                .max()
                .unwrap_or(earliest);
            let mut days = Vec::new();
            let mut current = earliest.date();
            while current <= latest.date() {
                days.push(current.and_time(chrono::NaiveTime::MIN));
                current = match current.succ_opt() {
                    Some(next) => next,
                    None => break,
                };
            }
            days
        }
    }
}

fn in_bucket(t: NaiveDateTime, bucket_start: NaiveDateTime, bucketing: Bucketing) -> bool {
    match bucketing {
        Bucketing::Hourly => t.date() == bucket_start.date() && t.hour() == bucket_start.hour(),
        Bucketing::Daily => t.date() == bucket_start.date(),
    }
}

fn bucket_label(bucket_start: NaiveDateTime, bucketing: Bucketing) -> String {
    match bucketing {
        Bucketing::Hourly => bucket_start.format("%-I %p").to_string(),
        Bucketing::Daily => bucket_start.format("%b %-d").to_string(),
    }
}

/// Count conversation-level emotion labels per time bucket.
pub fn emotion_distribution(
    conversations: &[Conversation],
    bucketing: Bucketing,
) -> Vec<EmotionCountPoint> {
    bucket_starts(conversations, bucketing)
        .into_iter()
        .map(|start| {
            let mut counts = EmotionCounts::default();
            for conversation in conversations {
                if in_bucket(conversation.started_at, start, bucketing) {
                    for emotion in &conversation.emotions {
                        counts.add(emotion);
                    }
                }
            }
            EmotionCountPoint {
                label: bucket_label(start, bucketing),
                bucket_start: start,
                counts,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average per-message emotion intensities per time bucket. A bucket (or an
/// emotion within a bucket) with no contributing messages averages to 0.
pub fn emotion_intensity_trend(
    conversations: &[Conversation],
    bucketing: Bucketing,
) -> Vec<EmotionIntensityPoint> {
    bucket_starts(conversations, bucketing)
        .into_iter()
        .map(|start| {
            // (sum, sample count) per vocabulary emotion
            let mut sums = [(0.0f64, 0u32); 7];
            for conversation in conversations {
                if !in_bucket(conversation.started_at, start, bucketing) {
                    continue;
                }
                for message in &conversation.messages {
                    for (emotion, score) in &message.emotion_scores {
                        if let Some(slot) = emotion_slot(emotion) {
                            sums[slot].0 += score;
                            sums[slot].1 += 1;
                        }
                    }
                }
            }

            let avg = |slot: usize| -> f64 {
                let (sum, n) = sums[slot];
                if n == 0 {
                    0.0
                } else {
                    round2(sum / n as f64)
                }
            };

            EmotionIntensityPoint {
                label: bucket_label(start, bucketing),
                bucket_start: start,
                intensities: EmotionIntensities {
                    anger: avg(0),
                    fear: avg(1),
                    disgust: avg(2),
                    sadness: avg(3),
                    surprise: avg(4),
                    enjoyment: avg(5),
                    neutral: avg(6),
                },
            }
        })
        .collect()
}

fn emotion_slot(label: &str) -> Option<usize> {
    match label {
        "anger" => Some(0),
        "fear" => Some(1),
        "disgust" => Some(2),
        "sadness" => Some(3),
        "surprise" => Some(4),
        "enjoyment" => Some(5),
        "neutral" => Some(6),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConversationStatus, Message, SenderRole};
    use std::collections::HashMap;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn conv(id: &str, started_at: &str, emotions: &[&str]) -> Conversation {
        Conversation {
            id: id.to_string(),
            tenant_id: "1".to_string(),
            agent_ids: vec![],
            status: ConversationStatus::InProgress,
            sentiment: "neutral".to_string(),
            emotions: emotions.iter().map(|e| e.to_string()).collect(),
            topics: vec![],
            summary: String::new(),
            messages: vec![],
            started_at: dt(started_at),
            last_updated: dt(started_at),
        }
    }

    fn message(timestamp: &str, scores: &[(&str, f64)]) -> Message {
        Message {
            id: "m".to_string(),
            sender_id: "1".to_string(),
            sender_role: SenderRole::Tenant,
            content: String::new(),
            timestamp: dt(timestamp),
            sentiment: 0,
            emotions: vec![],
            emotion_scores: scores
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_hourly_buckets_are_always_24() {
        let conversations = vec![conv("a", "2025-08-05T09:15:00", &["anger"])];
        let points = emotion_distribution(&conversations, Bucketing::Hourly);
        assert_eq!(points.len(), 24);
        assert_eq!(points[9].counts.anger, 1);
        // every other bucket is all zeros but still present
        let zero_buckets = points.iter().filter(|p| p.counts.is_zero()).count();
        assert_eq!(zero_buckets, 23);
    }

    #[test]
    fn test_daily_buckets_span_is_contiguous() {
        let conversations = vec![
            conv("a", "2025-08-01T09:00:00", &["enjoyment"]),
            conv("b", "2025-08-04T09:00:00", &["sadness"]),
        ];
        let points = emotion_distribution(&conversations, Bucketing::Daily);
        // Aug 1 through Aug 4 inclusive, including the empty 2nd and 3rd
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].counts.enjoyment, 1);
        assert!(points[1].counts.is_zero());
        assert!(points[2].counts.is_zero());
        assert_eq!(points[3].counts.sadness, 1);
    }

    #[test]
    fn test_empty_input_yields_no_buckets() {
        assert!(emotion_distribution(&[], Bucketing::Daily).is_empty());
        assert!(emotion_intensity_trend(&[], Bucketing::Hourly).is_empty());
    }

    #[test]
    fn test_unknown_emotion_labels_ignored() {
        let conversations = vec![conv("a", "2025-08-01T09:00:00", &["anger", "ennui"])];
        let points = emotion_distribution(&conversations, Bucketing::Daily);
        assert_eq!(points[0].counts.anger, 1);
    }

    #[test]
    fn test_intensity_averages_across_messages() {
        let mut c = conv("a", "2025-08-05T09:00:00", &[]);
        c.messages = vec![
            message("2025-08-05T09:00:00", &[("anger", 0.7), ("fear", 0.6)]),
            message("2025-08-05T09:15:00", &[("anger", 0.1)]),
        ];
        let points = emotion_intensity_trend(&[c], Bucketing::Daily);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].intensities.anger, 0.4);
        assert_eq!(points[0].intensities.fear, 0.6);
        // no samples -> 0, not NaN
        assert_eq!(points[0].intensities.disgust, 0.0);
    }

    #[test]
    fn test_intensity_rounds_to_two_decimals() {
        let mut c = conv("a", "2025-08-05T09:00:00", &[]);
        c.messages = vec![
            message("2025-08-05T09:00:00", &[("enjoyment", 0.9)]),
            message("2025-08-05T09:05:00", &[("enjoyment", 0.8)]),
            message("2025-08-05T09:10:00", &[("enjoyment", 0.8)]),
        ];
        let points = emotion_intensity_trend(&[c], Bucketing::Daily);
        // (0.9 + 0.8 + 0.8) / 3 = 0.8333... -> 0.83
        assert_eq!(points[0].intensities.enjoyment, 0.83);
    }

    #[test]
    fn test_bucketing_from_selection() {
        assert_eq!(Bucketing::from(&RangeSelection::Today), Bucketing::Hourly);
        assert_eq!(Bucketing::from(&RangeSelection::Week), Bucketing::Daily);
        assert_eq!(Bucketing::from(&RangeSelection::All), Bucketing::Daily);
    }

    #[test]
    fn test_hourly_only_counts_same_day() {
        // a conversation on a later day at the same hour must not leak into
        // the earliest day's bucket
        let conversations = vec![
            conv("a", "2025-08-05T09:00:00", &["anger"]),
            conv("b", "2025-08-06T09:00:00", &["anger"]),
        ];
        let points = emotion_distribution(&conversations, Bucketing::Hourly);
        assert_eq!(points[9].counts.anger, 1);
    }
}
