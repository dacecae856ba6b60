//! CSV and JSON export of computed aggregates
//!
//! Flattens the nested aggregate types into row records the `csv` crate can
//! serialize, and writes either format to a caller-chosen path.

pub mod csv_export;
pub mod json_export;

use serde::{Deserialize, Serialize};

use crate::metrics::emotion::EmotionCountPoint;
use crate::trends::{AgentPerformance, TopicTrend};
use crate::AnalyticsError;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(AnalyticsError::Internal(format!(
                "Invalid export format: {}. Use 'csv' or 'json'",
                s
            ))),
        }
    }
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Generate a timestamped filename for exports
pub fn generate_export_filename(prefix: &str, extension: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.{}", prefix, timestamp, extension)
}

/// Flat agent performance record for CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportableAgentRow {
    pub rank: u32,
    pub agent_id: String,
    pub agent_name: String,
    pub total_tickets: u32,
    pub solved_tickets: u32,
    pub resolution_rate: f64,
    pub avg_sentiment: f64,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub positive_emotions: u32,
    pub negative_emotions: u32,
}

impl From<&AgentPerformance> for ExportableAgentRow {
    fn from(row: &AgentPerformance) -> Self {
        Self {
            rank: row.rank,
            agent_id: row.agent_id.clone(),
            agent_name: row.agent_name.clone(),
            total_tickets: row.total_tickets,
            solved_tickets: row.solved_tickets,
            resolution_rate: row.resolution_rate,
            avg_sentiment: row.avg_sentiment,
            positive: row.sentiment_breakdown.positive,
            neutral: row.sentiment_breakdown.neutral,
            negative: row.sentiment_breakdown.negative,
            positive_emotions: row.positive_emotions,
            negative_emotions: row.negative_emotions,
        }
    }
}

/// Flat trending-topic record for CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportableTopicRow {
    pub topic: String,
    pub count: u32,
    pub share: f64,
    pub avg_sentiment: f64,
    pub impact: String,
    /// Empty when no prior period was supplied.
    pub direction: String,
}

impl From<&TopicTrend> for ExportableTopicRow {
    fn from(row: &TopicTrend) -> Self {
        Self {
            topic: row.topic.clone(),
            count: row.count,
            share: row.share,
            avg_sentiment: row.avg_sentiment,
            impact: format!("{:?}", row.impact).to_lowercase(),
            direction: row
                .direction
                .map(|d| format!("{:?}", d).to_lowercase())
                .unwrap_or_default(),
        }
    }
}

/// Flat emotion-count bucket record for CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportableEmotionRow {
    pub label: String,
    pub anger: u32,
    pub fear: u32,
    pub disgust: u32,
    pub sadness: u32,
    pub surprise: u32,
    pub enjoyment: u32,
    pub neutral: u32,
}

impl From<&EmotionCountPoint> for ExportableEmotionRow {
    fn from(point: &EmotionCountPoint) -> Self {
        Self {
            label: point.label.clone(),
            anger: point.counts.anger,
            fear: point.counts.fear,
            disgust: point.counts.disgust,
            sadness: point.counts.sadness,
            surprise: point.counts.surprise,
            enjoyment: point.counts.enjoyment,
            neutral: point.counts.neutral,
        }
    }
}

pub use csv_export::*;
pub use json_export::*;
