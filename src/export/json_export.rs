//! JSON export with full structure preservation

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::metrics::sentiment::{TopicSentiment, WeeklySentimentPoint};
use crate::metrics::summary::DashboardSummary;
use crate::trends::{AgentPerformance, TopicTrend};
use crate::AnalyticsError;

const EXPORT_VERSION: &str = "1.0.0";

/// Complete dashboard snapshot for JSON export
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExportJson {
    pub export_date: String,
    pub export_version: &'static str,
    pub summary: DashboardSummary,
    pub weekly_sentiment: Vec<WeeklySentimentPoint>,
    pub topic_sentiment: Vec<TopicSentiment>,
    pub trending_topics: Vec<TopicTrend>,
    pub agents: Vec<AgentPerformance>,
}

impl DashboardExportJson {
    pub fn new(
        summary: DashboardSummary,
        weekly_sentiment: Vec<WeeklySentimentPoint>,
        topic_sentiment: Vec<TopicSentiment>,
        trending_topics: Vec<TopicTrend>,
        agents: Vec<AgentPerformance>,
    ) -> Self {
        Self {
            export_date: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            export_version: EXPORT_VERSION,
            summary,
            weekly_sentiment,
            topic_sentiment,
            trending_topics,
            agents,
        }
    }
}

/// Write any serializable aggregate to pretty-printed JSON
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), AnalyticsError> {
    let mut file = std::fs::File::create(path)?;
    let json = serde_json::to_string_pretty(value)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
