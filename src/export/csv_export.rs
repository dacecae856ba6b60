//! CSV serialization for aggregate rows

use std::path::Path;

use csv::Writer;

use super::{ExportableAgentRow, ExportableEmotionRow, ExportableTopicRow};
use crate::metrics::sentiment::WeeklySentimentPoint;
use crate::AnalyticsError;

/// Write ranked agent rows to CSV
pub fn write_agents_csv(rows: &[ExportableAgentRow], path: &Path) -> Result<(), AnalyticsError> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write trending-topic rows to CSV
pub fn write_topics_csv(rows: &[ExportableTopicRow], path: &Path) -> Result<(), AnalyticsError> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the weekly sentiment trend to CSV
pub fn write_weekly_sentiment_csv(
    points: &[WeeklySentimentPoint],
    path: &Path,
) -> Result<(), AnalyticsError> {
    let mut writer = Writer::from_path(path)?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write emotion count buckets to CSV
pub fn write_emotions_csv(
    rows: &[ExportableEmotionRow],
    path: &Path,
) -> Result<(), AnalyticsError> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
