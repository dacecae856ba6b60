//! Coliving support analytics core
//!
//! Aggregation engine behind the coliving customer-support dashboard.
//! It turns conversation records fetched from the support API into
//! chart-ready series:
//! - Sentiment scoring on the 7-level -3..=3 scale
//! - Time-range filtering with calendar and trailing windows
//! - Sentiment, emotion and topic distributions
//! - Trending topics and ranked agent performance
//! - CSV/JSON export of computed aggregates
//!
//! All aggregation is pure and synchronous; only the API client does I/O.

pub mod api;
pub mod export;
pub mod metrics;
pub mod models;
pub mod scoring;
pub mod timerange;
pub mod trends;
pub mod vocab;

/// Error type for API and export operations. Aggregation itself is total
/// and never returns one of these.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Serialized as the display string so frontends get a readable message
impl serde::Serialize for AnalyticsError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
