//! Ranking and period-over-period trend aggregations
//!
//! - Trending topics with share, mean sentiment and an optional direction
//!   relative to a caller-supplied prior period
//! - Agent performance ranking with pluggable criteria and display sorting

pub mod agents;
pub mod topics;

pub use agents::{rank_agents, sort_rows, AgentPerformance, RankingCriterion, SortDirection, SortField};
pub use topics::{trending_topics, SentimentImpact, TopicDirection, TopicTrend};
