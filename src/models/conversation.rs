//! Conversation and message data types
//!
//! Shapes mirror the dashboard API JSON (camelCase keys). Timestamps are
//! parsed into `NaiveDateTime` at the deserialization boundary; the
//! aggregation layer never touches raw strings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle status of a support conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConversationStatus {
    #[serde(rename = "In Progress", alias = "in_progress")]
    InProgress,
    #[serde(rename = "Solved", alias = "solved")]
    Solved,
    /// Anything the backend sends that we don't recognize. Counted in totals
    /// but in neither the in-progress nor the solved bucket.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    Tenant,
    Agent,
}

/// One turn in a conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    #[serde(rename = "senderType")]
    pub sender_role: SenderRole,
    #[serde(default)]
    pub content: String,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    /// Signed sentiment score, -3..=3.
    #[serde(default)]
    pub sentiment: i32,
    #[serde(default)]
    pub emotions: Vec<String>,
    /// Emotion label -> intensity (nominally 0..1, not required to sum to 1).
    #[serde(default)]
    pub emotion_scores: HashMap<String, f64>,
}

/// One support interaction between a tenant and one or more agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub agent_ids: Vec<String>,
    #[serde(default)]
    pub status: ConversationStatus,
    /// Conversation-level sentiment label from the 7-level vocabulary.
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(with = "timestamp")]
    pub started_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub last_updated: NaiveDateTime,
}

impl Conversation {
    /// Messages authored by the tenant, in thread order.
    pub fn tenant_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(|m| m.sender_role == SenderRole::Tenant)
    }
}

/// Serde adapter for API timestamps. The backend emits ISO-8601 with or
/// without a trailing offset; both are accepted and reduced to local
/// wall-clock time.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_local());
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(s, FORMAT))
            .ok()
    }

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", s)))
    }
}
