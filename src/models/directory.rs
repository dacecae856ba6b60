//! Tenant and agent profile types
//!
//! Profiles arrive from separate API endpoints and are joined to
//! conversations by id at presentation time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::conversation::Conversation;

/// Big-Five personality score vector, values nominally 0..1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigFivePersonality {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

/// A resident profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Property/unit label, e.g. "Sunset Towers Apt 4B".
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub big_five_personality: Option<BigFivePersonality>,
}

/// A support agent profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Id-keyed lookup over tenants and agents for joining onto conversations.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    tenants: HashMap<String, Tenant>,
    agents: HashMap<String, Agent>,
}

impl Directory {
    pub fn new(tenants: Vec<Tenant>, agents: Vec<Agent>) -> Self {
        Self {
            tenants: tenants.into_iter().map(|t| (t.id.clone(), t)).collect(),
            agents: agents.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }

    pub fn tenant(&self, id: &str) -> Option<&Tenant> {
        self.tenants.get(id)
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Tenant profile for a conversation, if known.
    pub fn tenant_for(&self, conversation: &Conversation) -> Option<&Tenant> {
        self.tenant(&conversation.tenant_id)
    }

    /// Agent profiles referenced by a conversation, skipping unknown ids.
    pub fn agents_for(&self, conversation: &Conversation) -> Vec<&Agent> {
        conversation
            .agent_ids
            .iter()
            .filter_map(|id| self.agent(id))
            .collect()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}
