//! HTTP client for the support backend
//!
//! Thin typed wrapper over the three read endpoints the dashboard uses.
//! Deserialization happens here; everything downstream works on the typed
//! models.

use crate::models::{Agent, Conversation, Tenant};
use crate::AnalyticsError;

/// Client for the support analytics API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL, e.g. "http://localhost:8000".
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, AnalyticsError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn fetch_conversations(&self) -> Result<Vec<Conversation>, AnalyticsError> {
        self.get_json("conversations").await
    }

    pub async fn fetch_tenants(&self) -> Result<Vec<Tenant>, AnalyticsError> {
        self.get_json("tenants").await
    }

    pub async fn fetch_agents(&self) -> Result<Vec<Agent>, AnalyticsError> {
        self.get_json("agents").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("conversations"), "http://localhost:8000/conversations");
        assert_eq!(client.url("/agents"), "http://localhost:8000/agents");

        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.url("tenants"), "http://localhost:8000/tenants");
    }
}
