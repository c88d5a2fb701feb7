use crate::{osjson_suggestions, SourceError, SuggestSource, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

#[derive(Clone)]
pub struct BingConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.bing.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone)]
pub struct BingSuggest {
    client: Client,
    cfg: Arc<BingConfig>,
}

impl BingSuggest {
    pub fn new(cfg: BingConfig) -> Self {
        Self {
            client: Client::new(),
            cfg: Arc::new(cfg),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<String>, SourceError> {
        let resp = self
            .client
            .get(format!("{}/osjson.aspx", self.cfg.base_url))
            .query(&[("query", query)])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(self.cfg.timeout)
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::RequestFailed(format!(
                "status {}",
                resp.status()
            )));
        }

        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SourceError::MalformedPayload(e.to_string()))?;

        Ok(osjson_suggestions(&payload))
    }
}

#[async_trait::async_trait]
impl SuggestSource for BingSuggest {
    fn name(&self) -> &'static str {
        "bing"
    }

    async fn suggestions(&self, query: &str) -> Vec<String> {
        match self.fetch(query).await {
            Ok(items) => items,
            Err(e) => {
                warn!(source = "bing", query, error = %e, "suggest fetch failed");
                Vec::new()
            }
        }
    }
}
