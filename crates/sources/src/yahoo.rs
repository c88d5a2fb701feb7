use crate::{SourceError, SuggestSource, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

#[derive(Clone)]
pub struct YahooConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: "https://search.yahoo.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone)]
pub struct YahooSuggest {
    client: Client,
    cfg: Arc<YahooConfig>,
}

#[derive(Deserialize)]
struct GossipResponse {
    gossip: Gossip,
}

#[derive(Deserialize)]
struct Gossip {
    #[serde(default)]
    results: Vec<GossipResult>,
}

#[derive(Deserialize)]
struct GossipResult {
    key: String,
}

impl YahooSuggest {
    pub fn new(cfg: YahooConfig) -> Self {
        Self {
            client: Client::new(),
            cfg: Arc::new(cfg),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<String>, SourceError> {
        let resp = self
            .client
            .get(format!("{}/sugg/gossip/gossip-us-ura/", self.cfg.base_url))
            .query(&[("command", query), ("output", "json")])
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

        let parsed: GossipResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::MalformedPayload(e.to_string()))?;

        Ok(parsed.gossip.results.into_iter().map(|r| r.key).collect())
    }
}

#[async_trait::async_trait]
impl SuggestSource for YahooSuggest {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    async fn suggestions(&self, query: &str) -> Vec<String> {
        match self.fetch(query).await {
            Ok(items) => items,
            Err(e) => {
                warn!(source = "yahoo", query, error = %e, "suggest fetch failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn source_at(base_url: String) -> YahooSuggest {
        YahooSuggest::new(YahooConfig {
            base_url,
            ..YahooConfig::default()
        })
    }

    #[tokio::test]
    async fn extracts_keys_from_gossip_results() {
        let router = Router::new().route(
            "/sugg/gossip/gossip-us-ura/",
            get(|| async {
                axum::Json(serde_json::json!({
                    "gossip": {
                        "results": [
                            {"key": "seo tools"},
                            {"key": "seo checker"}
                        ]
                    }
                }))
            }),
        );
        let source = source_at(serve(router).await);

        assert_eq!(
            source.suggestions("seo").await,
            vec!["seo tools", "seo checker"]
        );
    }

    #[tokio::test]
    async fn missing_results_field_is_empty_not_an_error() {
        let router = Router::new().route(
            "/sugg/gossip/gossip-us-ura/",
            get(|| async { axum::Json(serde_json::json!({"gossip": {}})) }),
        );
        let source = source_at(serve(router).await);

        assert!(source.suggestions("seo").await.is_empty());
    }

    #[tokio::test]
    async fn missing_gossip_envelope_fails_open_to_empty() {
        let router = Router::new().route(
            "/sugg/gossip/gossip-us-ura/",
            get(|| async { axum::Json(serde_json::json!({"unexpected": true})) }),
        );
        let source = source_at(serve(router).await);

        assert!(source.suggestions("seo").await.is_empty());
    }
}
