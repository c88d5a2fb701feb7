use crate::{osjson_suggestions, SourceError, SuggestSource, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

#[derive(Clone)]
pub struct GoogleConfig {
    pub base_url: String,
    /// Interface language passed as `hl`.
    pub hl: String,
    /// Geolocation passed as `gl`.
    pub gl: String,
    pub timeout: Duration,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://suggestqueries.google.com".to_string(),
            hl: "en".to_string(),
            gl: "IN".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone)]
pub struct GoogleSuggest {
    client: Client,
    cfg: Arc<GoogleConfig>,
}

impl GoogleSuggest {
    pub fn new(cfg: GoogleConfig) -> Self {
        Self {
            client: Client::new(),
            cfg: Arc::new(cfg),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<String>, SourceError> {
        let resp = self
            .client
            .get(format!("{}/complete/search", self.cfg.base_url))
            .query(&[
                ("client", "firefox"),
                ("q", query),
                ("hl", self.cfg.hl.as_str()),
                ("gl", self.cfg.gl.as_str()),
            ])
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
impl SuggestSource for GoogleSuggest {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn suggestions(&self, query: &str) -> Vec<String> {
        match self.fetch(query).await {
            Ok(items) => items,
            Err(e) => {
                warn!(source = "google", query, error = %e, "suggest fetch failed");
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

    fn source_at(base_url: String) -> GoogleSuggest {
        GoogleSuggest::new(GoogleConfig {
            base_url,
            ..GoogleConfig::default()
        })
    }

    #[tokio::test]
    async fn parses_firefox_client_payload() {
        let router = Router::new().route(
            "/complete/search",
            get(|| async {
                axum::Json(serde_json::json!(["seo", ["seo tools", "seo audit"]]))
            }),
        );
        let source = source_at(serve(router).await);

        assert_eq!(
            source.suggestions("seo").await,
            vec!["seo tools", "seo audit"]
        );
    }

    #[tokio::test]
    async fn non_2xx_fails_open_to_empty() {
        let router = Router::new().route(
            "/complete/search",
            get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let source = source_at(serve(router).await);

        assert!(source.suggestions("seo").await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_upstream_fails_open_to_empty() {
        // Port 1 is never listening.
        let source = source_at("http://127.0.0.1:1".to_string());
        assert!(source.suggestions("seo").await.is_empty());
    }

    #[tokio::test]
    async fn non_json_body_fails_open_to_empty() {
        let router = Router::new().route("/complete/search", get(|| async { "<html>" }));
        let source = source_at(serve(router).await);

        assert!(source.suggestions("seo").await.is_empty());
    }
}
