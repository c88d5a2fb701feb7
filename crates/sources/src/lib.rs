//! Source abstractions for upstream autosuggest APIs.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub mod bing;
pub mod google;
pub mod yahoo;

/// Sent on every suggest request; some upstreams reject UA-less clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("unknown source: {0}")]
    UnknownSource(String),
}

/// An upstream autosuggest source.
///
/// `suggestions` is fail-open: any transport or parse failure is logged
/// inside the adapter and surfaces as an empty list, never as an error.
#[async_trait::async_trait]
pub trait SuggestSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn suggestions(&self, query: &str) -> Vec<String>;
}

#[derive(Default, Clone)]
pub struct SourceRegistry {
    sources: HashMap<String, Arc<dyn SuggestSource>>,
    pub default_source: Option<String>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, name: &str, source: Arc<dyn SuggestSource>) -> Self {
        self.sources.insert(name.to_string(), source);
        self
    }

    pub fn set_default(mut self, name: &str) -> Self {
        self.default_source = Some(name.to_string());
        self
    }

    /// Resolve a source by explicit name, falling back to the default.
    pub fn get(&self, name: Option<&str>) -> Result<Arc<dyn SuggestSource>, SourceError> {
        let key = name
            .map(str::to_string)
            .or_else(|| self.default_source.clone())
            .ok_or_else(|| SourceError::UnknownSource("no source configured".into()))?;
        self.sources
            .get(&key)
            .cloned()
            .ok_or(SourceError::UnknownSource(key))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Extract the suggestion list from an OpenSearch-suggestions payload:
/// `["query", ["a", "b", ...], ...]`. Both Google (`client=firefox`) and
/// Bing (`osjson.aspx`) answer in this shape. A missing or non-array second
/// element yields an empty list rather than an error.
pub(crate) fn osjson_suggestions(payload: &serde_json::Value) -> Vec<String> {
    payload
        .get(1)
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Fixed;

    #[async_trait::async_trait]
    impl SuggestSource for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn suggestions(&self, _query: &str) -> Vec<String> {
            vec!["a".into()]
        }
    }

    #[test]
    fn registry_resolves_explicit_name_over_default() {
        let reg = SourceRegistry::new()
            .with_source("fixed", Arc::new(Fixed))
            .with_source("other", Arc::new(Fixed))
            .set_default("other");
        assert_eq!(reg.get(Some("fixed")).unwrap().name(), "fixed");
    }

    #[test]
    fn registry_falls_back_to_default() {
        let reg = SourceRegistry::new()
            .with_source("fixed", Arc::new(Fixed))
            .set_default("fixed");
        assert!(reg.get(None).is_ok());
    }

    #[test]
    fn registry_rejects_unknown_source() {
        let reg = SourceRegistry::new().with_source("fixed", Arc::new(Fixed));
        assert!(matches!(
            reg.get(Some("nope")),
            Err(SourceError::UnknownSource(_))
        ));
        assert!(matches!(reg.get(None), Err(SourceError::UnknownSource(_))));
    }

    #[test]
    fn osjson_takes_second_element_in_order() {
        let payload = json!(["rust", ["rust lang", "rust game", "rust belt"]]);
        assert_eq!(
            osjson_suggestions(&payload),
            vec!["rust lang", "rust game", "rust belt"]
        );
    }

    #[test]
    fn osjson_missing_or_odd_second_element_is_empty() {
        assert!(osjson_suggestions(&json!(["rust"])).is_empty());
        assert!(osjson_suggestions(&json!({"not": "an array"})).is_empty());
        assert!(osjson_suggestions(&json!(["rust", "not-a-list"])).is_empty());
    }

    #[test]
    fn osjson_skips_non_string_entries() {
        let payload = json!(["q", ["a", 7, null, "b"]]);
        assert_eq!(osjson_suggestions(&payload), vec!["a", "b"]);
    }
}
