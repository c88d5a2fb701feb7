use crate::config::AppConfig;
use sources::bing::{BingConfig, BingSuggest};
use sources::google::{GoogleConfig, GoogleSuggest};
use sources::yahoo::{YahooConfig, YahooSuggest};
use sources::SourceRegistry;
use std::sync::Arc;
use std::time::Duration;

/// Build the registry of suggest sources from configuration.
pub fn build_registry(config: &AppConfig) -> SourceRegistry {
    let timeout = Duration::from_secs(config.sources.timeout_secs);

    let mut google = GoogleConfig {
        hl: config.sources.google.hl.clone(),
        gl: config.sources.google.gl.clone(),
        timeout,
        ..GoogleConfig::default()
    };
    if let Some(base) = &config.sources.google.base_url {
        google.base_url = base.clone();
    }

    let mut bing = BingConfig {
        timeout,
        ..BingConfig::default()
    };
    if let Some(base) = &config.sources.bing.base_url {
        bing.base_url = base.clone();
    }

    let mut yahoo = YahooConfig {
        timeout,
        ..YahooConfig::default()
    };
    if let Some(base) = &config.sources.yahoo.base_url {
        yahoo.base_url = base.clone();
    }

    SourceRegistry::new()
        .with_source("google", Arc::new(GoogleSuggest::new(google)))
        .with_source("bing", Arc::new(BingSuggest::new(bing)))
        .with_source("yahoo", Arc::new(YahooSuggest::new(yahoo)))
        .set_default(&config.sources.default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_registers_all_three_engines() {
        let registry = build_registry(&AppConfig::default());
        assert_eq!(registry.names(), vec!["bing", "google", "yahoo"]);
        assert_eq!(registry.get(None).unwrap().name(), "google");
        assert_eq!(registry.get(Some("yahoo")).unwrap().name(), "yahoo");
        assert!(registry.get(Some("duckduckgo")).is_err());
    }
}
