use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Source used when a request names no engine.
    #[serde(default = "default_source")]
    pub default: String,
    /// Per-request timeout applied inside every adapter.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub google: GoogleParams,
    #[serde(default)]
    pub bing: EndpointOverride,
    #[serde(default)]
    pub yahoo: EndpointOverride,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            default: default_source(),
            timeout_secs: default_timeout_secs(),
            google: GoogleParams::default(),
            bing: EndpointOverride::default(),
            yahoo: EndpointOverride::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleParams {
    #[serde(default = "default_hl")]
    pub hl: String,
    #[serde(default = "default_gl")]
    pub gl: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for GoogleParams {
    fn default() -> Self {
        Self {
            hl: default_hl(),
            gl: default_gl(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointOverride {
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_source() -> String {
    "google".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_hl() -> String {
    "en".to_string()
}

fn default_gl() -> String {
    "IN".to_string()
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
