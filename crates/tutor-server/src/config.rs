//! Runtime configuration, built once at startup and handed to the server.

use std::fmt;

use tutor_llm::providers::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_WORKER_COUNT: usize = 4;
pub const DEFAULT_PROBE_MODEL: &str = "gpt-3.5-turbo";

/// Completion provider settings.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub probe_model: String,
}

impl LlmConfig {
    /// The configured key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            probe_model: DEFAULT_PROBE_MODEL.to_string(),
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key().map(mask_api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("probe_model", &self.probe_model)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub startup_probe: bool,
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKER_COUNT,
            startup_probe: true,
            llm: LlmConfig::default(),
        }
    }
}

/// Keep the first three characters of a key for log output.
pub fn mask_api_key(key: &str) -> String {
    let prefix: String = key.chars().take(3).collect();
    format!("{prefix}***")
}
