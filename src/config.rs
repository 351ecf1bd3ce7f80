use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::errors::AnalyzerError;

pub const RATE_LIMIT_REQUESTS: usize = 10; // requests per window
pub const RATE_LIMIT_WINDOW_SECS: u64 = 60; // window size in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MAX_BODY_BYTES: u64 = 16 * 1024;
pub const DEFAULT_ADDR: &str = "127.0.0.1:3030";

pub const PROVIDER_BASE_URL: &str = "https://api.perplexity.ai";
pub const PROVIDER_MODEL: &str = "sonar-pro";
pub const PROVIDER_TEMPERATURE: f32 = 0.7;
pub const PROVIDER_MAX_TOKENS: u32 = 2000;
pub const PROVIDER_TOP_P: f32 = 0.9;

pub const API_KEY_VAR: &str = "PERPLEXITY_API_KEY";
pub const BASE_URL_VAR: &str = "PERPLEXITY_BASE_URL";
pub const MODEL_VAR: &str = "PERPLEXITY_MODEL";
pub const ADDR_VAR: &str = "ANALYZER_ADDR";

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: PROVIDER_BASE_URL.to_string(),
            model: PROVIDER_MODEL.to_string(),
            temperature: PROVIDER_TEMPERATURE,
            max_tokens: PROVIDER_MAX_TOKENS,
            top_p: PROVIDER_TOP_P,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ProviderSettings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(base_url) = non_empty_var(BASE_URL_VAR) {
            settings.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = non_empty_var(MODEL_VAR) {
            settings.model = model;
        }
        settings
    }
}

// Env is read on every request.
#[derive(Debug, Clone)]
pub enum Credentials {
    Env(&'static str),
    Fixed(Option<String>),
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials::Env(API_KEY_VAR)
    }
}

impl Credentials {
    pub fn resolve(&self) -> Result<String, AnalyzerError> {
        let key = match self {
            Credentials::Env(var) => non_empty_var(var),
            Credentials::Fixed(key) => key.clone().filter(|k| !k.is_empty()),
        };
        key.ok_or(AnalyzerError::MissingApiKey)
    }
}

pub fn listen_addr() -> anyhow::Result<SocketAddr> {
    let raw = non_empty_var(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
    raw.parse()
        .map_err(|e| anyhow::anyhow!("invalid {} '{}': {}", ADDR_VAR, raw, e))
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
