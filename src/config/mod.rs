//! Environment-backed configuration.

use crate::error::{AgentError, Result};

/// Default model when `CCAGENT_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4.1";

/// Startup configuration for the agent and the Catalyst Center client.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Catalyst Center base URL, e.g. `https://dnac.example.com`.
    pub dnac_base_url: String,
    pub dnac_username: String,
    pub dnac_password: String,
    /// Explicit opt-in to skip TLS certificate validation on DNAC requests.
    pub accept_invalid_certs: bool,
    /// Model provider credential. Required at startup.
    pub openai_api_key: String,
    /// Override for the model provider endpoint (tests, proxies).
    pub openai_base_url: Option<String>,
    /// Model identifier passed to the provider.
    pub model: String,
}

impl AgentConfig {
    /// Load configuration from the environment (`.env` is read if present).
    ///
    /// A missing model-provider credential or missing DNAC settings is a
    /// fatal `Configuration` error: the process should not start without
    /// them.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            dnac_base_url: require("DNAC_BASE_URL")?,
            dnac_username: require("DNAC_USERNAME")?,
            dnac_password: require("DNAC_PASSWORD")?,
            accept_invalid_certs: flag("DNAC_ACCEPT_INVALID_CERTS"),
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            model: std::env::var("CCAGENT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

fn require(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AgentError::Configuration(format!(
            "missing required environment variable {key}"
        ))),
    }
}

fn flag(key: &str) -> bool {
    matches!(
        std::env::var(key).as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}
