//! Server configuration.

use std::net::SocketAddr;

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Chat-completions endpoint of the text-generation provider.
    pub provider_api_url: String,
    /// Provider API key. May be empty for local OpenAI-compatible endpoints.
    pub provider_api_key: String,
    /// Model used for assistant chat replies.
    pub chat_model: String,
    /// Model used for feasibility analyses.
    pub feasibility_model: String,
}

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_FEASIBILITY_MODEL: &str = "gpt-4o";

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("default addr is valid"),
            provider_api_url: DEFAULT_API_URL.to_string(),
            provider_api_key: String::new(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            feasibility_model: DEFAULT_FEASIBILITY_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults:
    ///
    /// - `LEASIFAI_ADDR` - bind address (`127.0.0.1:8080`)
    /// - `LEASIFAI_API_URL` - provider endpoint (api.openai.com)
    /// - `OPENAI_API_KEY` - provider API key (empty)
    /// - `LEASIFAI_CHAT_MODEL` - chat model (`gpt-4o-mini`)
    /// - `LEASIFAI_FEASIBILITY_MODEL` - feasibility model (`gpt-4o`)
    pub fn load() -> anyhow::Result<Self> {
        let bind_addr = match std::env::var("LEASIFAI_ADDR") {
            Ok(addr) => addr
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid LEASIFAI_ADDR {:?}: {}", addr, e))?,
            Err(_) => DEFAULT_BIND_ADDR.parse().expect("default addr is valid"),
        };

        Ok(Self {
            bind_addr,
            provider_api_url: std::env::var("LEASIFAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            provider_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            chat_model: std::env::var("LEASIFAI_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            feasibility_model: std::env::var("LEASIFAI_FEASIBILITY_MODEL")
                .unwrap_or_else(|_| DEFAULT_FEASIBILITY_MODEL.to_string()),
        })
    }

    /// Whether an API key has been configured for the provider.
    pub fn has_provider_key(&self) -> bool {
        !self.provider_api_key.is_empty()
    }
}
