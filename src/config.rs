//! Agent configuration loaded from TOML
//!
//! An agent file names the agent, describes it for the host, configures the
//! news API connection and lists the tools to register. The API credential
//! itself never lives in the file; `[news].api_key_env` names the
//! environment variable it is read from at startup.

use crate::news::client::{
    NewsApiConfig, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Main agent configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentConfig {
    pub agent: AgentSection,
    #[serde(default)]
    pub news: NewsSection,
    #[serde(default)]
    pub tools: HashMap<String, ToolConfig>,
}

/// Agent section: what the host shows the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentSection {
    /// Agent identifier (must match [a-zA-Z0-9._-]+)
    pub id: String,
    /// Model the host should drive this agent with
    pub model: String,
    /// Description of what this agent does
    pub description: String,
    /// System instruction for the model
    #[serde(default)]
    pub instruction: String,
}

/// News API section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NewsSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ToolConfig {
    /// Simple form: tool_name = "identifier"
    Simple(String),
    /// Complex form: tool_name = { impl = "identifier", config = { ... } }
    Complex {
        #[serde(rename = "impl")]
        implementation: String,
        #[serde(default)]
        config: HashMap<String, serde_json::Value>,
    },
}

impl ToolConfig {
    pub fn implementation(&self) -> &str {
        match self {
            ToolConfig::Simple(implementation) => implementation,
            ToolConfig::Complex { implementation, .. } => implementation,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid agent ID format: {0}")]
    InvalidAgentId(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NewsSection {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::InvalidConfig(format!("news.base_url '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidConfig(format!(
                "news.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "news.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "news.api_key_env must name an environment variable".to_string(),
            ));
        }

        Ok(())
    }

    /// Client configuration, with the credential taken from `lookup`.
    /// Unset and empty values both count as missing.
    pub fn resolve_with<F>(&self, lookup: F) -> NewsApiConfig
    where
        F: FnOnce(&str) -> Option<String>,
    {
        NewsApiConfig {
            api_key: lookup(&self.api_key_env).filter(|key| !key.is_empty()),
            api_key_env: self.api_key_env.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl AgentConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_agent_id(&self.agent.id)?;
        self.news.validate()
    }

    /// News client configuration with the credential read from the environment
    pub fn news_api_config(&self) -> NewsApiConfig {
        self.news.resolve_with(|name| std::env::var(name).ok())
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[agent]
id = "test-agent"
model = "test-model"
description = "A test agent"
instruction = "Answer news questions."

[tools]
get_news = "builtin"
"#;
        toml::from_str(toml_content).expect("Test config should parse")
    }
}

/// Validate agent ID format
fn validate_agent_id(agent_id: &str) -> Result<(), ConfigError> {
    let valid_chars = agent_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-');

    if agent_id.is_empty() || !valid_chars {
        return Err(ConfigError::InvalidAgentId(format!(
            "Agent ID '{agent_id}' must match pattern [a-zA-Z0-9._-]+"
        )));
    }

    Ok(())
}
