//! News agent lifecycle
//!
//! `new` → `initialize` (tools built from config) → `invoke`* → `shutdown`.

use crate::agent::manifest::AgentManifest;
use crate::config::{AgentConfig, ConfigError};
use crate::news::NewsApiConfig;
use crate::tool_span;
use crate::tools::{Tool, ToolError, ToolSystem};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    Created,
    Ready,
    Stopped,
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),
    #[error("Agent is not ready (state: {0:?})")]
    NotReady(AgentState),
}

/// A configured news agent and its tools
pub struct NewsAgent {
    config: AgentConfig,
    tools: ToolSystem,
    state: AgentState,
}

impl NewsAgent {
    /// Agent whose news credential is read from the environment
    pub fn new(config: AgentConfig) -> Self {
        let news_config = config.news_api_config();
        Self::with_news_api(config, news_config)
    }

    /// Agent with an explicit news client configuration
    pub fn with_news_api(config: AgentConfig, news_config: NewsApiConfig) -> Self {
        if news_config.api_key.is_none() {
            warn!(
                api_key_env = %news_config.api_key_env,
                "News API key not set; headline tools will report a configuration error"
            );
        }

        Self {
            config,
            tools: ToolSystem::with_news_api(news_config),
            state: AgentState::Created,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Build and initialize every tool in `[tools]`
    pub async fn initialize(&mut self) -> Result<(), AgentError> {
        if self.state != AgentState::Created {
            return Err(AgentError::NotReady(self.state));
        }

        info!(agent_id = %self.config.agent.id, "Initializing agent");
        self.config.validate()?;
        self.tools.initialize(&self.config.tools).await?;
        self.state = AgentState::Ready;

        info!(
            agent_id = %self.config.agent.id,
            tools = ?self.tools.list_tools(),
            "Agent ready"
        );
        Ok(())
    }

    /// Register an extra tool alongside the configured ones
    pub async fn register_tool(
        &mut self,
        tool: Box<dyn Tool>,
        config: Option<&Value>,
    ) -> Result<(), AgentError> {
        self.tools.register(tool, config).await?;
        Ok(())
    }

    /// Declarations the host passes to the model
    pub fn manifest(&self) -> AgentManifest {
        AgentManifest::new(&self.config.agent, self.tools.describe_all())
    }

    /// Execute one tool call on behalf of the host
    pub async fn invoke(&self, tool_name: &str, arguments: &Value) -> Result<Value, AgentError> {
        if self.state != AgentState::Ready {
            return Err(AgentError::NotReady(self.state));
        }

        let call_id = Uuid::new_v4();
        let span = tool_span!(tool = %tool_name, call_id = %call_id);

        async {
            debug!(arguments = %arguments, "Invoking tool");

            match self.tools.execute_tool(tool_name, arguments).await {
                Ok(result) => {
                    let status = result
                        .get("status")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown");
                    info!(status, "Tool call finished");
                    Ok(result)
                }
                Err(e) => {
                    warn!(error = %e, "Tool call rejected");
                    Err(AgentError::Tool(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn shutdown(&mut self) -> Result<(), AgentError> {
        if self.state == AgentState::Stopped {
            return Ok(());
        }

        info!(agent_id = %self.config.agent.id, "Shutting down agent");
        self.tools.shutdown().await?;
        self.state = AgentState::Stopped;
        Ok(())
    }
}
