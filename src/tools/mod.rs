//! Tool system exposed to the agent host
//!
//! A tool describes itself with a JSON schema, is initialized once from its
//! `[tools]` entry, and executes calls with schema-checked parameters.
//! Domain failures come back as rendered results; [`ToolError`] is only for
//! misuse of the registry itself.

use crate::config::ToolConfig;
use crate::news::{NewsApiClient, NewsApiConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub mod builtin;

/// Callable unit registered with the agent host
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name, description and JSON schema of the parameters
    fn describe(&self) -> ToolDescription;

    /// Receives the `config` table of the tool's `[tools]` entry.
    /// Called once before the first execution.
    async fn initialize(&mut self, config: Option<&Value>) -> Result<(), ToolError>;

    /// Parameters have already been validated against the schema from `describe()`
    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError>;

    async fn shutdown(&mut self) -> Result<(), ToolError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Registry of initialized tools
pub struct ToolSystem {
    tools: HashMap<String, Box<dyn Tool>>,
    news_config: NewsApiConfig,
    news_client: Option<Arc<NewsApiClient>>,
}

impl ToolSystem {
    pub fn new() -> Self {
        Self::with_news_api(NewsApiConfig::default())
    }

    /// Tool system whose news tools share one client built from `news_config`
    pub fn with_news_api(news_config: NewsApiConfig) -> Self {
        Self {
            tools: HashMap::new(),
            news_config,
            news_client: None,
        }
    }

    /// Initialize every tool listed in the `[tools]` table
    pub async fn initialize(
        &mut self,
        tool_configs: &HashMap<String, ToolConfig>,
    ) -> Result<(), ToolError> {
        for (tool_name, tool_config) in tool_configs {
            let mut tool = self.create_tool(tool_name, tool_config)?;

            let config = match tool_config {
                ToolConfig::Simple(_) => None,
                ToolConfig::Complex { config, .. } => Some(
                    serde_json::to_value(config)
                        .map_err(|e| ToolError::InitializationError(e.to_string()))?,
                ),
            };

            tool.initialize(config.as_ref()).await?;

            self.tools.insert(tool_name.clone(), tool);
        }

        Ok(())
    }

    /// Add an already constructed tool, initializing it with `config`
    pub async fn register(
        &mut self,
        mut tool: Box<dyn Tool>,
        config: Option<&Value>,
    ) -> Result<(), ToolError> {
        tool.initialize(config).await?;
        let name = tool.describe().name;
        self.tools.insert(name, tool);
        Ok(())
    }

    fn create_tool(
        &mut self,
        tool_name: &str,
        config: &ToolConfig,
    ) -> Result<Box<dyn Tool>, ToolError> {
        match config.implementation() {
            "builtin" => self.create_builtin_tool(tool_name),
            other => Err(ToolError::UnknownImplementation(other.to_string())),
        }
    }

    fn create_builtin_tool(&mut self, tool_name: &str) -> Result<Box<dyn Tool>, ToolError> {
        match tool_name {
            builtin::CITY_NEWS_TOOL => Ok(Box::new(builtin::CityNewsTool::new())),
            builtin::COUNTRY_NEWS_TOOL => Ok(Box::new(builtin::CountryNewsTool::new(
                self.news_client()?,
            ))),
            builtin::TECH_NEWS_TOOL => Ok(Box::new(builtin::TechNewsTool::new(
                self.news_client()?,
            ))),
            _ => Err(ToolError::UnknownTool(tool_name.to_string())),
        }
    }

    /// Shared news client, built on first use
    fn news_client(&mut self) -> Result<Arc<NewsApiClient>, ToolError> {
        if let Some(client) = &self.news_client {
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(
            NewsApiClient::new(self.news_config.clone())
                .map_err(|e| ToolError::InitializationError(e.to_string()))?,
        );
        self.news_client = Some(Arc::clone(&client));
        Ok(client)
    }

    pub fn describe_tool(&self, tool_name: &str) -> Option<ToolDescription> {
        self.tools.get(tool_name).map(|tool| tool.describe())
    }

    /// Descriptions of every registered tool, sorted by name
    pub fn describe_all(&self) -> Vec<ToolDescription> {
        let mut descriptions: Vec<_> = self.tools.values().map(|tool| tool.describe()).collect();
        descriptions.sort_by(|a, b| a.name.cmp(&b.name));
        descriptions
    }

    /// Execute a tool after validating its parameters
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        parameters: &Value,
    ) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        Self::validate_parameters(&tool.describe(), parameters)?;

        tool.execute(parameters).await
    }

    fn validate_parameters(
        description: &ToolDescription,
        parameters: &Value,
    ) -> Result<(), ToolError> {
        let validator = jsonschema::validator_for(&description.parameters)
            .map_err(|e| ToolError::SchemaError(format!("Schema compilation error: {e}")))?;

        validator.validate(parameters).map_err(|errors| {
            let error_messages: Vec<String> = errors
                .map(|e| format!("At '{}': {}", e.instance_path, e))
                .collect();
            ToolError::ValidationError(error_messages.join("; "))
        })
    }

    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    pub async fn shutdown(&mut self) -> Result<(), ToolError> {
        for tool in self.tools.values_mut() {
            tool.shutdown().await?;
        }
        Ok(())
    }
}

impl Default for ToolSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Unknown tool implementation: {0}")]
    UnknownImplementation(String),
    #[error("Tool initialization failed: {0}")]
    InitializationError(String),
    #[error("Parameter validation failed: {0}")]
    ValidationError(String),
    #[error("Schema error: {0}")]
    SchemaError(String),
    #[error("Tool execution failed: {0}")]
    ExecutionError(String),
}
