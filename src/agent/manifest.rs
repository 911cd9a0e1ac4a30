//! Agent manifest handed to the host

use crate::config::AgentSection;
use crate::tools::ToolDescription;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One callable tool as the model sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl From<ToolDescription> for FunctionDeclaration {
    fn from(description: ToolDescription) -> Self {
        Self {
            name: description.name,
            description: description.description,
            parameters: description.parameters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentManifest {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instruction: String,
    pub tools: Vec<FunctionDeclaration>,
}

impl AgentManifest {
    /// Build from the agent section and the registered tools (pure function)
    pub fn new(agent: &AgentSection, tools: Vec<ToolDescription>) -> Self {
        Self {
            name: agent.id.clone(),
            model: agent.model.clone(),
            description: agent.description.clone(),
            instruction: agent.instruction.clone(),
            tools: tools.into_iter().map(FunctionDeclaration::from).collect(),
        }
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }
}
