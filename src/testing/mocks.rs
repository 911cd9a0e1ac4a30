//! Mock tools for exercising the tool system without news lookups

use crate::tools::{Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Echoes its `text` parameter back and counts executions
#[derive(Debug, Default, Clone)]
pub struct EchoTool {
    calls: Arc<AtomicUsize>,
    initialized: bool,
}

impl EchoTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared execution counter, readable after the tool is boxed
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Tool for EchoTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: "echo".to_string(),
            description: "Echo the given text".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "text": {"type": "string"}
                },
                "required": ["text"],
                "additionalProperties": false
            }),
        }
    }

    async fn initialize(&mut self, _config: Option<&Value>) -> Result<(), ToolError> {
        self.initialized = true;
        Ok(())
    }

    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        if !self.initialized {
            return Err(ToolError::ExecutionError("Tool not initialized".to_string()));
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "text": parameters["text"] }))
    }

    async fn shutdown(&mut self) -> Result<(), ToolError> {
        self.initialized = false;
        Ok(())
    }
}
