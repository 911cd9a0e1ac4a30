//! `get_news`: static news for one city

use crate::news::city::lookup_city_news;
use crate::news::outcome::{Scope, ToolResult};
use crate::tools::builtin::CITY_NEWS_TOOL;
use crate::tools::{Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::{json, Value};

#[derive(Debug, Default)]
pub struct CityNewsTool;

impl CityNewsTool {
    pub fn new() -> Self {
        Self
    }

    /// Look up and render (pure function)
    fn lookup(city: &str) -> Value {
        ToolResult::from(lookup_city_news(city)).render(&Scope::City(city.to_string()))
    }
}

#[async_trait]
impl Tool for CityNewsTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: CITY_NEWS_TOOL.to_string(),
            description: "Retrieves the news of a particular city. Returns a headline and content, or an error message when no news is available for the city.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "city": {
                        "type": "string",
                        "description": "The name of the city for which to retrieve the news"
                    }
                },
                "required": ["city"],
                "additionalProperties": false
            }),
        }
    }

    async fn initialize(&mut self, _config: Option<&Value>) -> Result<(), ToolError> {
        Ok(())
    }

    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        let city = parameters["city"]
            .as_str()
            .ok_or_else(|| ToolError::ExecutionError("city parameter is required".to_string()))?;

        Ok(Self::lookup(city))
    }
}
