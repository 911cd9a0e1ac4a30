//! `get_country_news`: latest headlines for a country

use crate::news::client::{NewsApiClient, COUNTRY_PAGE_SIZE};
use crate::news::countries::supported_countries;
use crate::news::outcome::{Scope, ToolResult};
use crate::tools::builtin::{page_size_from_config, COUNTRY_NEWS_TOOL};
use crate::tools::{Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct CountryNewsTool {
    client: Arc<NewsApiClient>,
    page_size: u32,
}

impl CountryNewsTool {
    pub fn new(client: Arc<NewsApiClient>) -> Self {
        Self {
            client,
            page_size: COUNTRY_PAGE_SIZE,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[async_trait]
impl Tool for CountryNewsTool {
    fn describe(&self) -> ToolDescription {
        let supported: Vec<&str> = supported_countries().collect();

        ToolDescription {
            name: COUNTRY_NEWS_TOOL.to_string(),
            description: format!(
                "Look up the latest news headlines for a country. Supported countries: {}. Returns status, country, count and articles (title, source, url, description, publishedAt), or status, kind and message on error.",
                supported.join(", ")
            ),
            parameters: json!({
                "type": "object",
                "properties": {
                    "country_name": {
                        "type": "string",
                        "description": "Country name, for example 台灣, 美國 or 日本",
                        "examples": supported
                    }
                },
                "required": ["country_name"],
                "additionalProperties": false
            }),
        }
    }

    async fn initialize(&mut self, config: Option<&Value>) -> Result<(), ToolError> {
        self.page_size = page_size_from_config(config, COUNTRY_PAGE_SIZE)?;
        Ok(())
    }

    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        let country_name = parameters["country_name"].as_str().ok_or_else(|| {
            ToolError::ExecutionError("country_name parameter is required".to_string())
        })?;

        let result = self
            .client
            .country_headlines_with_size(country_name, self.page_size)
            .await;

        Ok(ToolResult::from(result).render(&Scope::Country(country_name.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::client::NewsApiConfig;

    fn tool_without_key() -> CountryNewsTool {
        CountryNewsTool::new(Arc::new(
            NewsApiClient::new(NewsApiConfig::default()).unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_initialize_reads_page_size() {
        let mut tool = tool_without_key();
        assert_eq!(tool.page_size(), 10);

        tool.initialize(Some(&json!({"page_size": 3}))).await.unwrap();
        assert_eq!(tool.page_size(), 3);
    }

    #[tokio::test]
    async fn test_missing_key_is_a_rendered_error() {
        let tool = tool_without_key();
        let result = tool
            .execute(&json!({"country_name": "日本"}))
            .await
            .unwrap();

        assert_eq!(result["status"], "error");
        assert_eq!(result["country"], "日本");
        assert_eq!(result["kind"], "config_error");
        assert!(result["message"].as_str().unwrap().contains("NEWS_API_KEY"));
    }

    #[test]
    fn test_description_lists_supported_countries() {
        let description = tool_without_key().describe();

        assert_eq!(description.name, "get_country_news");
        assert!(description.description.contains("台灣"));
        assert!(description.description.contains("澳洲"));
        assert_eq!(
            description.parameters["properties"]["country_name"]["examples"]
                .as_array()
                .unwrap()
                .len(),
            10
        );
    }
}
