//! `get_tech_news`: latest English technology headlines

use crate::news::client::{NewsApiClient, TECH_CATEGORY, TECH_PAGE_SIZE};
use crate::news::outcome::{Scope, ToolResult};
use crate::tools::builtin::{page_size_from_config, TECH_NEWS_TOOL};
use crate::tools::{Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TechNewsTool {
    client: Arc<NewsApiClient>,
    page_size: u32,
}

impl TechNewsTool {
    pub fn new(client: Arc<NewsApiClient>) -> Self {
        Self {
            client,
            page_size: TECH_PAGE_SIZE,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[async_trait]
impl Tool for TechNewsTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: TECH_NEWS_TOOL.to_string(),
            description: "Get the latest technology news headlines. Returns status, category, count and articles (title, source, url, description, publishedAt), or status, kind and message on error.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        }
    }

    async fn initialize(&mut self, config: Option<&Value>) -> Result<(), ToolError> {
        self.page_size = page_size_from_config(config, TECH_PAGE_SIZE)?;
        Ok(())
    }

    async fn execute(&self, _parameters: &Value) -> Result<Value, ToolError> {
        let result = self.client.tech_headlines_with_size(self.page_size).await;

        Ok(ToolResult::from(result).render(&Scope::Category(TECH_CATEGORY.to_string())))
    }
}
