//! Tool results and their rendering at the host boundary
//!
//! The agent host only sees plain JSON objects. A lookup either succeeded
//! and carries a payload, or failed and carries a kind and a message; both
//! are tagged with `status` and echo the query they answer.

use crate::error::{NewsError, NewsResult};
use crate::news::article::Article;
use crate::news::city::CityNews;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// What a result is about, echoed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    City(String),
    Country(String),
    Category(String),
}

impl Scope {
    pub fn key(&self) -> &'static str {
        match self {
            Scope::City(_) => "city",
            Scope::Country(_) => "country",
            Scope::Category(_) => "category",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Scope::City(value) | Scope::Country(value) | Scope::Category(value) => value,
        }
    }
}

/// A successful headlines lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headlines {
    pub count: usize,
    pub articles: Vec<Article>,
}

impl Headlines {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            count: articles.len(),
            articles,
        }
    }
}

/// Success payloads know how to lay themselves out as result fields
pub trait Payload {
    fn into_fields(self) -> Map<String, Value>;
}

impl Payload for Headlines {
    fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("count".to_string(), json!(self.count));
        fields.insert("articles".to_string(), json!(self.articles));
        fields
    }
}

impl Payload for CityNews {
    fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("headline".to_string(), Value::String(self.headline));
        fields.insert("content".to_string(), Value::String(self.content));
        fields
    }
}

/// Outcome of one tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult<T> {
    Success(T),
    Failure(NewsError),
}

impl<T> From<NewsResult<T>> for ToolResult<T> {
    fn from(result: NewsResult<T>) -> Self {
        match result {
            Ok(payload) => ToolResult::Success(payload),
            Err(error) => ToolResult::Failure(error),
        }
    }
}

impl<T: Payload> ToolResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolResult::Success(_))
    }

    /// Render as the JSON object handed to the agent host
    pub fn render(self, scope: &Scope) -> Value {
        let mut fields = Map::new();

        match self {
            ToolResult::Success(payload) => {
                fields.insert("status".to_string(), json!("success"));
                fields.insert(scope.key().to_string(), json!(scope.value()));
                fields.extend(payload.into_fields());
            }
            ToolResult::Failure(error) => {
                fields.insert("status".to_string(), json!("error"));
                fields.insert(scope.key().to_string(), json!(scope.value()));
                fields.insert("kind".to_string(), json!(error.kind()));
                fields.insert("message".to_string(), json!(error.public_message()));
            }
        }

        Value::Object(fields)
    }
}
