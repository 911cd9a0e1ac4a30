//! Newsdesk - news lookup tools for LLM agent hosts
//!
//! This crate provides two ready-made news agents and the tools behind them:
//! - `get_news`: static news for one city
//! - `get_country_news`: latest headlines for a country, via the news API
//! - `get_tech_news`: latest technology headlines, via the news API
//!
//! Tools never fail past their boundary for lookup problems. A missing API
//! key, an unknown country, a network failure or an empty response all come
//! back as a structured result with `status = "error"`.
//!
//! # Quick Start
//!
//! ```rust
//! use newsdesk::config::AgentConfig;
//! use newsdesk::agent::NewsAgent;
//! use newsdesk::news::NewsApiConfig;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = AgentConfig::from_toml_str(r#"
//! [agent]
//! id = "news_assistant_agent"
//! model = "gemini-2.5-flash"
//! description = "Agent to retrieve news for any particular city."
//!
//! [tools]
//! get_news = "builtin"
//! "#).unwrap();
//!
//! let mut agent = NewsAgent::with_news_api(config, NewsApiConfig::default());
//! agent.initialize().await.unwrap();
//!
//! let result = agent.invoke("get_news", &json!({"city": "Taipei"})).await.unwrap();
//! assert_eq!(result["status"], "success");
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod news;
pub mod observability;
pub mod testing;
pub mod tools;

pub use agent::{AgentError, AgentManifest, NewsAgent};
pub use config::*;
pub use error::{ErrorKind, NewsError, NewsResult};
pub use news::{Article, Headlines, NewsApiClient, NewsApiConfig, ToolResult};
pub use tools::{Tool, ToolDescription, ToolError, ToolSystem};
