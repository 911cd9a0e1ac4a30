//! Builtin news tools
//!
//! Each tool wraps one news lookup and renders its outcome for the host.
//! Lookup failures are part of the rendered result, never a [`ToolError`].
//!
//! [`ToolError`]: crate::tools::ToolError

use crate::news::client::MAX_PAGE_SIZE;
use crate::tools::ToolError;
use serde_json::Value;

pub mod city_news;
pub mod country_news;
pub mod tech_news;

pub use city_news::CityNewsTool;
pub use country_news::CountryNewsTool;
pub use tech_news::TechNewsTool;

pub const CITY_NEWS_TOOL: &str = "get_news";
pub const COUNTRY_NEWS_TOOL: &str = "get_country_news";
pub const TECH_NEWS_TOOL: &str = "get_tech_news";

/// Read an optional `page_size` override from a tool's config (pure function)
fn page_size_from_config(config: Option<&Value>, default: u32) -> Result<u32, ToolError> {
    let Some(raw) = config.and_then(|config| config.get("page_size")) else {
        return Ok(default);
    };

    raw.as_u64()
        .filter(|size| (1..=u64::from(MAX_PAGE_SIZE)).contains(size))
        .map(|size| size as u32)
        .ok_or_else(|| {
            ToolError::InitializationError(format!(
                "page_size must be an integer between 1 and {MAX_PAGE_SIZE}, got {raw}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_size_defaults_without_config() {
        assert_eq!(page_size_from_config(None, 10).unwrap(), 10);
        assert_eq!(page_size_from_config(Some(&json!({})), 5).unwrap(), 5);
    }

    #[test]
    fn test_page_size_override() {
        assert_eq!(
            page_size_from_config(Some(&json!({"page_size": 20})), 10).unwrap(),
            20
        );
    }

    #[test]
    fn test_page_size_out_of_range() {
        for bad in [json!(0), json!(101), json!("ten"), json!(-3)] {
            let result = page_size_from_config(Some(&json!({ "page_size": bad })), 10);
            assert!(matches!(result, Err(ToolError::InitializationError(_))));
        }
    }
}
