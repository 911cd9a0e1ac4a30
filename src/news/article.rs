//! Article types: the news API wire format and the normalized summary
//!
//! Upstream articles routinely carry `null` for description and title, so
//! every wire field is optional and normalization substitutes placeholders.

use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "no title";
pub const UNKNOWN_SOURCE: &str = "unknown source";
pub const NO_URL: &str = "#";

/// Body of a `top-headlines` response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Option<Vec<RawArticle>>,
    /// Set alongside `status: "error"`
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by the news API with `status: "error"`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// `code: message`, or whichever of the two is present
    pub fn detail(self) -> Option<String> {
        match (self.code, self.message) {
            (Some(code), Some(message)) => Some(format!("{code}: {message}")),
            (None, Some(message)) => Some(message),
            (Some(code), None) => Some(code),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Normalized article summary handed to the agent host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title.unwrap_or_else(|| NO_TITLE.to_string()),
            source: raw
                .source
                .and_then(|source| source.name)
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            url: raw.url.unwrap_or_else(|| NO_URL.to_string()),
            description: raw.description.unwrap_or_default(),
            published_at: raw.published_at.unwrap_or_default(),
        }
    }
}

impl HeadlinesResponse {
    /// Normalized articles in upstream order
    pub fn into_articles(self) -> Vec<Article> {
        self.articles
            .unwrap_or_default()
            .into_iter()
            .map(Article::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_article_is_copied_verbatim() {
        let raw: RawArticle = serde_json::from_value(json!({
            "source": {"id": "bbc-news", "name": "BBC News"},
            "author": "Someone",
            "title": "Headline",
            "description": "Summary",
            "url": "https://example.com/a",
            "urlToImage": null,
            "publishedAt": "2025-06-01T08:00:00Z",
            "content": "Body"
        }))
        .unwrap();

        let article = Article::from(raw);

        assert_eq!(article.title, "Headline");
        assert_eq!(article.source, "BBC News");
        assert_eq!(article.url, "https://example.com/a");
        assert_eq!(article.description, "Summary");
        assert_eq!(article.published_at, "2025-06-01T08:00:00Z");
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let raw: RawArticle = serde_json::from_value(json!({})).unwrap();
        let article = Article::from(raw);

        assert_eq!(article.title, NO_TITLE);
        assert_eq!(article.source, UNKNOWN_SOURCE);
        assert_eq!(article.url, NO_URL);
        assert_eq!(article.description, "");
        assert_eq!(article.published_at, "");
    }

    #[test]
    fn test_null_fields_get_placeholders() {
        let raw: RawArticle = serde_json::from_value(json!({
            "title": null,
            "source": {"id": null, "name": null},
            "url": null,
            "description": null,
            "publishedAt": null
        }))
        .unwrap();
        let article = Article::from(raw);

        assert_eq!(article.title, NO_TITLE);
        assert_eq!(article.source, UNKNOWN_SOURCE);
        assert_eq!(article.url, NO_URL);
    }

    #[test]
    fn test_article_serializes_published_at_in_camel_case() {
        let article = Article::from(RawArticle::default());
        let value = serde_json::to_value(&article).unwrap();

        assert!(value.get("publishedAt").is_some());
        assert!(value.get("published_at").is_none());
    }

    #[test]
    fn test_missing_articles_array_is_empty() {
        let response: HeadlinesResponse =
            serde_json::from_value(json!({"status": "ok", "totalResults": 0})).unwrap();

        assert_eq!(response.total_results, Some(0));
        assert!(response.into_articles().is_empty());
    }
}
