//! News API client for country and technology headlines
//!
//! Both lookups hit the same `top-headlines` endpoint and share the same
//! error taxonomy. Each call is a single GET bounded by the client timeout;
//! nothing is retried.

use crate::error::{NewsError, NewsResult};
use crate::news::article::{ApiErrorBody, Article, HeadlinesResponse};
use crate::news::countries::{country_code, supported_countries_list};
use crate::news::outcome::Headlines;
use crate::request_span;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn, Instrument};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_API_KEY_ENV: &str = "NEWS_API_KEY";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const COUNTRY_PAGE_SIZE: u32 = 10;
pub const TECH_PAGE_SIZE: u32 = 5;
pub const TECH_CATEGORY: &str = "technology";
pub const TECH_LANGUAGE: &str = "en";

/// Upper bound the news API accepts for `pageSize`
pub const MAX_PAGE_SIZE: u32 = 100;

/// News API client configuration
#[derive(Clone)]
pub struct NewsApiConfig {
    /// Resolved credential; `None` when the variable is unset or empty
    pub api_key: Option<String>,
    /// Where the credential was expected, used in error messages
    pub api_key_env: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl NewsApiConfig {
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }
}

impl std::fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_key_env", &self.api_key_env)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Selector part of a `top-headlines` query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineQuery {
    Country { code: &'static str },
    Category {
        category: &'static str,
        language: &'static str,
    },
}

impl HeadlineQuery {
    pub fn technology() -> Self {
        HeadlineQuery::Category {
            category: TECH_CATEGORY,
            language: TECH_LANGUAGE,
        }
    }
}

/// Client for the `top-headlines` endpoint
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    config: NewsApiConfig,
    client: Client,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> NewsResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NewsError::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &NewsApiConfig {
        &self.config
    }

    /// Latest headlines for a country, by name
    pub async fn country_headlines(&self, country_name: &str) -> NewsResult<Headlines> {
        self.country_headlines_with_size(country_name, COUNTRY_PAGE_SIZE)
            .await
    }

    pub async fn country_headlines_with_size(
        &self,
        country_name: &str,
        page_size: u32,
    ) -> NewsResult<Headlines> {
        let api_key = self.api_key()?;

        let code = country_code(country_name).ok_or_else(|| {
            NewsError::unsupported_input(
                country_name,
                format!(
                    "Country '{country_name}' is not supported. Supported countries: {}",
                    supported_countries_list()
                ),
            )
        })?;

        let articles = self
            .fetch_top_headlines(HeadlineQuery::Country { code }, page_size, api_key)
            .await?;

        if articles.is_empty() {
            return Err(NewsError::empty_result(format!(
                "No headlines available for '{country_name}'."
            )));
        }

        Ok(Headlines::new(articles))
    }

    /// Latest English technology headlines
    pub async fn tech_headlines(&self) -> NewsResult<Headlines> {
        self.tech_headlines_with_size(TECH_PAGE_SIZE).await
    }

    pub async fn tech_headlines_with_size(&self, page_size: u32) -> NewsResult<Headlines> {
        let api_key = self.api_key()?;

        let articles = self
            .fetch_top_headlines(HeadlineQuery::technology(), page_size, api_key)
            .await?;

        if articles.is_empty() {
            return Err(NewsError::empty_result(
                "No technology headlines available.",
            ));
        }

        Ok(Headlines::new(articles))
    }

    fn api_key(&self) -> NewsResult<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| NewsError::missing_api_key(&self.config.api_key_env))
    }

    fn endpoint(&self) -> String {
        format!("{}/top-headlines", self.config.base_url.trim_end_matches('/'))
    }

    /// Query string parameters for a request (pure function)
    fn build_query(
        query: HeadlineQuery,
        page_size: u32,
        api_key: &str,
    ) -> Vec<(&'static str, String)> {
        let mut params = match query {
            HeadlineQuery::Country { code } => vec![("country", code.to_string())],
            HeadlineQuery::Category { category, language } => vec![
                ("category", category.to_string()),
                ("language", language.to_string()),
            ],
        };
        params.push(("pageSize", page_size.clamp(1, MAX_PAGE_SIZE).to_string()));
        params.push(("apiKey", api_key.to_string()));
        params
    }

    async fn fetch_top_headlines(
        &self,
        query: HeadlineQuery,
        page_size: u32,
        api_key: &str,
    ) -> NewsResult<Vec<Article>> {
        let span = request_span!(?query, page_size);

        async {
            let params = Self::build_query(query, page_size, api_key);
            debug!(endpoint = %self.endpoint(), "Requesting top headlines");

            let response = self
                .client
                .get(self.endpoint())
                .query(&params)
                .send()
                .await
                .map_err(|e| {
                    let description = describe_transport_error(e);
                    warn!(error = %description, "News request failed");
                    NewsError::network(format!("News request failed: {description}"))
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let detail = Self::error_detail(&body);
                warn!(status = status.as_u16(), "News API returned an error status");
                return Err(NewsError::network(format!(
                    "News API error ({}): {}",
                    status.as_u16(),
                    detail
                )));
            }

            let body: HeadlinesResponse = response.json().await.map_err(|e| {
                NewsError::network(format!(
                    "Failed to parse news response: {}",
                    describe_transport_error(e)
                ))
            })?;

            if body.status.as_deref() == Some("error") {
                let detail = ApiErrorBody {
                    code: body.code,
                    message: body.message,
                }
                .detail()
                .unwrap_or_else(|| "no details".to_string());
                warn!(%detail, "News API reported an error");
                return Err(NewsError::network(format!("News API error: {detail}")));
            }

            let articles = body.into_articles();
            info!(count = articles.len(), "Fetched top headlines");
            Ok::<_, NewsError>(articles)
        }
        .instrument(span)
        .await
    }

    /// Prefer the API's own error message over the raw body (pure function)
    fn error_detail(body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(ApiErrorBody::detail)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "empty response body".to_string()
                } else {
                    body.trim().to_string()
                }
            })
    }
}

/// Flatten a reqwest error and its causes into one line, without the request URL
fn describe_transport_error(error: reqwest::Error) -> String {
    let timed_out = error.is_timeout();
    let error = error.without_url();

    let mut description = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }

    if timed_out && !description.contains("timed out") {
        description.push_str(" (timed out)");
    }

    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn client_without_key() -> NewsApiClient {
        NewsApiClient::new(NewsApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = NewsApiConfig::default();

        assert!(config.api_key.is_none());
        assert_eq!(config.api_key_env, "NEWS_API_KEY");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_empty_api_key_counts_as_missing() {
        assert!(NewsApiConfig::default().with_api_key("").api_key.is_none());
        assert_eq!(
            NewsApiConfig::default().with_api_key("k").api_key.as_deref(),
            Some("k")
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = NewsApiConfig::default().with_api_key("super-secret");
        let debug = format!("{config:?}");

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_build_country_query() {
        let params = NewsApiClient::build_query(HeadlineQuery::Country { code: "jp" }, 10, "key");

        assert_eq!(
            params,
            vec![
                ("country", "jp".to_string()),
                ("pageSize", "10".to_string()),
                ("apiKey", "key".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_technology_query() {
        let params = NewsApiClient::build_query(HeadlineQuery::technology(), 5, "key");

        assert_eq!(
            params,
            vec![
                ("category", "technology".to_string()),
                ("language", "en".to_string()),
                ("pageSize", "5".to_string()),
                ("apiKey", "key".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_size_is_clamped() {
        let params = NewsApiClient::build_query(HeadlineQuery::technology(), 500, "key");
        assert!(params.contains(&("pageSize", "100".to_string())));

        let params = NewsApiClient::build_query(HeadlineQuery::technology(), 0, "key");
        assert!(params.contains(&("pageSize", "1".to_string())));
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = NewsApiClient::new(NewsApiConfig {
            base_url: "https://newsapi.org/v2/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(client.endpoint(), "https://newsapi.org/v2/top-headlines");
    }

    #[test]
    fn test_error_detail_prefers_api_message() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        assert_eq!(
            NewsApiClient::error_detail(body),
            "apiKeyInvalid: Your API key is invalid."
        );

        assert_eq!(NewsApiClient::error_detail("Bad Gateway"), "Bad Gateway");
        assert_eq!(NewsApiClient::error_detail(""), "empty response body");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_lookup() {
        let client = client_without_key();

        let error = client.country_headlines("日本").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConfigError);
        assert!(error.message().contains("NEWS_API_KEY"));

        // Credential check comes before the country check
        let error = client.country_headlines("火星").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConfigError);

        let error = client.tech_headlines().await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConfigError);
    }

    #[tokio::test]
    async fn test_unsupported_country_lists_every_name() {
        let client = NewsApiClient::new(NewsApiConfig::default().with_api_key("key")).unwrap();

        let error = client.country_headlines("火星").await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnsupportedInput);
        assert!(error.message().contains("'火星'"));
        assert!(error.message().contains(&supported_countries_list()));
    }
}
