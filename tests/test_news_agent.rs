//! End-to-end agent tests: configuration to rendered tool results


use futures::future::join_all;
use newsdesk::agent::{AgentError, AgentState, NewsAgent};
use newsdesk::testing::{headlines_body_with, EchoTool};
use newsdesk::tools::ToolError;
use serde_json::json;
use test_helpers::{news_config, news_config_without_key, test_config, TEST_API_KEY};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn ready_agent(mock_server: &MockServer) -> NewsAgent {
    let mut agent = NewsAgent::with_news_api(test_config(), news_config(&mock_server.uri()));
    agent.initialize().await.unwrap();
    agent
}

#[tokio::test]
async fn test_manifest_lists_builtin_tools() {
    let mock_server = MockServer::start().await;
    let agent = ready_agent(&mock_server).await;

    let manifest = agent.manifest();
    assert_eq!(manifest.name, "test-agent");
    assert_eq!(manifest.model, "test-model");
    assert_eq!(
        manifest.tool_names(),
        vec!["get_country_news", "get_news", "get_tech_news"]
    );

    let serialized = serde_json::to_value(&manifest).unwrap();
    assert_eq!(serialized["tools"][0]["name"], "get_country_news");
    assert_eq!(serialized["tools"][0]["parameters"]["type"], "object");
}

#[tokio::test]
async fn test_country_news_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .and(query_param("country", "tw"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(headlines_body_with(3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let agent = ready_agent(&mock_server).await;
    let result = agent
        .invoke("get_country_news", &json!({"country_name": "台灣"}))
        .await
        .unwrap();

    assert_eq!(result["status"], "success");
    assert_eq!(result["country"], "台灣");
    assert_eq!(result["count"], 3);
    assert_eq!(result["articles"][0]["title"], "Headline 1");
    assert_eq!(result["articles"][0]["source"], "Source 1");
    assert_eq!(result["articles"][0]["publishedAt"], "2025-06-01T01:00:00Z");
}

#[tokio::test]
async fn test_upstream_failure_is_a_rendered_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let agent = ready_agent(&mock_server).await;
    let result = agent.invoke("get_tech_news", &json!({})).await.unwrap();

    assert_eq!(result["status"], "error");
    assert_eq!(result["category"], "technology");
    assert_eq!(result["kind"], "network_error");
    assert!(result["message"].as_str().unwrap().contains("500"));
    assert!(!result.to_string().contains(TEST_API_KEY));
}

#[tokio::test]
async fn test_missing_key_is_a_rendered_config_error() {
    let mock_server = MockServer::start().await;

    let mut agent =
        NewsAgent::with_news_api(test_config(), news_config_without_key(&mock_server.uri()));
    agent.initialize().await.unwrap();

    let result = agent.invoke("get_tech_news", &json!({})).await.unwrap();
    assert_eq!(result["status"], "error");
    assert_eq!(result["kind"], "config_error");
    assert!(result["message"].as_str().unwrap().contains("NEWS_API_KEY"));

    // City lookups need no credential
    let city = agent
        .invoke("get_news", &json!({"city": "Taipei"}))
        .await
        .unwrap();
    assert_eq!(city["status"], "success");
}

#[tokio::test]
async fn test_invalid_arguments_are_rejected_before_execution() {
    let mock_server = MockServer::start().await;
    let agent = ready_agent(&mock_server).await;

    let result = agent
        .invoke("get_country_news", &json!({"country": "日本"}))
        .await;

    assert!(matches!(
        result,
        Err(AgentError::Tool(ToolError::ValidationError(_)))
    ));
}

#[tokio::test]
async fn test_concurrent_invocations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(headlines_body_with(1)))
        .expect(4)
        .mount(&mock_server)
        .await;

    let mut agent = ready_agent(&mock_server).await;
    let echo = EchoTool::new();
    let calls = echo.call_counter();
    agent.register_tool(Box::new(echo), None).await.unwrap();

    let countries = ["美國", "日本", "英國", "澳洲"];
    let country_calls = countries.iter().map(|name| {
        let arguments = json!({ "country_name": name });
        let agent = &agent;
        async move { agent.invoke("get_country_news", &arguments).await }
    });
    let results = join_all(country_calls).await;

    for (name, result) in countries.iter().zip(results) {
        let result = result.unwrap();
        assert_eq!(result["status"], "success");
        assert_eq!(result["country"], *name);
    }

    let echo_calls = (0..3).map(|i| {
        let arguments = json!({"text": format!("ping {i}")});
        let agent = &agent;
        async move { agent.invoke("echo", &arguments).await }
    });
    for result in join_all(echo_calls).await {
        assert!(result.is_ok());
    }
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 3);

    agent.shutdown().await.unwrap();
    assert_eq!(agent.state(), AgentState::Stopped);
}

#[tokio::test]
async fn test_invoke_after_shutdown_fails() {
    let mock_server = MockServer::start().await;
    let mut agent = ready_agent(&mock_server).await;
    agent.shutdown().await.unwrap();

    let result = agent.invoke("get_news", &json!({"city": "台北"})).await;
    assert!(matches!(
        result,
        Err(AgentError::NotReady(AgentState::Stopped))
    ));
}
