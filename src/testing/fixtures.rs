//! News API response fixtures

use serde_json::{json, Value};

/// A fully populated upstream article, numbered so lists stay distinguishable
pub fn article_json(index: usize) -> Value {
    json!({
        "source": {"id": format!("source-{index}"), "name": format!("Source {index}")},
        "author": format!("Author {index}"),
        "title": format!("Headline {index}"),
        "description": format!("Description {index}"),
        "url": format!("https://news.example.com/articles/{index}"),
        "urlToImage": null,
        "publishedAt": format!("2025-06-01T{:02}:00:00Z", index % 24),
        "content": format!("Content {index}")
    })
}

/// An upstream article with only a title, everything else absent or null
pub fn sparse_article_json(title: Option<&str>) -> Value {
    json!({
        "source": {"id": null, "name": null},
        "title": title,
        "description": null
    })
}

/// A successful `top-headlines` body wrapping `articles`
pub fn headlines_body(articles: Vec<Value>) -> Value {
    json!({
        "status": "ok",
        "totalResults": articles.len(),
        "articles": articles
    })
}

/// A successful body with `count` populated articles
pub fn headlines_body_with(count: usize) -> Value {
    headlines_body((1..=count).map(article_json).collect())
}

/// An error body as the news API sends it with non-2xx statuses
pub fn api_error_body(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}
