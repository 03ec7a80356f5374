//! Common test utilities

use mulgyeol::api::ApiClient;
use mulgyeol::config::ApiConfig;
use mulgyeol::credentials::Credentials;

/// API client pointed at a wiremock server
pub fn client_for(server_uri: &str) -> ApiClient {
    let config = ApiConfig {
        trend_url: format!("{server_uri}/v1/datalab/search"),
        news_url: format!("{server_uri}/v1/search/news.json"),
        ..ApiConfig::default()
    };
    ApiClient::new(&config).unwrap()
}

/// A complete credential pair for tests
pub fn test_credentials() -> Credentials {
    Credentials::new("test-client-id", "test-client-secret")
}

/// Trend response body with one entry per (title, ratios) pair
#[allow(dead_code)]
pub fn trend_body(entries: &[(&str, &[f64])]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = entries
        .iter()
        .map(|(title, ratios)| {
            let data: Vec<serde_json::Value> = ratios
                .iter()
                .enumerate()
                .map(|(i, ratio)| {
                    serde_json::json!({
                        "period": format!("2024-01-{:02}", i + 1),
                        "ratio": ratio
                    })
                })
                .collect();
            serde_json::json!({ "title": title, "keywords": [title], "data": data })
        })
        .collect();

    serde_json::json!({
        "startDate": "2024-01-01",
        "endDate": "2024-02-01",
        "timeUnit": "week",
        "results": results
    })
}

/// News response body with simple numbered items
#[allow(dead_code)]
pub fn news_body(count: usize) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "title": format!("<b>기사</b> {i}"),
                "link": format!("https://n.news.naver.com/article/{i}"),
                "description": format!("요약 {i}"),
                "pubDate": "Mon, 01 Jan 2024 00:00:00 +0900"
            })
        })
        .collect();

    serde_json::json!({ "total": count, "items": items })
}
