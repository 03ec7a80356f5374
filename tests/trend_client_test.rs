//! Integration tests for the trend client using wiremock

mod common;

use common::{client_for, test_credentials, trend_body};
use chrono::NaiveDate;
use mulgyeol::api::trend::MAX_KEYWORD_GROUPS;
use mulgyeol::error::ApiError;
use mulgyeol::models::{Device, KeywordGroup, TimeUnit, TrendQuery};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query(keywords: &[&str]) -> TrendQuery {
    TrendQuery::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        TimeUnit::Week,
        keywords.iter().map(|k| KeywordGroup::single(*k)).collect(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_trend_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/datalab/search"))
        .and(header("X-Naver-Client-Id", "test-client-id"))
        .and(header("X-Naver-Client-Secret", "test-client-secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(trend_body(&[("아이폰", &[10.0, 20.0, 30.0])])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let result = client
        .fetch_trend(&query(&["아이폰"]), &test_credentials())
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "아이폰");
    assert_eq!(result[0].data.len(), 3);
}

#[tokio::test]
async fn test_401_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/datalab/search"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1) // no retry
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let result = client.fetch_trend(&query(&["a"]), &test_credentials()).await;

    assert!(matches!(result, Err(ApiError::Auth(401))));
}

#[tokio::test]
async fn test_403_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let result = client.fetch_trend(&query(&["a"]), &test_credentials()).await;

    assert!(matches!(result, Err(ApiError::Auth(403))));
}

#[tokio::test]
async fn test_500_maps_to_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1) // no retry
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let result = client.fetch_trend(&query(&["a"]), &test_credentials()).await;

    assert!(matches!(result, Err(ApiError::Status(500))));
}

#[tokio::test]
async fn test_at_most_five_groups_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/datalab/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trend_body(&[])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client
        .fetch_trend(
            &query(&["a", "b", "c", "d", "e", "f", "g"]),
            &test_credentials(),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let groups = body["keywordGroups"].as_array().unwrap();
    assert_eq!(groups.len(), MAX_KEYWORD_GROUPS);
    assert_eq!(groups[0]["groupName"], "a");
    assert_eq!(groups[4]["groupName"], "e");
}

#[tokio::test]
async fn test_absent_filters_missing_from_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trend_body(&[])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client
        .fetch_trend(&query(&["a"]), &test_credentials())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("device").is_none());
    assert!(body.get("gender").is_none());
    assert!(body.get("ages").is_none());
}

#[tokio::test]
async fn test_device_filter_reaches_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({ "device": "pc" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(trend_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let q = query(&["a"]).with_device(Some(Device::Pc));
    client.fetch_trend(&q, &test_credentials()).await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_is_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "unexpected": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let result = client.fetch_trend(&query(&["a"]), &test_credentials()).await;

    assert!(matches!(result, Err(ApiError::Schema(_))));
}

#[tokio::test]
async fn test_slow_upstream_fails_as_timeout() {
    use mulgyeol::api::ApiClient;
    use mulgyeol::config::ApiConfig;
    use std::time::Duration;

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(trend_body(&[]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig {
        trend_url: format!("{}/v1/datalab/search", server.uri()),
        news_url: format!("{}/v1/search/news.json", server.uri()),
        ..ApiConfig::default()
    };
    let client = ApiClient::with_timeout(&config, Duration::from_millis(200)).unwrap();
    let result = client.fetch_trend(&query(&["a"]), &test_credentials()).await;

    assert!(matches!(result, Err(ApiError::Timeout)));
}

#[tokio::test]
async fn test_empty_results_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trend_body(&[])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let result = client
        .fetch_trend(&query(&["a"]), &test_credentials())
        .await
        .unwrap();

    assert!(result.is_empty());
}
