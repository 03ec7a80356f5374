//! News-search client
//!
//! GETs the news endpoint with `query`/`display`/`sort` parameters and
//! maps the items to sanitized [`NewsItem`]s. `display` caps how many
//! snippets the upstream returns; it is passed through, not validated
//! locally. The pipeline calls this once per ranked keyword and treats a
//! failure as local to that keyword's section.

use super::ApiClient;
use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::models::{NewsItem, NewsSort};
use crate::sanitize::sanitize;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    items: Vec<WireNewsItem>,
}

// The API returns more fields (originallink, pubDate, ...); only the three
// the dashboard renders are kept.
#[derive(Debug, Deserialize)]
struct WireNewsItem {
    title: String,
    link: String,
    description: String,
}

impl ApiClient {
    /// Fetch up to `display` news snippets for one keyword
    ///
    /// Titles and descriptions come back with emphasis markup and escaped
    /// entities; both are sanitized here so no markup ever reaches the
    /// rendering layer.
    pub async fn fetch_news(
        &self,
        query: &str,
        display: u32,
        sort: NewsSort,
        credentials: &Credentials,
    ) -> Result<Vec<NewsItem>, ApiError> {
        let headers = Self::auth_headers(credentials)?;

        // `display` as a bare field clashes with `tracing::field::display`
        // inside the macro expansion; bind it under another name.
        let display_count = display;
        tracing::debug!(query, display = display_count, sort = sort.as_str(), "fetching news");

        let response = self
            .http()
            .get(self.news_url())
            .headers(headers)
            .query(&[
                ("query", query),
                ("display", &display.to_string()),
                ("sort", sort.as_str()),
            ])
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let response = Self::check_status(response)?;
        let parsed: NewsResponse = Self::parse_json(response).await?;

        Ok(parsed
            .items
            .into_iter()
            .map(|item| NewsItem {
                title: sanitize(&item.title),
                link: item.link,
                description: sanitize(&item.description),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_schema_ignores_extra_fields() {
        let json = r#"{
            "lastBuildDate": "Mon, 01 Jan 2024 00:00:00 +0900",
            "total": 123,
            "start": 1,
            "display": 2,
            "items": [
                {"title": "<b>아이폰</b> 출시", "originallink": "https://example.com/a",
                 "link": "https://n.news.naver.com/a", "description": "요약", "pubDate": "..."},
                {"title": "두번째", "link": "https://n.news.naver.com/b", "description": ""}
            ]
        }"#;

        let parsed: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].title, "<b>아이폰</b> 출시");
    }

    #[test]
    fn test_missing_required_field_is_schema_error() {
        let json = r#"{"items": [{"title": "no link or description"}]}"#;
        let parsed: Result<NewsResponse, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
