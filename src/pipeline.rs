//! One dashboard query, end to end
//!
//! Pre-flight credential check, one trend fetch, ranking, then one news
//! fetch per ranked keyword in ranking order. A news failure is isolated
//! to its keyword's section; only a trend failure (or missing
//! credentials) fails the whole query. Everything here is request-scoped:
//! nothing is cached or shared between queries.

use crate::analytics::rank;
use crate::api::ApiClient;
use crate::credentials::Credentials;
use crate::error::{ApiError, Error};
use crate::models::{NewsItem, NewsSort, RankedKeyword, TrendQuery};

/// News snippets (or the failure) for one ranked keyword
#[derive(Debug)]
pub struct NewsSection {
    pub keyword: String,
    pub items: Vec<NewsItem>,
    /// Set when fetching this keyword's news failed; other sections are
    /// unaffected
    pub error: Option<ApiError>,
}

/// Result of one completed query
///
/// An empty `ranking` means the API returned no usable data for the
/// period/keywords; the dashboard shows an informational state for it.
#[derive(Debug, Default)]
pub struct QueryOutcome {
    pub ranking: Vec<RankedKeyword>,
    pub news: Vec<NewsSection>,
}

/// Execute one query against both endpoints
///
/// Fails before any network call if the credential pair is incomplete.
/// The ranking is committed only once the trend call has fully succeeded.
pub async fn execute(
    api: &ApiClient,
    credentials: &Credentials,
    query: &TrendQuery,
    news_display: u32,
    news_sort: NewsSort,
) -> Result<QueryOutcome, Error> {
    if !credentials.is_complete() {
        return Err(Error::MissingCredentials);
    }

    let trend = api.fetch_trend(query, credentials).await?;
    let ranking = rank(&trend);

    tracing::info!(
        entries = trend.len(),
        ranked = ranking.len(),
        "trend fetch complete"
    );

    let mut news = Vec::with_capacity(ranking.len());
    for ranked in &ranking {
        match api
            .fetch_news(&ranked.keyword, news_display, news_sort, credentials)
            .await
        {
            Ok(items) => news.push(NewsSection {
                keyword: ranked.keyword.clone(),
                items,
                error: None,
            }),
            Err(e) => {
                tracing::warn!(keyword = %ranked.keyword, error = %e, "news fetch failed");
                news.push(NewsSection {
                    keyword: ranked.keyword.clone(),
                    items: Vec::new(),
                    error: Some(e),
                });
            }
        }
    }

    Ok(QueryOutcome { ranking, news })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::models::{KeywordGroup, TimeUnit};
    use chrono::NaiveDate;

    fn query() -> TrendQuery {
        TrendQuery::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            TimeUnit::Week,
            vec![KeywordGroup::single("a")],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_incomplete_credentials_refused_before_any_call() {
        // Endpoints that do not resolve; if the pre-flight check works the
        // client never touches the network.
        let config = ApiConfig {
            trend_url: "http://127.0.0.1:0/trend".to_string(),
            news_url: "http://127.0.0.1:0/news".to_string(),
            ..ApiConfig::default()
        };
        let api = ApiClient::new(&config).unwrap();
        let credentials = Credentials::new("", "");

        let result = execute(&api, &credentials, &query(), 5, NewsSort::Date).await;
        assert!(matches!(result, Err(Error::MissingCredentials)));
    }
}
