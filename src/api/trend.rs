//! DataLab search-trend client
//!
//! POSTs a JSON body to the trend endpoint and parses the time series per
//! keyword group. The API accepts at most [`MAX_KEYWORD_GROUPS`] groups;
//! anything beyond that is truncated with a warning before the request
//! goes out. Optional filters (device, gender, ages) are serialized only
//! when present so "not specified" never reaches the wire as an empty
//! field.

use super::ApiClient;
use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::models::{TrendEntry, TrendQuery, TrendResult};
use serde::{Deserialize, Serialize};

/// Hard upper bound the DataLab API places on keyword groups per request
pub const MAX_KEYWORD_GROUPS: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrendRequest<'a> {
    start_date: String,
    end_date: String,
    time_unit: &'static str,
    keyword_groups: Vec<WireKeywordGroup<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ages: Option<&'a [String]>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireKeywordGroup<'a> {
    group_name: &'a str,
    keywords: &'a [String],
}

#[derive(Debug, Deserialize)]
struct TrendResponse {
    results: Vec<TrendEntry>,
}

impl<'a> TrendRequest<'a> {
    fn from_query(query: &'a TrendQuery) -> Self {
        let groups = &query.keyword_groups;
        if groups.len() > MAX_KEYWORD_GROUPS {
            tracing::warn!(
                requested = groups.len(),
                kept = MAX_KEYWORD_GROUPS,
                "too many keyword groups for the DataLab API, truncating"
            );
        }

        Self {
            start_date: query.start_date.format("%Y-%m-%d").to_string(),
            end_date: query.end_date.format("%Y-%m-%d").to_string(),
            time_unit: query.time_unit.as_str(),
            keyword_groups: groups
                .iter()
                .take(MAX_KEYWORD_GROUPS)
                .map(|g| WireKeywordGroup {
                    group_name: &g.group_name,
                    keywords: &g.keywords,
                })
                .collect(),
            device: query.device.map(|d| d.as_str()),
            gender: query.gender.map(|g| g.as_str()),
            ages: if query.ages.is_empty() {
                None
            } else {
                Some(&query.ages)
            },
        }
    }
}

impl ApiClient {
    /// Fetch the relative search-interest time series for a query
    ///
    /// Returns one [`TrendEntry`] per keyword group, in whatever order the
    /// API chose. An empty `results` array is a valid outcome ("no data
    /// for the period"), not an error.
    pub async fn fetch_trend(
        &self,
        query: &TrendQuery,
        credentials: &Credentials,
    ) -> Result<TrendResult, ApiError> {
        let request = TrendRequest::from_query(query);
        let headers = Self::auth_headers(credentials)?;

        tracing::debug!(
            start = %request.start_date,
            end = %request.end_date,
            time_unit = request.time_unit,
            groups = request.keyword_groups.len(),
            "fetching search trend"
        );

        let response = self
            .http()
            .post(self.trend_url())
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let response = Self::check_status(response)?;
        let parsed: TrendResponse = Self::parse_json(response).await?;

        Ok(parsed.results)
    }
}
