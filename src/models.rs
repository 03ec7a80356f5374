// Core data structures for the mulgyeol dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Aggregation granularity for the DataLab trend endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Date,
    Week,
    Month,
}

impl TimeUnit {
    /// Wire value expected by the API (`timeUnit` field)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "date" | "day" => Some(Self::Date),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Date, Self::Week, Self::Month]
    }
}

/// Optional device filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    Pc,
    Mobile,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Mobile => "mo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pc" => Some(Self::Pc),
            "mo" | "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }
}

/// Optional gender filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "m" | "male" => Some(Self::Male),
            "f" | "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Sort order for the news-search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsSort {
    /// Most recent first
    Date,
    /// Relevance (`sim` on the wire)
    Relevance,
}

impl NewsSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Relevance => "sim",
        }
    }
}

/// One keyword group as the DataLab API understands it
///
/// The dashboard maps every input keyword to its own single-keyword group,
/// same as grouping was used upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub group_name: String,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    /// Group containing exactly one keyword, named after it
    pub fn single(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        Self {
            group_name: keyword.clone(),
            keywords: vec![keyword],
        }
    }
}

/// A validated trend query
///
/// Construction enforces `start_date <= end_date` and a nonempty keyword
/// list. Truncation to the API's five-group limit happens in the trend
/// client, not here, so the caller can still see what was asked for.
#[derive(Debug, Clone)]
pub struct TrendQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time_unit: TimeUnit,
    pub keyword_groups: Vec<KeywordGroup>,
    pub device: Option<Device>,
    pub gender: Option<Gender>,
    /// Age bucket codes "1".."11"; empty means no age filter
    pub ages: Vec<String>,
}

impl TrendQuery {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        time_unit: TimeUnit,
        keyword_groups: Vec<KeywordGroup>,
    ) -> Result<Self, Error> {
        if start_date > end_date {
            return Err(Error::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        if keyword_groups.is_empty() {
            return Err(Error::NoKeywords);
        }
        Ok(Self {
            start_date,
            end_date,
            time_unit,
            keyword_groups,
            device: None,
            gender: None,
            ages: Vec::new(),
        })
    }

    pub fn with_device(mut self, device: Option<Device>) -> Self {
        self.device = device;
        self
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_ages(mut self, ages: Vec<String>) -> Self {
        self.ages = ages;
        self
    }
}

/// Split a comma-separated keyword line into trimmed, nonempty keywords
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// One point of a trend time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Period label as returned by the API (e.g. "2024-01-01")
    pub period: String,
    /// Relative search interest, >= 0, max 100 within the requested range
    pub ratio: f64,
}

/// Time series for one requested keyword group
///
/// Order of entries in a response is whatever the API returned; it is not
/// guaranteed to match request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub title: String,
    pub data: Vec<DataPoint>,
}

/// Full trend response: one entry per requested keyword group
pub type TrendResult = Vec<TrendEntry>;

/// Summary statistics for one keyword, derived from its time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub keyword: String,
    /// Mean of all ratios in the range
    pub avg_ratio: f64,
    /// Maximum ratio in the range
    pub max_ratio: f64,
    /// Ratio of the final period
    pub last_ratio: f64,
}

/// One news snippet, sanitized for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub description: String,
}

/// Age bucket codes accepted by the DataLab API, with their ranges
pub const AGE_BUCKETS: &[(&str, &str)] = &[
    ("1", "0-12"),
    ("2", "13-18"),
    ("3", "19-24"),
    ("4", "25-29"),
    ("5", "30-34"),
    ("6", "35-39"),
    ("7", "40-44"),
    ("8", "45-49"),
    ("9", "50-54"),
    ("10", "55-59"),
    ("11", "60+"),
];

/// Check that an age code is one of the eleven DataLab buckets
pub fn is_valid_age_code(code: &str) -> bool {
    AGE_BUCKETS.iter().any(|(c, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_time_unit_wire_values() {
        assert_eq!(TimeUnit::Date.as_str(), "date");
        assert_eq!(TimeUnit::Week.as_str(), "week");
        assert_eq!(TimeUnit::Month.as_str(), "month");
    }

    #[test]
    fn test_time_unit_parse() {
        assert_eq!(TimeUnit::parse("week"), Some(TimeUnit::Week));
        assert_eq!(TimeUnit::parse("day"), Some(TimeUnit::Date));
        assert_eq!(TimeUnit::parse("hour"), None);
    }

    #[test]
    fn test_device_wire_values() {
        assert_eq!(Device::Pc.as_str(), "pc");
        assert_eq!(Device::Mobile.as_str(), "mo");
    }

    #[test]
    fn test_news_sort_relevance_is_sim() {
        assert_eq!(NewsSort::Relevance.as_str(), "sim");
        assert_eq!(NewsSort::Date.as_str(), "date");
    }

    #[test]
    fn test_single_keyword_group() {
        let group = KeywordGroup::single("아이폰");
        assert_eq!(group.group_name, "아이폰");
        assert_eq!(group.keywords, vec!["아이폰".to_string()]);
    }

    #[test]
    fn test_query_rejects_inverted_range() {
        let result = TrendQuery::new(
            date(2024, 2, 1),
            date(2024, 1, 1),
            TimeUnit::Week,
            vec![KeywordGroup::single("a")],
        );
        assert!(matches!(result, Err(Error::InvalidDateRange { .. })));
    }

    #[test]
    fn test_query_rejects_empty_keywords() {
        let result = TrendQuery::new(date(2024, 1, 1), date(2024, 2, 1), TimeUnit::Week, vec![]);
        assert!(matches!(result, Err(Error::NoKeywords)));
    }

    #[test]
    fn test_query_same_day_range_is_valid() {
        let result = TrendQuery::new(
            date(2024, 1, 1),
            date(2024, 1, 1),
            TimeUnit::Date,
            vec![KeywordGroup::single("a")],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_keywords_trims_and_drops_empties() {
        let parsed = parse_keywords(" 아이폰, 갤럭시 ,, 에어팟 ,");
        assert_eq!(parsed, vec!["아이폰", "갤럭시", "에어팟"]);
    }

    #[test]
    fn test_parse_keywords_empty_input() {
        assert!(parse_keywords("  , ,").is_empty());
        assert!(parse_keywords("").is_empty());
    }

    #[test]
    fn test_age_codes() {
        assert!(is_valid_age_code("1"));
        assert!(is_valid_age_code("11"));
        assert!(!is_valid_age_code("12"));
        assert!(!is_valid_age_code("0"));
    }
}
