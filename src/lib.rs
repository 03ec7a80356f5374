//! mulgyeol - Naver keyword trend dashboard
//!
//! An interactive terminal dashboard that ranks keywords by relative search
//! interest (Naver DataLab) over a date range and shows recent news
//! snippets (Naver news search) per keyword.
//!
//! # Architecture
//!
//! - [`config`] - Configuration management and settings
//! - [`credentials`] - Layered credential resolution (secrets file, env, session)
//! - [`api`] - HTTP clients for the trend and news endpoints
//! - [`analytics`] - Aggregation and ranking of trend time series
//! - [`sanitize`] - Snippet sanitization (emphasis markup, entities)
//! - [`pipeline`] - One query end to end, with per-keyword news isolation
//! - [`ui`] - The ratatui dashboard itself
//!
//! # Example
//!
//! ```no_run
//! use mulgyeol::config::Config;
//! use mulgyeol::ui;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     config.validate()?;
//!     ui::run(config).await
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sanitize;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::ApiClient;
    pub use crate::config::Config;
    pub use crate::credentials::Credentials;
    pub use crate::error::{ApiError, Error, ErrorCategory, Result};
    pub use crate::models::{
        NewsItem, NewsSort, RankedKeyword, TimeUnit, TrendEntry, TrendQuery, TrendResult,
    };
    pub use crate::pipeline::QueryOutcome;
}

// Direct re-exports for convenience
pub use models::{NewsItem, RankedKeyword, TrendEntry, TrendQuery};
