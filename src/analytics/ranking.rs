//! Keyword ranking by relative search interest
//!
//! Reduces each trend entry's time series to summary statistics (mean,
//! maximum, last) and sorts by mean descending. Pure functions, no I/O:
//! the pipeline hands in whatever the trend client returned.

use crate::models::{RankedKeyword, TrendEntry};
use std::cmp::Ordering;

/// Rank trend entries by average ratio, descending
///
/// Entries whose time series is empty are excluded from the output; the
/// API should not produce them, but a malformed response must not take the
/// whole ranking down. An empty input produces an empty ranking, which the
/// dashboard presents as "no data", not as an error.
///
/// The sort is stable, so entries with equal averages keep the order the
/// API returned them in.
pub fn rank(result: &[TrendEntry]) -> Vec<RankedKeyword> {
    let mut ranked: Vec<RankedKeyword> = result.iter().filter_map(summarize).collect();

    ranked.sort_by(|a, b| {
        b.avg_ratio
            .partial_cmp(&a.avg_ratio)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

/// Reduce one entry's time series to summary statistics
///
/// Returns `None` for an entry with no data points.
pub fn summarize(entry: &TrendEntry) -> Option<RankedKeyword> {
    if entry.data.is_empty() {
        tracing::warn!(keyword = %entry.title, "trend entry has no data points, skipping");
        return None;
    }

    let sum: f64 = entry.data.iter().map(|p| p.ratio).sum();
    let avg_ratio = sum / entry.data.len() as f64;
    let max_ratio = entry
        .data
        .iter()
        .map(|p| p.ratio)
        .fold(f64::NEG_INFINITY, f64::max);
    // data is nonempty, so last() always exists
    let last_ratio = entry.data.last().map(|p| p.ratio).unwrap_or(0.0);

    Some(RankedKeyword {
        keyword: entry.title.clone(),
        avg_ratio,
        max_ratio,
        last_ratio,
    })
}
