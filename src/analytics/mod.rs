//! Aggregation and ranking of trend time series

pub mod ranking;

pub use ranking::{rank, summarize};
