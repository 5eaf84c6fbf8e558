//! Streaming aggregation
//!
//! Lines are pulled from a [`LineSource`] one at a time, run through the
//! extractor, and folded into a [`LogAggregator`]. Nothing but the current line
//! and the running counters is held in memory, so a large log costs
//! O(distinct IPs + distinct URLs + distinct status codes).
//!
//! The overall data processing architecture is:
//!
//! LineSource
//! extract
//! LogLine
//! LogAggregator
//! Summary
//!

mod aggregator;
mod source;
mod summary;

#[cfg(test)]
mod tests;

pub use aggregator::LogAggregator;
pub use source::{LineSource, ReaderSource, open_log_file};
pub use summary::{CrawlerHits, Summary};

use crate::error::AnalyzeError;
use std::path::Path;

/// Open `path`, consume at most `limit` views from it, and return the summary.
pub fn analyze_file(path: &Path, limit: Option<u64>) -> Result<Summary, AnalyzeError> {
    let source = open_log_file(path)?;

    let mut aggregator = LogAggregator::new();
    aggregator.consume(source, limit)?;

    Ok(aggregator.summary())
}
