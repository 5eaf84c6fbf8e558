use crate::access_log::{LogLine, classify, extract};
use crate::aggregate::source::LineSource;
use crate::aggregate::summary::{CrawlerHits, Summary};
use crate::error::AnalyzeError;
use ahash::{AHashMap, AHashSet};
use std::time::Instant;
use tracing::{debug, info};

/// Accumulates summary statistics over a stream of access log lines.
///
/// Lines that fail extraction are skipped and never count as views, so the
/// status histogram always sums to the view count.
#[derive(Debug, Default)]
pub struct LogAggregator {
    views: u64,
    skipped: u64,
    ips: AHashSet<u32>,
    urls: AHashSet<String>,
    total_bytes: u64,
    crawlers: CrawlerHits,
    status_codes: AHashMap<String, u64>,
}

impl LogAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull lines from `source` until it is exhausted or `limit` views have been
    /// counted. The limit is checked before every read, so no line past it is
    /// ever pulled. `source` is dropped on return, whichever way that happens.
    pub fn consume<S: LineSource>(
        &mut self,
        mut source: S,
        limit: Option<u64>,
    ) -> Result<(), AnalyzeError> {
        let started = Instant::now();
        let mut line_number: u64 = 0;

        while limit.is_none_or(|max| self.views < max) {
            let Some(raw) = source.next_line().map_err(AnalyzeError::source_read)? else {
                break;
            };
            line_number += 1;

            match extract(raw) {
                Ok(line) => self.record(&line),
                Err(reason) => {
                    self.skipped += 1;
                    debug!(line = line_number, %reason, "skipping malformed line");
                }
            }
        }
        drop(source);

        info!(
            views = self.views,
            skipped = self.skipped,
            lines = line_number,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "log consumed"
        );
        Ok(())
    }

    fn record(&mut self, line: &LogLine<'_>) {
        self.views += 1;
        self.ips.insert(line.ip_key);

        if !self.urls.contains(line.url) {
            self.urls.insert(line.url.to_owned());
        }

        match self.status_codes.get_mut(line.status) {
            Some(count) => *count += 1,
            None => {
                self.status_codes.insert(line.status.to_owned(), 1);
            }
        }

        self.total_bytes = self.total_bytes.saturating_add(line.bytes_sent);

        if let Some(crawler) = classify(line.user_agent) {
            self.crawlers.record(crawler);
        }
    }

    pub fn views(&self) -> u64 {
        self.views
    }

    /// Lines read but rejected by the extractor.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn summary(&self) -> Summary {
        Summary {
            view_count: self.views,
            unique_url_count: self.urls.len() as u64,
            unique_ip_count: self.ips.len() as u64,
            total_bytes: self.total_bytes,
            crawler_hits: self.crawlers.clone(),
            status_codes: self
                .status_codes
                .iter()
                .map(|(status, count)| (status.clone(), *count))
                .collect(),
        }
    }
}
