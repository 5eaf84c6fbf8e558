use crate::access_log::Crawler;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hits per known crawler. Every key is always present, even at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlerHits {
    #[serde(rename = "Google")]
    pub google: u64,
    #[serde(rename = "Bing")]
    pub bing: u64,
    #[serde(rename = "Baidu")]
    pub baidu: u64,
    #[serde(rename = "Yandex")]
    pub yandex: u64,
}

impl CrawlerHits {
    pub fn record(&mut self, crawler: Crawler) {
        *self.slot(crawler) += 1;
    }

    #[cfg(test)]
    pub(crate) fn get(&self, crawler: Crawler) -> u64 {
        match crawler {
            Crawler::Google => self.google,
            Crawler::Bing => self.bing,
            Crawler::Baidu => self.baidu,
            Crawler::Yandex => self.yandex,
        }
    }

    fn slot(&mut self, crawler: Crawler) -> &mut u64 {
        match crawler {
            Crawler::Google => &mut self.google,
            Crawler::Bing => &mut self.bing,
            Crawler::Baidu => &mut self.baidu,
            Crawler::Yandex => &mut self.yandex,
        }
    }
}

/// Final result of one run, serialized with the key names existing consumers expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "views")]
    pub view_count: u64,
    #[serde(rename = "urls")]
    pub unique_url_count: u64,
    #[serde(rename = "ips")]
    pub unique_ip_count: u64,
    #[serde(rename = "traffic")]
    pub total_bytes: u64,
    #[serde(rename = "crawlers")]
    pub crawler_hits: CrawlerHits,
    /// Sorted so repeated runs serialize identically.
    #[serde(rename = "statusCodes")]
    pub status_codes: BTreeMap<String, u64>,
}
