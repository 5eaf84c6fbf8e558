use crate::access_log::Crawler;
use crate::aggregate::{CrawlerHits, Summary};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn serializes_with_stable_key_names() {
    let summary = Summary {
        view_count: 2,
        unique_url_count: 2,
        unique_ip_count: 1,
        total_bytes: 173,
        crawler_hits: CrawlerHits {
            google: 1,
            ..CrawlerHits::default()
        },
        status_codes: BTreeMap::from([("404".to_string(), 1), ("200".to_string(), 1)]),
    };

    let json = serde_json::to_string(&summary).unwrap();

    assert_eq!(
        json,
        r#"{"views":2,"urls":2,"ips":1,"traffic":173,"crawlers":{"Google":1,"Bing":0,"Baidu":0,"Yandex":0},"statusCodes":{"200":1,"404":1}}"#
    );
}

#[test]
fn record_and_get_address_the_same_counter() {
    let mut hits = CrawlerHits::default();

    for crawler in Crawler::ALL {
        hits.record(crawler);
    }
    hits.record(Crawler::Yandex);

    assert_eq!(hits.get(Crawler::Google), 1);
    assert_eq!(hits.get(Crawler::Bing), 1);
    assert_eq!(hits.get(Crawler::Baidu), 1);
    assert_eq!(hits.get(Crawler::Yandex), 2);
}
