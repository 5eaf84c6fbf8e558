/// Search engine crawlers that get their own hit counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crawler {
    Google,
    Bing,
    Baidu,
    Yandex,
}

// Checked in order; the first signature found wins.
const SIGNATURES: [(&str, Crawler); 4] = [
    ("googlebot", Crawler::Google),
    ("bingbot", Crawler::Bing),
    ("baiduspider", Crawler::Baidu),
    ("yandex", Crawler::Yandex),
];

impl Crawler {
    #[cfg(test)]
    pub(crate) const ALL: [Crawler; 4] = [
        Crawler::Google,
        Crawler::Bing,
        Crawler::Baidu,
        Crawler::Yandex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crawler::Google => "Google",
            Crawler::Bing => "Bing",
            Crawler::Baidu => "Baidu",
            Crawler::Yandex => "Yandex",
        }
    }
}

/// Identify a known crawler from a user agent, case-insensitively.
pub fn classify(user_agent: &str) -> Option<Crawler> {
    let user_agent = user_agent.to_ascii_lowercase();

    SIGNATURES
        .iter()
        .find(|(signature, _)| user_agent.contains(signature))
        .map(|(_, crawler)| *crawler)
}
