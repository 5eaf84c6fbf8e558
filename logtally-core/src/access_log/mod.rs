//! Access log line extraction
//!
//! A raw line is split into tokens by one composite pattern and the tokens are
//! bound, in order, to the fields of the Combined Log Format:
//!
//! ```text
//! 1.2.3.4 - - [10/Oct/2000:13:55:36 -0700] "GET /a HTTP/1.1" 200 123 "-" "Mozilla/5.0"
//! client  ident user  timestamp            request           status bytes referer user_agent
//! ```
//!
//! Only the fields the aggregator needs end up in a [`LogLine`]; the rest are
//! still checked for shape so that a shifted line is rejected instead of
//! silently misread.

mod crawler;
mod extract;
mod ip;

#[cfg(test)]
mod tests;

pub use crawler::{Crawler, classify};
pub use extract::{MalformedLine, extract};
pub use ip::{IpParseError, ip_to_int};

/// One successfully extracted access log line. Borrows from the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub ip: &'a str,
    /// `ip` as a big-endian integer, the key used for unique-IP counting.
    pub ip_key: u32,
    pub status: &'a str,
    pub bytes_sent: u64,
    /// Request target taken from the quoted request line.
    pub url: &'a str,
    pub user_agent: &'a str,
}
