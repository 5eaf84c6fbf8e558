use crate::access_log::LogLine;
use crate::access_log::ip::{IpParseError, ip_to_int};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

/// Tried in order at each position: `[...]`, `"-"`, `"..."` (backslash escapes
/// allowed inside), then a bare run of non-whitespace.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\[([^\]]*)\]|"-"|"((?:[^"\\]|\\.)*)"|(\S+)"#)
        .expect("access log token pattern must compile")
});

const FIELD_COUNT: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedLine {
    #[error("expected at least 9 tokens, found {found}")]
    TooFewTokens { found: usize },

    #[error("unexpected token shape for field '{field}'")]
    UnexpectedToken { field: &'static str },

    #[error("invalid client address: {0}")]
    InvalidIp(#[from] IpParseError),

    #[error("byte count '{value}' is not a non-negative integer")]
    InvalidBytes { value: String },

    #[error("request line '{request}' has no target")]
    MissingRequestTarget { request: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// `[...]`, interior only
    Bracketed(&'a str),
    /// the `"-"` placeholder
    Absent,
    /// `"..."`, interior only
    Quoted(&'a str),
    Bare(&'a str),
}

impl<'a> Token<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        if let Some(m) = caps.get(1) {
            Token::Bracketed(m.as_str())
        } else if let Some(m) = caps.get(2) {
            Token::Quoted(m.as_str())
        } else if let Some(m) = caps.get(3) {
            Token::Bare(m.as_str())
        } else {
            Token::Absent
        }
    }
}

fn tokenize(line: &str) -> impl Iterator<Item = Token<'_>> {
    TOKEN_PATTERN
        .captures_iter(line)
        .map(|caps| Token::from_captures(&caps))
}

fn bare<'a>(token: Token<'a>, field: &'static str) -> Result<&'a str, MalformedLine> {
    match token {
        Token::Bare(value) => Ok(value),
        _ => Err(MalformedLine::UnexpectedToken { field }),
    }
}

/// Quoted value or the `"-"` placeholder, which reads back as `-`.
fn quoted_or_absent<'a>(token: Token<'a>, field: &'static str) -> Result<&'a str, MalformedLine> {
    match token {
        Token::Quoted(value) => Ok(value),
        Token::Absent => Ok("-"),
        _ => Err(MalformedLine::UnexpectedToken { field }),
    }
}

fn parse_bytes(value: &str) -> Result<u64, MalformedLine> {
    let invalid = || MalformedLine::InvalidBytes {
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<u64>().map_err(|_| invalid())
}

/// Extract the fields of one access log line.
///
/// Tokens past the ninth are ignored, so trailing custom fields do not make a
/// line malformed. Any failure rejects the whole line.
pub fn extract(line: &str) -> Result<LogLine<'_>, MalformedLine> {
    let mut fields = [Token::Absent; FIELD_COUNT];
    let mut found = 0;
    for (slot, token) in fields.iter_mut().zip(tokenize(line)) {
        *slot = token;
        found += 1;
    }
    if found < FIELD_COUNT {
        return Err(MalformedLine::TooFewTokens { found });
    }

    let [
        client,
        ident,
        user,
        timestamp,
        request,
        status,
        bytes,
        referer,
        user_agent,
    ] = fields;

    let ip = bare(client, "client")?;
    bare(ident, "ident")?;
    bare(user, "user")?;
    if !matches!(timestamp, Token::Bracketed(_)) {
        return Err(MalformedLine::UnexpectedToken { field: "timestamp" });
    }
    let Token::Quoted(request) = request else {
        return Err(MalformedLine::UnexpectedToken { field: "request" });
    };
    let status = bare(status, "status")?;
    let bytes = bare(bytes, "bytes")?;
    quoted_or_absent(referer, "referer")?;
    let user_agent = quoted_or_absent(user_agent, "user_agent")?;

    let ip_key = ip_to_int(ip)?;
    let bytes_sent = parse_bytes(bytes)?;

    // "METHOD target PROTOCOL"
    let Some(url) = request.split_whitespace().nth(1) else {
        return Err(MalformedLine::MissingRequestTarget {
            request: request.to_string(),
        });
    };

    Ok(LogLine {
        ip,
        ip_key,
        status,
        bytes_sent,
        url,
        user_agent,
    })
}
