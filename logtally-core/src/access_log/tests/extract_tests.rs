use crate::access_log::{IpParseError, LogLine, MalformedLine, extract};
use pretty_assertions::assert_eq;

const COMBINED: &str =
    r#"1.2.3.4 - - [10/Oct/2000:13:55:36 -0700] "GET /a HTTP/1.1" 200 123 "-" "Mozilla/5.0""#;

#[test]
fn extracts_combined_log_line() {
    let line = extract(COMBINED).unwrap();

    assert_eq!(
        line,
        LogLine {
            ip: "1.2.3.4",
            ip_key: 16909060,
            status: "200",
            bytes_sent: 123,
            url: "/a",
            user_agent: "Mozilla/5.0",
        }
    );
}

#[test]
fn keeps_spaces_inside_quoted_user_agent() {
    let raw = r#"66.249.66.1 - - [01/Jan/2024:00:00:00 +0000] "GET /robots.txt HTTP/1.1" 404 50 "http://example.com/" "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)""#;

    let line = extract(raw).unwrap();

    assert_eq!(line.url, "/robots.txt");
    assert_eq!(line.status, "404");
    assert_eq!(
        line.user_agent,
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"
    );
}

#[test]
fn absent_user_agent_reads_as_dash() {
    let raw = r#"1.2.3.4 - frank [date] "POST /login HTTP/1.0" 302 0 "-" "-""#;

    let line = extract(raw).unwrap();

    assert_eq!(line.user_agent, "-");
    assert_eq!(line.bytes_sent, 0);
    assert_eq!(line.url, "/login");
}

#[test]
fn escaped_quotes_stay_inside_the_token() {
    let raw = r#"1.2.3.4 - - [date] "GET /q?s=\"x\" HTTP/1.1" 200 10 "-" "agent \"quoted\" here""#;

    let line = extract(raw).unwrap();

    assert_eq!(line.url, r#"/q?s=\"x\""#);
    assert_eq!(line.user_agent, r#"agent \"quoted\" here"#);
}

#[test]
fn trailing_fields_are_ignored() {
    let raw = format!(r#"{COMBINED} "10.0.0.9" rt=0.003"#);

    let line = extract(&raw).unwrap();

    assert_eq!(line.user_agent, "Mozilla/5.0");
}

#[test]
fn short_line_is_rejected() {
    let raw = r#"1.2.3.4 - - [date] "GET /a HTTP/1.1" 200 123"#;

    assert_eq!(extract(raw), Err(MalformedLine::TooFewTokens { found: 7 }));
    assert_eq!(extract(""), Err(MalformedLine::TooFewTokens { found: 0 }));
}

#[test]
fn non_numeric_byte_count_is_rejected() {
    let raw = r#"1.2.3.4 - - [date] "GET /a HTTP/1.1" 304 - "-" "Mozilla/5.0""#;

    assert_eq!(
        extract(raw),
        Err(MalformedLine::InvalidBytes { value: "-".into() })
    );
}

#[test]
fn invalid_ip_is_rejected() {
    let raw = r#"1.2.3.999 - - [date] "GET /a HTTP/1.1" 200 1 "-" "Mozilla/5.0""#;

    assert_eq!(
        extract(raw),
        Err(MalformedLine::InvalidIp(IpParseError::OctetOutOfRange {
            ip: "1.2.3.999".into(),
            octet: "999".into(),
        }))
    );

    let raw = r#"2001:db8::1 - - [date] "GET /a HTTP/1.1" 200 1 "-" "Mozilla/5.0""#;
    assert_eq!(
        extract(raw),
        Err(MalformedLine::InvalidIp(IpParseError::NotDottedQuad {
            ip: "2001:db8::1".into(),
        }))
    );
}

#[test]
fn shifted_layout_is_rejected() {
    // Missing the ident/user columns shifts every following field.
    let raw = r#"1.2.3.4 [date] "GET /a HTTP/1.1" 200 123 "-" "Mozilla/5.0" x y"#;

    assert_eq!(
        extract(raw),
        Err(MalformedLine::UnexpectedToken { field: "ident" })
    );
}

#[test]
fn request_without_target_is_rejected() {
    let raw = r#"1.2.3.4 - - [date] "GARBAGE" 400 0 "-" "-""#;
    assert_eq!(
        extract(raw),
        Err(MalformedLine::MissingRequestTarget {
            request: "GARBAGE".into()
        })
    );

    let raw = r#"1.2.3.4 - - [date] "-" 400 0 "-" "-""#;
    assert_eq!(
        extract(raw),
        Err(MalformedLine::UnexpectedToken { field: "request" })
    );
}
