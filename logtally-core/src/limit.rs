use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid line limit '{raw}': expected a non-negative integer")]
pub struct InvalidLimit {
    pub raw: String,
}

/// Parse a user-supplied maximum line count.
///
/// Shared by the command line (as a clap value parser) and the HTTP query decoder.
pub fn parse_limit(raw: &str) -> Result<u64, InvalidLimit> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidLimit {
            raw: raw.to_string(),
        });
    }

    trimmed.parse::<u64>().map_err(|_| InvalidLimit {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_integers() {
        assert_eq!(parse_limit("0"), Ok(0));
        assert_eq!(parse_limit("250"), Ok(250));
        assert_eq!(parse_limit(" 7 "), Ok(7));
    }

    #[test]
    fn rejects_negative_and_non_numeric() {
        assert!(parse_limit("-1").is_err());
        assert!(parse_limit("+3").is_err());
        assert!(parse_limit("ten").is_err());
        assert!(parse_limit("").is_err());
    }

    #[test]
    fn rejects_values_past_u64() {
        assert!(parse_limit("18446744073709551616").is_err());
    }
}
