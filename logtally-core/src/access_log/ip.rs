use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IpParseError {
    #[error("'{ip}' is not a dotted quad")]
    NotDottedQuad { ip: String },

    #[error("octet '{octet}' of '{ip}' is outside 0..=255")]
    OctetOutOfRange { ip: String, octet: String },
}

/// Convert a dotted-quad IPv4 address to `o0*16777216 + o1*65536 + o2*256 + o3`.
pub fn ip_to_int(ip: &str) -> Result<u32, IpParseError> {
    let not_dotted_quad = || IpParseError::NotDottedQuad { ip: ip.to_string() };

    let mut octets = [0u8; 4];
    let mut parts = ip.split('.');

    for slot in octets.iter_mut() {
        let part = parts.next().ok_or_else(not_dotted_quad)?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_dotted_quad());
        }

        *slot = part
            .parse::<u8>()
            .map_err(|_| IpParseError::OctetOutOfRange {
                ip: ip.to_string(),
                octet: part.to_string(),
            })?;
    }

    if parts.next().is_some() {
        return Err(not_dotted_quad());
    }

    Ok(u32::from_be_bytes(octets))
}
