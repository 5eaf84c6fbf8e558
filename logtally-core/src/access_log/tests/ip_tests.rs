use crate::access_log::{IpParseError, ip_to_int};
use pretty_assertions::assert_eq;

#[test]
fn converts_boundary_addresses() {
    assert_eq!(ip_to_int("0.0.0.0").unwrap(), 0);
    assert_eq!(ip_to_int("0.0.0.1").unwrap(), 1);
    assert_eq!(ip_to_int("255.255.255.255").unwrap(), 4294967295);
}

#[test]
fn weights_octets_most_significant_first() {
    assert_eq!(
        ip_to_int("1.2.3.4").unwrap(),
        16777216 + 2 * 65536 + 3 * 256 + 4
    );
    assert_eq!(ip_to_int("10.0.0.1").unwrap(), 167772161);
}

#[test]
fn rejects_out_of_range_octet() {
    assert_eq!(
        ip_to_int("10.0.0.256"),
        Err(IpParseError::OctetOutOfRange {
            ip: "10.0.0.256".into(),
            octet: "256".into(),
        })
    );
}

#[test]
fn rejects_wrong_number_of_octets() {
    for ip in ["10.0.0", "10.0.0.1.5", "", "localhost", "::1"] {
        assert!(
            matches!(ip_to_int(ip), Err(IpParseError::NotDottedQuad { .. })),
            "expected {ip:?} to be rejected"
        );
    }
}

#[test]
fn rejects_signs_and_empty_octets() {
    assert!(ip_to_int("10.+1.0.1").is_err());
    assert!(ip_to_int("10..0.1").is_err());
    assert!(ip_to_int("10.0.0.-1").is_err());
}
