//! Tests for the on-disk layout revisions

use std::str::FromStr;

use super::super::format::FormatVersion;
use crate::Error;
use crate::constants::NAME_SIZE;

#[test]
fn test_pad_bytes() {
    assert_eq!(FormatVersion::V1.pad_byte(), b' ');
    assert_eq!(FormatVersion::V2.pad_byte(), 0);
}

#[test]
fn test_shape_order_flags() {
    assert!(!FormatVersion::V1.shape_reversed());
    assert!(FormatVersion::V2.shape_reversed());
}

#[test]
fn test_v1_name_slot_is_space_padded() {
    let slot = FormatVersion::V1.name_slot("rho");

    assert_eq!(slot.len(), NAME_SIZE);
    assert_eq!(&slot[..3], b"rho");
    assert_eq!(slot[3], 0);
    assert!(slot[4..].iter().all(|&b| b == b' '));
}

#[test]
fn test_v2_name_slot_is_null_padded() {
    let slot = FormatVersion::V2.name_slot("rho");

    assert_eq!(&slot[..3], b"rho");
    assert!(slot[3..].iter().all(|&b| b == 0));
}

#[test]
fn test_name_slot_exact_fit() {
    let name = "abcdefghijklmno";
    assert_eq!(name.len(), NAME_SIZE - 1);

    let slot = FormatVersion::V1.name_slot(name);
    assert_eq!(&slot[..NAME_SIZE - 1], name.as_bytes());
    assert_eq!(slot[NAME_SIZE - 1], 0);
}

#[test]
fn test_long_name_is_truncated() {
    let slot = FormatVersion::V2.name_slot("pressure_gradient_x1");

    assert_eq!(&slot[..NAME_SIZE - 1], b"pressure_gradie");
    assert_eq!(slot[NAME_SIZE - 1], 0);
}

#[test]
fn test_from_str() {
    assert_eq!(FormatVersion::from_str("v1").unwrap(), FormatVersion::V1);
    assert_eq!(FormatVersion::from_str("V1").unwrap(), FormatVersion::V1);
    assert_eq!(FormatVersion::from_str("1").unwrap(), FormatVersion::V1);
    assert_eq!(FormatVersion::from_str("v2").unwrap(), FormatVersion::V2);
    assert_eq!(FormatVersion::from_str(" 2 ").unwrap(), FormatVersion::V2);
}

#[test]
fn test_from_str_rejects_unknown_revisions() {
    let err = FormatVersion::from_str("v3").unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("unknown revision 'v3'"));
}

#[test]
fn test_display_round_trips() {
    for version in [FormatVersion::V1, FormatVersion::V2] {
        let rendered = version.to_string();
        assert_eq!(FormatVersion::from_str(&rendered).unwrap(), version);
    }
}

#[test]
fn test_serde_names() {
    assert_eq!(serde_json::to_string(&FormatVersion::V2).unwrap(), "\"v2\"");
    let parsed: FormatVersion = serde_json::from_str("\"v1\"").unwrap();
    assert_eq!(parsed, FormatVersion::V1);
}
