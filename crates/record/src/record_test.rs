//! Tests for export record construction and accessors

use std::collections::BTreeMap;

use chrono::Utc;

use crate::{ExportRecord, RecordError};

fn tags(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn fields(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_valid_record() {
    let now = Utc::now();
    let record = ExportRecord::new(
        "internal_agent",
        tags(&[("host", "node-1")]),
        fields(&[("errors", 2), ("writes", 100)]),
        now,
    )
    .unwrap();

    assert_eq!(record.name(), "internal_agent");
    assert_eq!(record.tags().get("host").map(String::as_str), Some("node-1"));
    assert_eq!(record.field("errors"), Some(2));
    assert_eq!(record.field("writes"), Some(100));
    assert_eq!(record.field("missing"), None);
    assert_eq!(record.field_count(), 2);
    assert_eq!(record.timestamp(), now);
}

#[test]
fn test_empty_name_rejected() {
    let result = ExportRecord::new("", tags(&[]), fields(&[("a", 1)]), Utc::now());
    assert_eq!(result.unwrap_err(), RecordError::EmptyName);
}

#[test]
fn test_reserved_name_rejected() {
    let result = ExportRecord::new("_internal", tags(&[]), fields(&[("a", 1)]), Utc::now());
    assert!(matches!(result.unwrap_err(), RecordError::ReservedName(_)));
}

#[test]
fn test_empty_fields_rejected() {
    let result = ExportRecord::new("m", tags(&[]), fields(&[]), Utc::now());
    assert_eq!(result.unwrap_err(), RecordError::NoFields);
}

#[test]
fn test_empty_field_name_rejected() {
    let result = ExportRecord::new("m", tags(&[]), fields(&[("", 1)]), Utc::now());
    assert_eq!(result.unwrap_err(), RecordError::EmptyFieldName);
}

#[test]
fn test_reserved_field_name_rejected() {
    let result = ExportRecord::new("m", tags(&[]), fields(&[("_hidden", 1)]), Utc::now());
    assert!(matches!(
        result.unwrap_err(),
        RecordError::ReservedFieldName(_)
    ));
}

#[test]
fn test_empty_tags_allowed() {
    let record = ExportRecord::new("m", tags(&[]), fields(&[("a", 1)]), Utc::now()).unwrap();
    assert!(record.tags().is_empty());
}

#[test]
fn test_negative_field_values_allowed() {
    // Gauges can go negative
    let record = ExportRecord::new("m", tags(&[]), fields(&[("drift", -42)]), Utc::now()).unwrap();
    assert_eq!(record.field("drift"), Some(-42));
}

#[test]
fn test_serialize_deterministic() {
    let now = Utc::now();
    let record = ExportRecord::new(
        "m",
        tags(&[("b", "2"), ("a", "1")]),
        fields(&[("z", 26), ("a", 1)]),
        now,
    )
    .unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["name"], "m");
    assert_eq!(parsed["tags"]["a"], "1");
    assert_eq!(parsed["tags"]["b"], "2");
    assert_eq!(parsed["fields"]["a"], 1);
    assert_eq!(parsed["fields"]["z"], 26);

    // BTreeMap serializes in sorted key order
    let a = json.find("\"a\"").unwrap();
    let z = json.find("\"z\"").unwrap();
    assert!(a < z);
}
