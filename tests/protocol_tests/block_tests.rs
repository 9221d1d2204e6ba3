//! Stats / List Decoder Tests

use stalkwire::protocol::{parse_list, parse_stats, ResponseError};
use stalkwire::{JobStats, TubeStats};

const FIELDS: &[&str] = &["current-jobs-ready", "total-jobs"];

// =============================================================================
// parse_stats
// =============================================================================

#[test]
fn test_parse_stats_known_field() {
    let mut slots = [0u64; 2];
    parse_stats(b"---\ncurrent-jobs-ready: 4\n", FIELDS, &mut slots, None).unwrap();
    assert_eq!(slots, [4, 0]);
}

#[test]
fn test_parse_stats_ignores_unknown_fields() {
    let mut slots = [0u64; 2];
    let data = b"---\nbrand-new-field: 12\ncurrent-jobs-ready: 4\ntotal-jobs: 9\n";
    parse_stats(data, FIELDS, &mut slots, None).unwrap();
    assert_eq!(slots, [4, 9]);
}

#[test]
fn test_parse_stats_text_callback() {
    let mut slots = [0u64; 2];
    let mut seen = Vec::new();
    let mut on_text = |name: &str, value: &str| seen.push((name.to_string(), value.to_string()));

    let data = b"---\nversion: 1.13\ntotal-jobs: 3\nhostname: box\n";
    parse_stats(data, FIELDS, &mut slots, Some(&mut on_text)).unwrap();

    assert_eq!(slots, [0, 3]);
    assert_eq!(
        seen,
        vec![
            ("version".to_string(), "1.13".to_string()),
            ("hostname".to_string(), "box".to_string()),
        ]
    );
}

#[test]
fn test_parse_stats_value_may_contain_separator() {
    let mut slots = [0u64; 2];
    let mut value = String::new();
    let mut on_text = |_: &str, v: &str| value = v.to_string();

    parse_stats(b"---\nos: a: b\n", FIELDS, &mut slots, Some(&mut on_text)).unwrap();
    assert_eq!(value, "a: b");
}

#[test]
fn test_parse_stats_empty_block() {
    let mut slots = [0u64; 2];
    parse_stats(b"---\n", FIELDS, &mut slots, None).unwrap();
    parse_stats(b"", FIELDS, &mut slots, None).unwrap();
    assert_eq!(slots, [0, 0]);
}

#[test]
fn test_parse_stats_bad_number() {
    let mut slots = [0u64; 2];
    let result = parse_stats(b"---\ntotal-jobs: -1\n", FIELDS, &mut slots, None);
    assert_eq!(
        result,
        Err(ResponseError::UnknownResponse("total-jobs: -1".to_string()))
    );
}

#[test]
fn test_parse_stats_line_without_separator() {
    let mut slots = [0u64; 2];
    let result = parse_stats(b"---\ntotal-jobs 3\n", FIELDS, &mut slots, None);
    assert_eq!(
        result,
        Err(ResponseError::UnknownResponse("total-jobs 3".to_string()))
    );
}

#[test]
fn test_parse_stats_unterminated_last_line() {
    let mut slots = [0u64; 2];
    let result = parse_stats(b"---\ntotal-jobs: 3\npid: 1", FIELDS, &mut slots, None);
    assert_eq!(
        result,
        Err(ResponseError::UnknownResponse("pid: 1".to_string()))
    );
}

// =============================================================================
// Typed Records
// =============================================================================

#[test]
fn test_job_stats_decode() {
    let s = JobStats::decode(b"---\nid: 3\ntube: mail\nstate: buried\nburies: 1\nfuture: x\n")
        .unwrap();
    assert_eq!(s.id, 3);
    assert_eq!(s.tube, "mail");
    assert_eq!(s.state, "buried");
    assert_eq!(s.buries, 1);
    assert_eq!(s.kicks, 0);
}

#[test]
fn test_tube_stats_field_table() {
    assert_eq!(TubeStats::NUMERIC_FIELDS.len(), 13);
    assert_eq!(TubeStats::NUMERIC_FIELDS[0], "current-jobs-urgent");
    assert!(!TubeStats::NUMERIC_FIELDS.contains(&"name"));
}

// =============================================================================
// parse_list
// =============================================================================

#[test]
fn test_parse_list() {
    let list = parse_list(Some(&b"---\n- 1\n- 2\n"[..]));
    assert_eq!(list, Some(vec!["1".to_string(), "2".to_string()]));
}

#[test]
fn test_parse_list_single() {
    let list = parse_list(Some(&b"---\n- default\n"[..]));
    assert_eq!(list, Some(vec!["default".to_string()]));
}

#[test]
fn test_parse_list_empty() {
    assert_eq!(parse_list(Some(&b""[..])), Some(vec![]));
}

#[test]
fn test_parse_list_nil() {
    assert_eq!(parse_list(None), None);
}
