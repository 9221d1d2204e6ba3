//! Status-Line Parser Tests
//!
//! Tests for matching response headers against an expected word.

use stalkwire::protocol::{parse_size, parse_uint, scan, ResponseError};

fn unknown(line: &str) -> ResponseError {
    ResponseError::UnknownResponse(line.to_string())
}

// =============================================================================
// parse_uint
// =============================================================================

#[test]
fn test_parse_uint() {
    assert_eq!(parse_uint("0"), Some(0));
    assert_eq!(parse_uint("42"), Some(42));
    assert_eq!(parse_uint("18446744073709551615"), Some(u64::MAX));
}

#[test]
fn test_parse_uint_rejects() {
    assert_eq!(parse_uint(""), None);
    assert_eq!(parse_uint("+1"), None);
    assert_eq!(parse_uint("-1"), None);
    assert_eq!(parse_uint("1a"), None);
    assert_eq!(parse_uint(" 1"), None);
    assert_eq!(parse_uint("18446744073709551616"), None);
}

// =============================================================================
// scan
// =============================================================================

#[test]
fn test_scan_no_args() {
    assert_eq!(scan("DELETED", "DELETED", 0), Ok(vec![]));
}

#[test]
fn test_scan_captures_args() {
    assert_eq!(scan("INSERTED 1", "INSERTED", 1), Ok(vec![1]));
    assert_eq!(scan("RESERVED 5 12", "RESERVED", 2), Ok(vec![5, 12]));
    assert_eq!(
        scan("X 1 2 3 4 5", "X", 5),
        Ok(vec![1, 2, 3, 4, 5])
    );
}

#[test]
fn test_scan_error_word_is_classified() {
    assert_eq!(scan("NOT_FOUND", "DELETED", 0), Err(ResponseError::NotFound));
    assert_eq!(scan("TIMED_OUT", "RESERVED", 1), Err(ResponseError::TimedOut));
    assert_eq!(
        scan("OUT_OF_MEMORY", "INSERTED", 1),
        Err(ResponseError::OutOfMemory)
    );
}

#[test]
fn test_scan_other_word_is_unknown() {
    assert_eq!(scan("FOUND 1", "INSERTED", 1), Err(unknown("FOUND 1")));
}

#[test]
fn test_scan_word_must_end_at_token_boundary() {
    // "OKAY" shares a prefix with "OK" but is not it
    assert_eq!(scan("OKAY", "OK", 0), Err(unknown("OKAY")));
}

#[test]
fn test_scan_missing_arg() {
    assert_eq!(scan("INSERTED", "INSERTED", 1), Err(unknown("INSERTED")));
}

#[test]
fn test_scan_extra_arg() {
    assert_eq!(scan("KICKED 1", "KICKED", 0), Err(unknown("KICKED 1")));
    assert_eq!(scan("INSERTED 1 2", "INSERTED", 1), Err(unknown("INSERTED 1 2")));
}

#[test]
fn test_scan_malformed_arg() {
    assert_eq!(scan("INSERTED x", "INSERTED", 1), Err(unknown("INSERTED x")));
    assert_eq!(scan("INSERTED -1", "INSERTED", 1), Err(unknown("INSERTED -1")));
    assert_eq!(scan("INSERTED  1", "INSERTED", 1), Err(unknown("INSERTED  1")));
    assert_eq!(scan("INSERTED 1 ", "INSERTED", 1), Err(unknown("INSERTED 1 ")));
}

// =============================================================================
// parse_size
// =============================================================================

#[test]
fn test_parse_size() {
    assert_eq!(parse_size("FOUND 1 3"), Ok(("FOUND 1", 3)));
    assert_eq!(parse_size("OK 0"), Ok(("OK", 0)));
    assert_eq!(parse_size("RESERVED 10 65535"), Ok(("RESERVED 10", 65535)));
}

#[test]
fn test_parse_size_without_length_is_classified() {
    assert_eq!(parse_size("NOT_FOUND"), Err(ResponseError::NotFound));
    assert_eq!(parse_size("GARBAGE"), Err(unknown("GARBAGE")));
}

#[test]
fn test_parse_size_bad_length() {
    assert_eq!(parse_size("FOUND 1 x"), Err(unknown("FOUND 1 x")));
    assert_eq!(parse_size("FOUND 1 -3"), Err(unknown("FOUND 1 -3")));
    assert_eq!(parse_size("FOUND 1 "), Err(unknown("FOUND 1 ")));
}

#[test]
fn test_parse_size_overflow() {
    // Larger than isize::MAX
    assert_eq!(
        parse_size("OK 9223372036854775808"),
        Err(unknown("OK 9223372036854775808"))
    );
}
