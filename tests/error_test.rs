//! Tests for error types

use sprint_analytics::Error;

#[test]
fn test_invalid_argument_error() {
    let error = Error::InvalidArgument("n must be greater than 0".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid argument"));
    assert!(error_str.contains("n must be greater than 0"));
}

#[test]
fn test_invalid_state_error() {
    let error = Error::InvalidState("histogram range collapsed".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid state"));
    assert!(error_str.contains("Please report this issue"));
}

#[test]
fn test_parse_error() {
    let error = Error::ParseError("unrecognized played_at".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Parse error"));
    assert!(error_str.contains("unrecognized played_at"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<u32>("nope").unwrap_err();
    let error: Error = json_error.into();
    assert!(format!("{error}").contains("JSON error"));
}

#[test]
fn test_other_error() {
    let error = Error::Other("custom error message".to_string());
    let error_str = format!("{error}");
    assert_eq!(error_str, "custom error message");
}

#[test]
fn test_error_debug() {
    let error = Error::InvalidState("x".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("InvalidState"));
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> sprint_analytics::Result<i32> {
        Err(Error::Other("test error".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
