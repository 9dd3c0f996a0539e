//! Tests for error types

use ab_convergence::trial::Arm;
use ab_convergence::Error;

#[test]
fn test_invalid_rate_error() {
    let error = Error::InvalidRate { arm: Arm::B, value: 1.5 };
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid configuration"));
    assert!(error_str.contains("arm B"));
    assert!(error_str.contains("1.5"));
    assert!(error.is_invalid_configuration());
}

#[test]
fn test_out_of_range_error() {
    let error = Error::OutOfRange {
        field: "sample_size",
        value: 1001,
        max: 1000,
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("sample_size = 1001"));
    assert!(error_str.contains("maximum of 1000"));
    assert!(error.is_invalid_configuration());
}

#[test]
fn test_out_of_order_error() {
    let error = Error::OutOfOrder {
        expected: 4,
        actual: 6,
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("expected index 4"));
    assert!(error_str.contains("got 6"));
    assert!(!error.is_invalid_configuration());
}

#[test]
fn test_config_parse_error_from_serde() {
    let serde_err = serde_json::from_str::<u32>("-3").unwrap_err();
    let error: Error = serde_err.into();
    assert!(format!("{error}").contains("Config parse error"));
    assert!(error.is_invalid_configuration());
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
    assert!(!error.is_invalid_configuration());
}
