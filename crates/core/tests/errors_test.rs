use std::error::Error;

use checkits_core::errors::{CheckItsError, CheckItsResult};

#[test]
fn test_error_display() {
    let not_found = CheckItsError::NotFound("Meeting not found".to_string());
    let validation = CheckItsError::Validation("Invalid input".to_string());
    let database = CheckItsError::Database(eyre::eyre!("Database connection failed"));
    let internal = CheckItsError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Meeting not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let error = CheckItsError::Internal(Box::new(io_error));

    assert!(error.source().is_some());
}

#[test]
fn test_result_alias() {
    let result: CheckItsResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: CheckItsResult<i32> = Err(CheckItsError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("Database error");
    let error = CheckItsError::Database(report);

    assert!(error.to_string().contains("Database error"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let error = CheckItsError::Internal(boxed);

    assert!(error.to_string().contains("IO error"));
}
