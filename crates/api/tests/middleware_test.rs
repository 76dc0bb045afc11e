use checkits_api::middleware::error_handling::{map_error, AppError};
use checkits_core::errors::CheckItsError;

#[tokio::test]
async fn test_error_handling_not_found() {
    // Create a not found error
    let error = CheckItsError::NotFound("Resource not found".to_string());

    // Map the error to a response
    let response = map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    // Create a validation error
    let error = CheckItsError::Validation("Invalid input".to_string());

    // Map the error to a response
    let response = map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_database() {
    // Create a database error
    let error = CheckItsError::Database(eyre::eyre!("Database error"));

    // Map the error to a response
    let response = map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    // Create an internal error
    let error = CheckItsError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    // Map the error to a response
    let response = map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_app_error_from_domain_error() {
    // The ? operator relies on these conversions inside handlers
    let error: AppError = CheckItsError::NotFound("missing".to_string()).into();
    assert!(matches!(error.0, CheckItsError::NotFound(_)));

    let error: AppError = eyre::eyre!("boom").into();
    assert!(matches!(error.0, CheckItsError::Database(_)));
}
