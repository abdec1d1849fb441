use crate::errors::AuthError;
use crate::errors::internal::{CredentialError, FieldViolation, InternalError, ValidationError};
use sea_orm::DbErr;

#[test]
fn test_database_error_converts_to_internal_server_error() {
    let db_err = DbErr::RecordNotFound("test".to_string());
    let internal_err = InternalError::database("find_user_by_email", db_err);
    let auth_err = AuthError::from_internal_error(internal_err);

    assert!(matches!(auth_err, AuthError::InternalError(_)));
    assert_eq!(auth_err.message(), "An internal error occurred");
}

#[test]
fn test_crypto_error_converts_to_internal_server_error() {
    let internal_err = InternalError::crypto("argon2_init", "invalid secret");
    let auth_err = AuthError::from_internal_error(internal_err);

    assert_eq!(auth_err.message(), "An internal error occurred");
}

#[test]
fn test_invalid_credentials_converts_correctly() {
    let internal_err = InternalError::Credential(CredentialError::InvalidCredentials);
    let auth_err = AuthError::from_internal_error(internal_err);

    assert!(matches!(auth_err, AuthError::InvalidCredentials(_)));
    assert_eq!(auth_err.message(), "Invalid credentials");
}

#[test]
fn test_invalid_token_converts_correctly() {
    let internal_err = InternalError::Credential(CredentialError::invalid_token("signature invalid"));
    let auth_err = AuthError::from_internal_error(internal_err);

    assert!(matches!(auth_err, AuthError::InvalidToken(_)));
}

#[test]
fn test_missing_token_subject_is_invalid_token() {
    let internal_err = InternalError::Credential(CredentialError::UserIdNotFound {
        user_id: "gone".to_string(),
    });
    let auth_err = AuthError::from_internal_error(internal_err);

    assert!(matches!(auth_err, AuthError::InvalidToken(_)));
}

#[test]
fn test_expired_token_converts_correctly() {
    let internal_err = InternalError::Credential(CredentialError::ExpiredToken);
    let auth_err = AuthError::from_internal_error(internal_err);

    assert!(matches!(auth_err, AuthError::ExpiredToken(_)));
    assert_eq!(auth_err.message(), "Token has expired");
}

#[test]
fn test_validation_error_reports_first_violation() {
    let internal_err = InternalError::Validation(ValidationError {
        violations: vec![
            FieldViolation {
                field: "email".to_string(),
                message: "Please include a valid email".to_string(),
            },
            FieldViolation {
                field: "password".to_string(),
                message: "Password is required".to_string(),
            },
        ],
    });
    let auth_err = AuthError::from_internal_error(internal_err);

    match auth_err {
        AuthError::ValidationFailed(json) => {
            assert_eq!(json.0.message, "Please include a valid email");
            assert_eq!(json.0.status_code, 400);
            assert_eq!(json.0.errors.len(), 2);
        }
        other => panic!("expected ValidationFailed, got {:?}", other),
    }
}
