#[cfg(test)]
mod tests {
    use crate::errors::internal::{
        CatalogError, CredentialError, FieldViolation, InternalError, ProfileError,
        ValidationError,
    };
    use crate::types::internal::TrailListKind;
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("insert_trail", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("insert_trail"));
        assert!(error_string.contains("Database error"));
    }

    #[test]
    fn test_parse_error_includes_value_type() {
        let error = InternalError::parse("comments", "expected array");

        let error_string = error.to_string();
        assert!(error_string.contains("comments"));
        assert!(error_string.contains("expected array"));
        assert!(error_string.contains("Parse error"));
    }

    #[test]
    fn test_crypto_error_includes_operation() {
        let error = InternalError::crypto("argon2_init", "invalid secret length");

        let error_string = error.to_string();
        assert!(error_string.contains("argon2_init"));
        assert!(error_string.contains("Crypto error"));
    }

    #[test]
    fn test_credential_error_messages() {
        assert_eq!(
            CredentialError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            CredentialError::DuplicateEmail {
                email: "a@x.io".to_string()
            }
            .to_string(),
            "User already exists: a@x.io"
        );
        assert_eq!(
            CredentialError::invalid_token("signature invalid").to_string(),
            "Invalid token: signature invalid"
        );
    }

    #[test]
    fn test_catalog_error_is_transparent() {
        let error: InternalError = CatalogError::CommentNotFound {
            comment_id: "c1".to_string(),
        }
        .into();

        assert_eq!(error.to_string(), "Comment not found: c1");
    }

    #[test]
    fn test_profile_error_public_message_hides_trail_id() {
        let error = ProfileError::NotListed {
            kind: TrailListKind::Bookmarked,
            trail_id: "t1".to_string(),
        };

        assert_eq!(error.to_string(), "Trail not yet bookmarked: t1");
        assert_eq!(error.public_message(), "Trail not yet bookmarked");
    }

    #[test]
    fn test_validation_error_lists_every_field() {
        let error = ValidationError {
            violations: vec![
                FieldViolation {
                    field: "name".to_string(),
                    message: "Name is required".to_string(),
                },
                FieldViolation {
                    field: "location".to_string(),
                    message: "Location is required".to_string(),
                },
            ],
        };

        assert_eq!(
            error.to_string(),
            "Validation failed: name: Name is required, location: Location is required"
        );
    }
}
