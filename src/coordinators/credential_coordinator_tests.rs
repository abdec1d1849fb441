use crate::coordinators::CredentialCoordinator;
use crate::coordinators::credential_coordinator::DEFAULT_AVATAR;
use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::test::utils::{authenticated_ctx, setup_test_app_data};
use crate::types::internal::RequestContext;

async fn register_alex(coordinator: &CredentialCoordinator) -> String {
    coordinator
        .register(
            &RequestContext::new(),
            "Alex".to_string(),
            "a@x.com".to_string(),
            "secret1".to_string(),
            None,
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_register_issues_token_for_new_user() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data.clone());

    let token = register_alex(&coordinator).await;

    let claims = app_data.token_provider.validate_jwt(&token).unwrap();
    let user = app_data.user_store.find_by_id(&claims.sub).await.unwrap().unwrap();
    assert_eq!(user.name, "Alex");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.avatar, DEFAULT_AVATAR);
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_register_keeps_supplied_avatar() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data.clone());

    let token = coordinator
        .register(
            &RequestContext::new(),
            "Sam".to_string(),
            "s@x.com".to_string(),
            "secret1".to_string(),
            Some("https://img/sam.png".to_string()),
        )
        .await
        .unwrap();

    let claims = app_data.token_provider.validate_jwt(&token).unwrap();
    let user = app_data.user_store.find_by_id(&claims.sub).await.unwrap().unwrap();
    assert_eq!(user.avatar, "https://img/sam.png");
}

#[tokio::test]
async fn test_blank_avatar_gets_default() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data.clone());

    let token = coordinator
        .register(
            &RequestContext::new(),
            "Sam".to_string(),
            "s@x.com".to_string(),
            "secret1".to_string(),
            Some("  ".to_string()),
        )
        .await
        .unwrap();

    let claims = app_data.token_provider.validate_jwt(&token).unwrap();
    let user = app_data.user_store.find_by_id(&claims.sub).await.unwrap().unwrap();
    assert_eq!(user.avatar, DEFAULT_AVATAR);
}

#[tokio::test]
async fn test_second_registration_with_same_email_conflicts() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data);
    register_alex(&coordinator).await;

    let result = coordinator
        .register(
            &RequestContext::new(),
            "Other".to_string(),
            "a@x.com".to_string(),
            "another1".to_string(),
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::DuplicateEmail { .. }))
    ));
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data.clone());

    let result = coordinator
        .register(
            &RequestContext::new(),
            "Alex".to_string(),
            "a@x.com".to_string(),
            "12345".to_string(),
            None,
        )
        .await;

    match result {
        Err(InternalError::Validation(err)) => {
            assert_eq!(err.violations.len(), 1);
            assert_eq!(err.violations[0].field, "password");
            assert_eq!(
                err.violations[0].message,
                "Please enter a password with 6 or more characters"
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(app_data.user_store.find_by_email("a@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_name_and_email_are_both_reported() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data);

    let result = coordinator
        .register(
            &RequestContext::new(),
            String::new(),
            String::new(),
            "secret1".to_string(),
            None,
        )
        .await;

    match result {
        Err(InternalError::Validation(err)) => {
            let messages: Vec<&str> = err.violations.iter().map(|v| v.message.as_str()).collect();
            assert_eq!(messages, vec!["Name is required", "Please include a valid email"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_returns_token_for_same_user() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data.clone());
    let register_token = register_alex(&coordinator).await;

    let login_token = coordinator
        .login(&RequestContext::new(), "a@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();

    let registered = app_data.token_provider.validate_jwt(&register_token).unwrap();
    let logged_in = app_data.token_provider.validate_jwt(&login_token).unwrap();
    assert_eq!(registered.sub, logged_in.sub);
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data);
    register_alex(&coordinator).await;

    let result = coordinator
        .login(&RequestContext::new(), "a@x.com".to_string(), "wrong-pass".to_string())
        .await;

    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_login_with_unknown_email_fails() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data);

    let result = coordinator
        .login(&RequestContext::new(), "nobody@x.com".to_string(), "secret1".to_string())
        .await;

    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_current_user_resolves_caller() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data.clone());
    let token = register_alex(&coordinator).await;
    let claims = app_data.token_provider.validate_jwt(&token).unwrap();

    let user = coordinator
        .current_user(&authenticated_ctx(&claims.sub))
        .await
        .unwrap();

    assert_eq!(user.id, claims.sub);
    assert_eq!(user.email, "a@x.com");
}

#[tokio::test]
async fn test_current_user_for_deleted_account() {
    let app_data = setup_test_app_data().await;
    let coordinator = CredentialCoordinator::new(app_data);

    let result = coordinator.current_user(&authenticated_ctx("gone")).await;

    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::UserIdNotFound { .. }))
    ));
}
