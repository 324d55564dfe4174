// ABOUTME: Tests for the authentication state machine
// ABOUTME: Uses a mocked gateway to verify the validation gate and session persistence

use std::sync::Arc;

use async_trait::async_trait;
use cms_auth::{AuthGateway, AuthManager, MemorySessionStore, SessionStore, SharedSession};
use cms_core::{ApiError, ApiResult, LoginRequest, LoginResponse, RegisterRequest, Role, User};
use mockall::mock;
use pretty_assertions::assert_eq;

mock! {
    pub Gateway {}

    #[async_trait]
    impl AuthGateway for Gateway {
        async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse>;
        async fn register(&self, request: &RegisterRequest) -> ApiResult<LoginResponse>;
    }
}

fn sample_user() -> User {
    User {
        id: 1,
        name: "Ana".to_string(),
        email: "a@b.com".to_string(),
        role: Role::Creator,
        created_at: None,
        updated_at: None,
    }
}

fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn memory_session() -> (Arc<MemorySessionStore>, SharedSession) {
    let store = Arc::new(MemorySessionStore::new());
    let shared: SharedSession = store.clone();
    (store, shared)
}

#[tokio::test]
async fn test_login_success_persists_token_and_user() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_login()
        .withf(|c| c.email == "a@b.com" && c.password == "secret1")
        .times(1)
        .returning(|_| {
            Ok(LoginResponse {
                access_token: "T".to_string(),
                user: sample_user(),
            })
        });

    let (store, session) = memory_session();
    let mut manager = AuthManager::new(gateway, session);
    manager.init();

    assert!(manager.login(credentials("a@b.com", "secret1")).await);
    assert!(manager.is_authenticated());
    assert_eq!(manager.user(), Some(&sample_user()));
    assert_eq!(store.token().as_deref(), Some("T"));
    assert_eq!(store.user(), Some(sample_user()));
    assert!(!manager.state().is_loading);
}

#[tokio::test]
async fn test_invalid_credentials_never_reach_gateway() {
    let mut gateway = MockGateway::new();
    gateway.expect_login().never();

    let (store, session) = memory_session();
    let mut manager = AuthManager::new(gateway, session);
    manager.init();

    assert!(!manager.login(credentials("not-an-email", "secret1")).await);
    assert!(manager.state().error.is_some());

    assert!(!manager.login(credentials("a@b.com", "12345")).await);
    assert!(!manager.is_authenticated());
    assert!(store.token().is_none());
}

#[tokio::test]
async fn test_login_failure_surfaces_server_message() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_login()
        .times(1)
        .returning(|_| Err(ApiError::http(401, "Invalid credentials")));

    let (store, session) = memory_session();
    let mut manager = AuthManager::new(gateway, session);
    manager.init();

    assert!(!manager.login(credentials("a@b.com", "secret1")).await);
    assert_eq!(manager.state().error.as_deref(), Some("Invalid credentials"));
    assert!(!manager.is_authenticated());
    assert!(store.token().is_none());

    manager.clear_error();
    assert!(manager.state().error.is_none());
}

#[tokio::test]
async fn test_failed_login_signs_out_restored_session() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_login()
        .times(1)
        .returning(|_| Err(ApiError::http(401, "Invalid credentials")));

    let store = Arc::new(MemorySessionStore::with_token("T", Some(sample_user())));
    let mut manager = AuthManager::new(gateway, store as SharedSession);
    manager.init();
    assert!(manager.is_authenticated());

    assert!(!manager.login(credentials("a@b.com", "secret1")).await);
    assert!(!manager.is_authenticated());
    assert!(manager.user().is_none());
    assert!(!manager.state().is_loading);
    assert_eq!(manager.state().error.as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn test_failed_register_signs_out_restored_session() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_register()
        .times(1)
        .returning(|_| Err(ApiError::http(409, "Email already registered")));

    let store = Arc::new(MemorySessionStore::with_token("T", Some(sample_user())));
    let mut manager = AuthManager::new(gateway, store as SharedSession);
    manager.init();

    let request = RegisterRequest {
        name: "Ana".to_string(),
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
        role: None,
    };
    assert!(!manager.register(request).await);
    assert!(!manager.is_authenticated());
    assert!(manager.user().is_none());
    assert_eq!(
        manager.state().error.as_deref(),
        Some("Email already registered")
    );
}

#[test]
fn test_init_restores_complete_session() {
    let store = Arc::new(MemorySessionStore::with_token("T", Some(sample_user())));
    let mut manager = AuthManager::new(MockGateway::new(), store.clone() as SharedSession);

    assert!(manager.state().is_loading);
    manager.init();

    assert!(!manager.state().is_loading);
    assert!(manager.is_authenticated());
    assert_eq!(manager.user().map(|u| u.id), Some(1));
}

#[test]
fn test_init_discards_token_without_user() {
    let store = Arc::new(MemorySessionStore::with_token("T", None));
    let mut manager = AuthManager::new(MockGateway::new(), store.clone() as SharedSession);

    manager.init();

    assert!(!manager.is_authenticated());
    assert!(store.token().is_none());
}

#[tokio::test]
async fn test_register_validates_then_signs_in() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_register()
        .times(1)
        .returning(|_| {
            Ok(LoginResponse {
                access_token: "R".to_string(),
                user: sample_user(),
            })
        });

    let (store, session) = memory_session();
    let mut manager = AuthManager::new(gateway, session);
    manager.init();

    let invalid = RegisterRequest {
        name: " ".to_string(),
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
        role: None,
    };
    assert!(!manager.register(invalid).await);

    let valid = RegisterRequest {
        name: "Ana".to_string(),
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
        role: None,
    };
    assert!(manager.register(valid).await);
    assert_eq!(store.token().as_deref(), Some("R"));
}

#[tokio::test]
async fn test_logout_clears_session_locally() {
    let mut gateway = MockGateway::new();
    gateway.expect_login().returning(|_| {
        Ok(LoginResponse {
            access_token: "T".to_string(),
            user: User {
                role: Role::Admin,
                ..sample_user()
            },
        })
    });

    let (store, session) = memory_session();
    let mut manager = AuthManager::new(gateway, session);
    manager.init();
    assert!(manager.login(credentials("a@b.com", "secret1")).await);
    assert!(manager.is_admin());

    manager.logout();

    assert!(!manager.is_authenticated());
    assert!(!manager.is_admin());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}
