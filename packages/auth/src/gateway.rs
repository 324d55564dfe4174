use async_trait::async_trait;
use cms_core::{ApiResult, LoginRequest, LoginResponse, RegisterRequest};

/// Remote endpoints the authentication state machine depends on
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse>;

    async fn register(&self, request: &RegisterRequest) -> ApiResult<LoginResponse>;
}
