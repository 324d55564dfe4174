use async_trait::async_trait;
use cms_auth::AuthGateway;
use cms_core::{ApiResult, LoginRequest, LoginResponse, RegisterRequest};

use crate::client::ApiClient;
use crate::endpoints;

impl ApiClient {
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.post(endpoints::auth::LOGIN, credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<LoginResponse> {
        self.post(endpoints::auth::REGISTER, request).await
    }
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        ApiClient::login(self, credentials).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<LoginResponse> {
        ApiClient::register(self, request).await
    }
}
