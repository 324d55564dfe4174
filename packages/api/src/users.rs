use cms_core::{ApiResult, CreateUserRequest, UpdateUserRequest, User};

use crate::client::ApiClient;
use crate::endpoints;

impl ApiClient {
    pub async fn get_users(&self) -> ApiResult<Vec<User>> {
        self.get(endpoints::users::ALL, None).await
    }

    pub async fn get_user(&self, id: i64) -> ApiResult<User> {
        self.get(&endpoints::users::by_id(id), None).await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> ApiResult<User> {
        self.post(endpoints::users::ALL, request).await
    }

    pub async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> ApiResult<User> {
        self.patch(&endpoints::users::by_id(id), request).await
    }

    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.delete(&endpoints::users::by_id(id)).await
    }
}
