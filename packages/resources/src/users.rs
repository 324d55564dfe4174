use async_trait::async_trait;
use cms_api::ApiClient;
use cms_core::{ApiResult, CreateUserRequest, UpdateUserRequest, User};

use crate::api::ResourceApi;
use crate::manager::ResourceManager;
use crate::view::ViewSupport;

/// User administration endpoints. Users have no detail view.
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceApi for UserApi {
    type Record = User;
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;

    fn resource_name(&self) -> &'static str {
        "user"
    }

    fn views(&self) -> ViewSupport {
        ViewSupport {
            detail: false,
            documentation: false,
        }
    }

    async fn list(&self) -> ApiResult<Vec<User>> {
        self.client.get_users().await
    }

    async fn create(&self, data: &CreateUserRequest) -> ApiResult<User> {
        self.client.create_user(data).await
    }

    async fn update(&self, id: i64, data: &UpdateUserRequest) -> ApiResult<User> {
        self.client.update_user(id, data).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete_user(id).await
    }
}

pub type UserManager = ResourceManager<UserApi>;
