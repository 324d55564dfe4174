use async_trait::async_trait;
use cms_api::ApiClient;
use cms_core::{
    ApiResult, Content, ContentHistory, CreateContentRequest, ListParams, UpdateContentRequest,
};

use crate::api::ResourceApi;
use crate::manager::ResourceManager;
use crate::view::ViewSupport;

/// Content endpoints; the list is requested in server order
#[derive(Clone)]
pub struct ContentApi {
    client: ApiClient,
}

impl ContentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn history(&self, id: i64) -> ApiResult<Vec<ContentHistory>> {
        self.client.get_content_history(id).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Content> {
        self.client.get_content_by_id(id).await
    }
}

#[async_trait]
impl ResourceApi for ContentApi {
    type Record = Content;
    type Create = CreateContentRequest;
    type Update = UpdateContentRequest;

    fn resource_name(&self) -> &'static str {
        "content"
    }

    fn views(&self) -> ViewSupport {
        ViewSupport {
            detail: true,
            documentation: true,
        }
    }

    async fn list(&self) -> ApiResult<Vec<Content>> {
        self.client.get_content(&ListParams::default()).await
    }

    async fn create(&self, data: &CreateContentRequest) -> ApiResult<Content> {
        self.client.create_content(data).await
    }

    async fn update(&self, id: i64, data: &UpdateContentRequest) -> ApiResult<Content> {
        self.client.update_content(id, data).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete_content(id).await
    }
}

pub type ContentManager = ResourceManager<ContentApi>;
