use cms_core::{
    ApiResult, Content, ContentHistory, CreateContentRequest, ListParams, UpdateContentRequest,
};

use crate::client::ApiClient;
use crate::endpoints;

impl ApiClient {
    pub async fn get_content(&self, params: &ListParams) -> ApiResult<Vec<Content>> {
        self.get(endpoints::content::ALL, Some(params)).await
    }

    pub async fn get_content_by_id(&self, id: i64) -> ApiResult<Content> {
        self.get(&endpoints::content::by_id(id), None).await
    }

    pub async fn create_content(&self, request: &CreateContentRequest) -> ApiResult<Content> {
        self.post(endpoints::content::ALL, request).await
    }

    pub async fn update_content(
        &self,
        id: i64,
        request: &UpdateContentRequest,
    ) -> ApiResult<Content> {
        self.patch(&endpoints::content::by_id(id), request).await
    }

    pub async fn delete_content(&self, id: i64) -> ApiResult<()> {
        self.delete(&endpoints::content::by_id(id)).await
    }

    pub async fn get_content_history(&self, id: i64) -> ApiResult<Vec<ContentHistory>> {
        self.get(&endpoints::content::history(id), None).await
    }

    /// Changes made by one user across all content
    pub async fn get_user_content_history(&self, user_id: i64) -> ApiResult<Vec<ContentHistory>> {
        self.get(&endpoints::content::user_history(user_id), None)
            .await
    }

    /// Changes made by the signed-in user
    pub async fn get_my_content_history(&self) -> ApiResult<Vec<ContentHistory>> {
        self.get(endpoints::content::MY_HISTORY, None).await
    }
}
