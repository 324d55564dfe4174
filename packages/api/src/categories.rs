use cms_core::{
    ApiResult, Category, CreateCategoryRequest, CreateSubcategoryRequest, ListParams, Subcategory,
    UpdateCategoryRequest, UpdateSubcategoryRequest,
};

use crate::client::ApiClient;
use crate::endpoints;

impl ApiClient {
    /// Admin listing, including inactive categories unless `active` is set
    pub async fn get_categories(&self, params: &ListParams) -> ApiResult<Vec<Category>> {
        self.get(endpoints::categories::ALL, Some(params)).await
    }

    /// Active categories with their subcategories, available to every user
    pub async fn get_public_categories(&self, params: &ListParams) -> ApiResult<Vec<Category>> {
        self.get(endpoints::categories::PUBLIC, Some(params)).await
    }

    pub async fn get_category(&self, id: i64) -> ApiResult<Category> {
        self.get(&endpoints::categories::by_id(id), None).await
    }

    pub async fn create_category(&self, request: &CreateCategoryRequest) -> ApiResult<Category> {
        self.post(endpoints::categories::ALL, request).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        request: &UpdateCategoryRequest,
    ) -> ApiResult<Category> {
        self.patch(&endpoints::categories::by_id(id), request).await
    }

    pub async fn delete_category(&self, id: i64) -> ApiResult<()> {
        self.delete(&endpoints::categories::by_id(id)).await
    }

    pub async fn get_subcategories(&self, params: &ListParams) -> ApiResult<Vec<Subcategory>> {
        self.get(endpoints::subcategories::ALL, Some(params)).await
    }

    pub async fn get_subcategory(&self, id: i64) -> ApiResult<Subcategory> {
        self.get(&endpoints::subcategories::by_id(id), None).await
    }

    pub async fn create_subcategory(
        &self,
        request: &CreateSubcategoryRequest,
    ) -> ApiResult<Subcategory> {
        self.post(endpoints::subcategories::ALL, request).await
    }

    pub async fn update_subcategory(
        &self,
        id: i64,
        request: &UpdateSubcategoryRequest,
    ) -> ApiResult<Subcategory> {
        self.patch(&endpoints::subcategories::by_id(id), request).await
    }

    pub async fn delete_subcategory(&self, id: i64) -> ApiResult<()> {
        self.delete(&endpoints::subcategories::by_id(id)).await
    }
}
