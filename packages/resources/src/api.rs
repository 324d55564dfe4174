use async_trait::async_trait;
use cms_core::{ApiResult, Identified};

use crate::view::ViewSupport;

/// CRUD endpoints backing one resource manager
#[async_trait]
pub trait ResourceApi: Send + Sync {
    type Record: Identified + Clone + Send + Sync;
    type Create: Send + Sync;
    type Update: Send + Sync;

    /// Lowercase resource name used in logs and messages
    fn resource_name(&self) -> &'static str;

    fn views(&self) -> ViewSupport {
        ViewSupport::default()
    }

    async fn list(&self) -> ApiResult<Vec<Self::Record>>;

    async fn create(&self, data: &Self::Create) -> ApiResult<Self::Record>;

    async fn update(&self, id: i64, data: &Self::Update) -> ApiResult<Self::Record>;

    async fn delete(&self, id: i64) -> ApiResult<()>;
}
