use cms_core::{
    ApiResult, CreateClassificationRequest, CreateProjectRequest, ListParams, Project,
    ProjectArea, ProjectHistory, ProjectStatus, UpdateProjectRequest,
};

use crate::client::ApiClient;
use crate::endpoints;

impl ApiClient {
    /// Projects, optionally narrowed by `status_id`/`area_id` in `params`
    pub async fn get_projects(&self, params: &ListParams) -> ApiResult<Vec<Project>> {
        self.get(endpoints::projects::ALL, Some(params)).await
    }

    pub async fn get_project(&self, id: i64) -> ApiResult<Project> {
        self.get(&endpoints::projects::by_id(id), None).await
    }

    pub async fn create_project(&self, request: &CreateProjectRequest) -> ApiResult<Project> {
        self.post(endpoints::projects::ALL, request).await
    }

    pub async fn update_project(
        &self,
        id: i64,
        request: &UpdateProjectRequest,
    ) -> ApiResult<Project> {
        self.patch(&endpoints::projects::by_id(id), request).await
    }

    pub async fn delete_project(&self, id: i64) -> ApiResult<()> {
        self.delete(&endpoints::projects::by_id(id)).await
    }

    pub async fn get_project_history(&self, id: i64) -> ApiResult<Vec<ProjectHistory>> {
        self.get(&endpoints::projects::history(id), None).await
    }

    pub async fn get_user_project_history(&self, user_id: i64) -> ApiResult<Vec<ProjectHistory>> {
        self.get(&endpoints::projects::user_history(user_id), None)
            .await
    }

    pub async fn get_my_project_history(&self) -> ApiResult<Vec<ProjectHistory>> {
        self.get(endpoints::projects::MY_HISTORY, None).await
    }

    pub async fn get_project_statuses(&self, params: &ListParams) -> ApiResult<Vec<ProjectStatus>> {
        self.get(endpoints::project_statuses::ALL, Some(params))
            .await
    }

    pub async fn get_public_project_statuses(
        &self,
        params: &ListParams,
    ) -> ApiResult<Vec<ProjectStatus>> {
        self.get(endpoints::project_statuses::PUBLIC, Some(params))
            .await
    }

    pub async fn create_project_status(
        &self,
        request: &CreateClassificationRequest,
    ) -> ApiResult<ProjectStatus> {
        self.post(endpoints::project_statuses::ALL, request).await
    }

    pub async fn get_project_areas(&self, params: &ListParams) -> ApiResult<Vec<ProjectArea>> {
        self.get(endpoints::project_areas::ALL, Some(params)).await
    }

    pub async fn get_public_project_areas(
        &self,
        params: &ListParams,
    ) -> ApiResult<Vec<ProjectArea>> {
        self.get(endpoints::project_areas::PUBLIC, Some(params))
            .await
    }

    pub async fn create_project_area(
        &self,
        request: &CreateClassificationRequest,
    ) -> ApiResult<ProjectArea> {
        self.post(endpoints::project_areas::ALL, request).await
    }
}
