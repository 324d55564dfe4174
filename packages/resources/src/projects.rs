// ABOUTME: Project bindings for the generic manager and the status/area lookups project screens need
// ABOUTME: Projects are listed by priority, highest first

use async_trait::async_trait;
use cms_api::ApiClient;
use cms_core::{
    ApiResult, CreateProjectRequest, ListParams, OrderBy, OrderDirection, Project, ProjectArea,
    ProjectHistory, ProjectStatus, UpdateProjectRequest,
};
use tracing::debug;

use crate::api::ResourceApi;
use crate::manager::ResourceManager;

fn by_priority() -> ListParams {
    ListParams::ordered(OrderBy::Priority, OrderDirection::Desc)
}

#[derive(Clone)]
pub struct ProjectApi {
    client: ApiClient,
}

impl ProjectApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn history(&self, id: i64) -> ApiResult<Vec<ProjectHistory>> {
        self.client.get_project_history(id).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Project> {
        self.client.get_project(id).await
    }
}

#[async_trait]
impl ResourceApi for ProjectApi {
    type Record = Project;
    type Create = CreateProjectRequest;
    type Update = UpdateProjectRequest;

    fn resource_name(&self) -> &'static str {
        "project"
    }

    async fn list(&self) -> ApiResult<Vec<Project>> {
        self.client.get_projects(&by_priority()).await
    }

    async fn create(&self, data: &CreateProjectRequest) -> ApiResult<Project> {
        self.client.create_project(data).await
    }

    async fn update(&self, id: i64, data: &UpdateProjectRequest) -> ApiResult<Project> {
        self.client.update_project(id, data).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete_project(id).await
    }
}

pub type ProjectManager = ResourceManager<ProjectApi>;

/// Public project statuses and areas, highest priority first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectLookups {
    statuses: Vec<ProjectStatus>,
    areas: Vec<ProjectArea>,
}

impl ProjectLookups {
    pub fn new(statuses: Vec<ProjectStatus>, areas: Vec<ProjectArea>) -> Self {
        Self { statuses, areas }
    }

    /// Fetch statuses and areas concurrently; either failure fails the load
    pub async fn load(client: &ApiClient) -> ApiResult<Self> {
        let params = by_priority();
        let (statuses, areas) = tokio::try_join!(
            client.get_public_project_statuses(&params),
            client.get_public_project_areas(&params)
        )?;
        debug!(
            "Loaded {} project statuses and {} areas",
            statuses.len(),
            areas.len()
        );
        Ok(Self { statuses, areas })
    }

    pub fn statuses(&self) -> &[ProjectStatus] {
        &self.statuses
    }

    pub fn areas(&self) -> &[ProjectArea] {
        &self.areas
    }

    pub fn status(&self, id: i64) -> Option<&ProjectStatus> {
        self.statuses.iter().find(|s| s.id == id)
    }

    pub fn area(&self, id: i64) -> Option<&ProjectArea> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// Prefers the status embedded in the project, then the lookup table
    pub fn status_name<'a>(&'a self, project: &'a Project) -> &'a str {
        project
            .status
            .as_ref()
            .or_else(|| self.status(project.status_id))
            .map_or("Unknown status", |s| s.name.as_str())
    }

    pub fn area_name<'a>(&'a self, project: &'a Project) -> &'a str {
        project
            .area
            .as_ref()
            .or_else(|| self.area(project.area_id))
            .map_or("Unknown area", |a| a.name.as_str())
    }
}
