// ABOUTME: End-to-end tests of the resource bindings against a mock CMS API
// ABOUTME: Covers request ordering, catalog fallback, concurrent lookups and the users view set

use std::sync::Arc;

use cms_api::ApiClient;
use cms_auth::MemorySessionStore;
use cms_config::ApiConfig;
use cms_core::{CreateUserRequest, Role};
use cms_resources::{
    CategoryCatalog, ContentApi, DeleteOutcome, ProjectApi, ProjectLookups, ResourceManager,
    UserApi, ViewMode,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig::with_base_url(server.uri()).unwrap();
    ApiClient::new(config, Arc::new(MemorySessionStore::with_token("T", None)))
}

fn project_json(id: i64, title: &str, priority: i32) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "desc",
        "target": "Q3",
        "priority": priority,
        "statusId": 1,
        "areaId": 2,
        "authorId": 1,
        "createdAt": "2024-03-01T10:00:00Z",
        "updatedAt": "2024-03-02T10:00:00Z"
    })
}

fn user_json(id: i64, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "email": format!("{}@example.com", name), "role": "creator" })
}

#[tokio::test]
async fn test_project_manager_requests_priority_desc() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("orderBy", "priority"))
        .and(query_param("orderDirection", "DESC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            project_json(2, "High", 90),
            project_json(1, "Low", 10)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let manager = ResourceManager::open(ProjectApi::new(client_for(&server))).await;

    assert!(manager.error().is_none());
    let ids: Vec<i64> = manager.records().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_content_manager_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/content"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "statusCode": 401,
            "message": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let mut manager = ResourceManager::open(ContentApi::new(client_for(&server))).await;

    assert_eq!(manager.error(), Some("Unauthorized"));
    assert!(manager.records().is_empty());
    assert!(manager.go_to_documentation());
    assert_eq!(manager.view(), ViewMode::Documentation);
}

#[tokio::test]
async fn test_user_manager_create_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(1, "ana")])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json(2, "luis")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "User deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut manager = ResourceManager::open(UserApi::new(client_for(&server))).await;
    let ana = manager.records()[0].clone();
    assert!(!manager.go_to_detail(ana));

    let request = CreateUserRequest {
        name: "luis".to_string(),
        email: "luis@example.com".to_string(),
        password: "secret1".to_string(),
        role: Some(Role::Creator),
    };
    manager.create(&request).await.unwrap();
    let ids: Vec<i64> = manager.records().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let outcome = manager.delete(1, &|_: &str| true).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(manager.records().len(), 1);
}

#[tokio::test]
async fn test_category_catalog_uses_api_when_available() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 10,
            "name": "Cloud",
            "isActive": true,
            "priority": 50,
            "subcategories": null
        }])))
        .mount(&server)
        .await;

    let catalog = CategoryCatalog::load(&client_for(&server)).await;

    assert!(!catalog.is_fallback());
    assert_eq!(catalog.category_name(Some(10)), "Cloud");
    assert!(catalog.subcategories_of(10).is_empty());
}

#[tokio::test]
async fn test_category_catalog_falls_back_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/public"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let catalog = CategoryCatalog::load(&client_for(&server)).await;

    assert!(catalog.is_fallback());
    assert_eq!(catalog.categories().len(), 4);
    assert_eq!(catalog.category_name(Some(4)), "Security");
}

#[tokio::test]
async fn test_project_lookups_load_both_tables() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project-statuses/public"))
        .and(query_param("orderBy", "priority"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Active", "isActive": true, "priority": 10 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/project-areas/public"))
        .and(query_param("orderDirection", "DESC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "name": "Research", "isActive": true, "priority": 5 }
        ])))
        .mount(&server)
        .await;

    let lookups = ProjectLookups::load(&client_for(&server)).await.unwrap();
    let project: cms_core::Project = serde_json::from_value(project_json(1, "P", 1)).unwrap();

    assert_eq!(lookups.status_name(&project), "Active");
    assert_eq!(lookups.area_name(&project), "Research");
}

#[tokio::test]
async fn test_project_lookups_fail_when_either_table_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project-statuses/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/project-areas/public"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&server)
        .await;

    let error = ProjectLookups::load(&client_for(&server)).await.unwrap_err();
    assert_eq!(error.to_string(), "boom");
}
