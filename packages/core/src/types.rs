// ABOUTME: Record types mirrored from the remote CMS API
// ABOUTME: Content, projects, users, and the classification entities that categorize them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Treat an explicit `null` array the same as a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Creator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Creator => write!(f, "creator"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "creator" => Ok(Role::Creator),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Lifecycle status of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 3] = [
        ContentStatus::Draft,
        ContentStatus::Published,
        ContentStatus::Archived,
    ];
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentStatus::Draft => write!(f, "draft"),
            ContentStatus::Published => write!(f, "published"),
            ContentStatus::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ContentStatus::Draft),
            "published" => Ok(ContentStatus::Published),
            "archived" => Ok(ContentStatus::Archived),
            other => Err(format!("Unknown content status: {}", other)),
        }
    }
}

/// Minimal `{id, name}` reference embedded in other records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Embedded author / last editor reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<NamedRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub status: ContentStatus,
    pub priority: i32,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<AuthorRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub priority: i32,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A category owns an ordered set of subcategories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subcategories: Vec<Subcategory>,
}

/// Reference data shared by project statuses and project areas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectArea {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    pub priority: i32,
    pub status_id: i64,
    pub area_id: i64,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<AuthorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<ProjectArea>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentHistoryAction {
    Created,
    Updated,
    StatusChanged,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectHistoryAction {
    Created,
    Updated,
    StatusChanged,
    AreaChanged,
    ConclusionAdded,
    Deleted,
}

impl fmt::Display for ContentHistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentHistoryAction::Created => "created",
            ContentHistoryAction::Updated => "updated",
            ContentHistoryAction::StatusChanged => "status_changed",
            ContentHistoryAction::Deleted => "deleted",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ProjectHistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectHistoryAction::Created => "created",
            ProjectHistoryAction::Updated => "updated",
            ProjectHistoryAction::StatusChanged => "status_changed",
            ProjectHistoryAction::AreaChanged => "area_changed",
            ProjectHistoryAction::ConclusionAdded => "conclusion_added",
            ProjectHistoryAction::Deleted => "deleted",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentHistory {
    pub id: i64,
    pub action: ContentHistoryAction,
    pub changes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_data: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user: AuthorRef,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHistory {
    pub id: i64,
    pub action: ProjectHistoryAction,
    pub changes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_data: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user: AuthorRef,
    pub project: Project,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_content_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "Guide",
            "description": "<p>body</p>",
            "categoryId": 1,
            "tags": ["rust"],
            "status": "published",
            "priority": 50,
            "authorId": 3,
            "author": {"id": 3, "name": "Ana", "email": "ana@example.com", "role": "admin"},
            "createdAt": "2024-01-01T10:00:00.000Z",
            "updatedAt": "2024-01-02T10:00:00.000Z"
        }"#;

        let content: Content = serde_json::from_str(json).unwrap();
        assert_eq!(content.id, 7);
        assert_eq!(content.category_id, Some(1));
        assert_eq!(content.subcategory_id, None);
        assert_eq!(content.status, ContentStatus::Published);
        assert_eq!(content.author.unwrap().name, "Ana");
    }

    #[test]
    fn test_category_null_subcategories_become_empty() {
        let json = r#"{"id": 1, "name": "Ops", "isActive": true, "priority": 1, "subcategories": null}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.subcategories.is_empty());

        let json = r#"{"id": 2, "name": "Dev", "isActive": true, "priority": 1}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.subcategories.is_empty());
    }

    #[test]
    fn test_history_action_snake_case() {
        let action: ProjectHistoryAction = serde_json::from_str("\"conclusion_added\"").unwrap();
        assert_eq!(action, ProjectHistoryAction::ConclusionAdded);
        assert_eq!(action.to_string(), "conclusion_added");
    }

    #[test]
    fn test_status_and_role_parse() {
        assert_eq!("Archived".parse::<ContentStatus>(), Ok(ContentStatus::Archived));
        assert!("deleted".parse::<ContentStatus>().is_err());
        assert_eq!("creator".parse::<Role>(), Ok(Role::Creator));
    }
}
