// ABOUTME: Editable form models for content, projects, and users
// ABOUTME: Convert between records, in-progress edits, and API request bodies

use serde::{Deserialize, Serialize};

use crate::requests::{
    CreateContentRequest, CreateProjectRequest, CreateUserRequest, UpdateContentRequest,
    UpdateProjectRequest, UpdateUserRequest,
};
use crate::types::{Content, ContentStatus, Project, Role, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentForm {
    pub title: String,
    pub description: String,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub tags: Vec<String>,
    pub status: ContentStatus,
    pub priority: Option<i32>,
}

impl ContentForm {
    /// Populate an edit form from an existing record.
    ///
    /// The status is carried over unchanged, including `archived`.
    pub fn from_content(content: &Content) -> Self {
        Self {
            title: content.title.clone(),
            description: content.description.clone(),
            category_id: content.category_id,
            subcategory_id: content.subcategory_id,
            tags: content.tags.clone(),
            status: content.status,
            priority: Some(content.priority),
        }
    }

    /// Changing the category invalidates the chosen subcategory
    pub fn set_category(&mut self, category_id: Option<i64>) {
        if self.category_id != category_id {
            self.subcategory_id = None;
        }
        self.category_id = category_id;
    }

    /// Add a tag; blank and duplicate tags are ignored. Returns whether it was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn to_create_request(&self) -> CreateContentRequest {
        CreateContentRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            tags: self.tags.clone(),
            status: Some(self.status),
            priority: Some(self.priority.unwrap_or(0)),
        }
    }

    pub fn to_update_request(&self) -> UpdateContentRequest {
        UpdateContentRequest {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            tags: Some(self.tags.clone()),
            status: Some(self.status),
            priority: Some(self.priority.unwrap_or(0)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub target: String,
    pub conclusion: Option<String>,
    pub status_id: Option<i64>,
    pub area_id: Option<i64>,
    pub priority: Option<i32>,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            target: project.target.clone(),
            conclusion: project.conclusion.clone(),
            status_id: Some(project.status_id),
            area_id: Some(project.area_id),
            priority: Some(project.priority),
        }
    }

    fn conclusion_value(&self) -> Option<String> {
        self.conclusion
            .as_ref()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
    }

    /// Returns `None` until a status and an area are chosen
    pub fn to_create_request(&self) -> Option<CreateProjectRequest> {
        Some(CreateProjectRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            target: self.target.clone(),
            conclusion: self.conclusion_value(),
            status_id: self.status_id?,
            area_id: self.area_id?,
            priority: self.priority,
        })
    }

    pub fn to_update_request(&self) -> UpdateProjectRequest {
        UpdateProjectRequest {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            target: Some(self.target.clone()),
            conclusion: self.conclusion_value(),
            status_id: self.status_id,
            area_id: self.area_id,
            priority: self.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Creator,
        }
    }
}

impl UserForm {
    /// Edit form for an existing user; the password always starts empty
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role,
        }
    }

    pub fn to_create_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: Some(self.role),
        }
    }

    /// Only fields that differ from `original` are sent; the password only when entered
    pub fn to_update_request(&self, original: &User) -> UpdateUserRequest {
        UpdateUserRequest {
            name: (self.name != original.name).then(|| self.name.clone()),
            email: (self.email != original.email).then(|| self.email.clone()),
            password: (!self.password.trim().is_empty()).then(|| self.password.clone()),
            role: (self.role != original.role).then_some(self.role),
        }
    }
}
