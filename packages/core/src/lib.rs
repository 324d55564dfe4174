// ABOUTME: Core record types, request models, and client-side rules for the CMS console
// ABOUTME: Foundational package shared by the auth, api, resources, and cli packages

pub mod constants;
pub mod error;
pub mod forms;
pub mod listing;
pub mod requests;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    AuthorRef, Category, Content, ContentHistory, ContentHistoryAction, ContentStatus, NamedRef,
    Project, ProjectArea, ProjectHistory, ProjectHistoryAction, ProjectStatus, Role, Subcategory,
    User,
};

pub use requests::{
    CreateCategoryRequest, CreateClassificationRequest, CreateContentRequest,
    CreateProjectRequest, CreateSubcategoryRequest, CreateUserRequest, ListParams, LoginRequest,
    LoginResponse, MessageResponse, OrderBy, OrderDirection, RegisterRequest, UpdateCategoryRequest,
    UpdateContentRequest, UpdateProjectRequest, UpdateSubcategoryRequest, UpdateUserRequest,
};

// Re-export constants
pub use constants::{cms_dir, session_file, DEFAULT_API_BASE_URL};

pub use error::{ApiError, ApiResult};
pub use forms::{ContentForm, ProjectForm, UserForm};
pub use listing::{sort_records, ContentFilter, ProjectFilter, SortDirection, SortKey, Sortable};
pub use utils::{is_blank, truncate};
pub use validation::{
    validate_content_form, validate_login, validate_project_form, validate_user_form,
    ValidationError,
};

/// Anything with a server-assigned numeric identifier.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Content {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Project {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}
