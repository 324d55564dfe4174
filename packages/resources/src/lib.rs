// ABOUTME: Client-side view-state management for content, projects and users
// ABOUTME: One generic manager bound per resource, plus category and project reference data

pub mod api;
pub mod categories;
pub mod confirm;
pub mod content;
pub mod error;
pub mod manager;
pub mod projects;
pub mod users;
pub mod view;

pub use api::ResourceApi;
pub use categories::CategoryCatalog;
pub use confirm::Confirm;
pub use content::{ContentApi, ContentManager};
pub use error::{ManagerError, ManagerResult};
pub use manager::{DeleteOutcome, ResourceManager};
pub use projects::{ProjectApi, ProjectLookups, ProjectManager};
pub use users::{UserApi, UserManager};
pub use view::{Focus, ViewMode, ViewSupport};
