pub mod auth;
pub mod content;
pub mod projects;
pub mod reference;
pub mod users;
