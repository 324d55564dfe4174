// ABOUTME: HTTP gateway client for the CMS API
// ABOUTME: One method per REST endpoint, sharing header injection and error normalization

pub mod client;
pub mod endpoints;

mod auth;
mod categories;
mod content;
mod projects;
mod users;

pub use client::ApiClient;
