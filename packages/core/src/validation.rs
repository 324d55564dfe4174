use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::forms::{ContentForm, ProjectForm, UserForm};
use crate::requests::LoginRequest;
use crate::utils::is_blank;

/// Minimum accepted password length for login and user forms
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Client-side validation failure for a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn check_email(email: &str, errors: &mut Vec<ValidationError>) {
    if is_blank(email) {
        errors.push(ValidationError::new("email", "Email is required"));
    } else if !is_valid_email(email) {
        errors.push(ValidationError::new("email", "Email is not valid"));
    }
}

fn check_password_length(password: &str, errors: &mut Vec<ValidationError>) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(ValidationError::new(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
}

/// Validates login credentials before any request is made
pub fn validate_login(credentials: &LoginRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_email(&credentials.email, &mut errors);

    if is_blank(&credentials.password) {
        errors.push(ValidationError::new("password", "Password is required"));
    } else {
        check_password_length(&credentials.password, &mut errors);
    }

    errors
}

pub fn validate_content_form(form: &ContentForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&form.title) {
        errors.push(ValidationError::new("title", "Title is required"));
    }

    if is_blank(&form.description) {
        errors.push(ValidationError::new("description", "Description is required"));
    }

    match form.category_id {
        None => errors.push(ValidationError::new("categoryId", "Category is required")),
        Some(_) if form.subcategory_id.is_none() => {
            errors.push(ValidationError::new("subcategoryId", "Subcategory is required"))
        }
        Some(_) => {}
    }

    match form.priority {
        Some(priority) if (1..=100).contains(&priority) => {}
        _ => errors.push(ValidationError::new(
            "priority",
            "Priority must be between 1 and 100",
        )),
    }

    errors
}

pub fn validate_project_form(form: &ProjectForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&form.title) {
        errors.push(ValidationError::new("title", "Title is required"));
    }

    if is_blank(&form.description) {
        errors.push(ValidationError::new("description", "Description is required"));
    }

    if is_blank(&form.target) {
        errors.push(ValidationError::new("target", "Target is required"));
    }

    if form.status_id.is_none() {
        errors.push(ValidationError::new("statusId", "Status is required"));
    }

    if form.area_id.is_none() {
        errors.push(ValidationError::new("areaId", "Area is required"));
    }

    errors
}

/// Validates a user form; the password is optional when editing
pub fn validate_user_form(form: &UserForm, is_editing: bool) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&form.name) {
        errors.push(ValidationError::new("name", "Name is required"));
    }

    check_email(&form.email, &mut errors);

    if is_blank(&form.password) {
        if !is_editing {
            errors.push(ValidationError::new("password", "Password is required"));
        }
    } else {
        check_password_length(&form.password, &mut errors);
    }

    errors
}
