// ABOUTME: Error taxonomy for calls against the CMS API
// ABOUTME: Separates server-reported failures, opaque transport failures, and client-side validation

use thiserror::Error;

use crate::validation::ValidationError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response; the message is the server's, shown verbatim
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejected before any request was made
    #[error("{}", join_validation_messages(.0))]
    Validation(Vec<ValidationError>),
}

fn join_validation_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        ApiError::Network(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        ApiError::InvalidResponse(msg.into())
    }

    /// HTTP status for server-reported failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_server_message_verbatim() {
        let error = ApiError::http(400, "title should not be empty, priority must be a number");
        assert_eq!(
            error.to_string(),
            "title should not be empty, priority must be a number"
        );
        assert_eq!(error.status(), Some(400));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let error = ApiError::Validation(vec![
            ValidationError::new("email", "Email is not valid"),
            ValidationError::new("password", "Password must be at least 6 characters"),
        ]);
        assert_eq!(
            error.to_string(),
            "Email is not valid, Password must be at least 6 characters"
        );
        assert!(error.is_validation());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_classification() {
        assert!(ApiError::http(401, "Unauthorized").is_unauthorized());
        assert!(ApiError::http(404, "Not found").is_not_found());
        assert_eq!(
            ApiError::network("connection refused").to_string(),
            "Network error: connection refused"
        );
    }
}
