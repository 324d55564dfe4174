// ABOUTME: Error types for session persistence
// ABOUTME: Covers filesystem failures and session file encoding problems

use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Failed to encode session: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
