// ABOUTME: Session context shared by the API client and the authentication state machine
// ABOUTME: The bearer token and signed-in user live behind an explicitly passed store

mod file;
mod memory;

use std::sync::Arc;

use cms_core::User;
use serde::{Deserialize, Serialize};

use crate::error::SessionResult;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Persistent key-value storage for the session token and user.
///
/// Readers call `token()` on every request, so a rotation takes effect on
/// the next call rather than on calls already in flight.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;

    fn user(&self) -> Option<User>;

    /// Persist both the token and the user
    fn store(&self, token: &str, user: &User) -> SessionResult<()>;

    /// Drop the token but keep any stored user
    fn clear_token(&self) -> SessionResult<()>;

    /// Drop everything
    fn clear(&self) -> SessionResult<()>;
}

pub type SharedSession = Arc<dyn SessionStore>;

/// On-disk and in-memory shape of a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl SessionRecord {
    pub fn is_empty(&self) -> bool {
        self.auth_token.is_none() && self.user.is_none()
    }
}
