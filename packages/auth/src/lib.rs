// ABOUTME: Session context and authentication state for the CMS console
// ABOUTME: Token and user persistence behind an explicit store, plus the login/logout state machine

pub mod error;
pub mod gateway;
pub mod manager;
pub mod session;

// Re-export main types
pub use error::{SessionError, SessionResult};
pub use gateway::AuthGateway;
pub use manager::{AuthManager, AuthState};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SharedSession};
