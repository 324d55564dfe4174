use std::sync::RwLock;

use cms_core::User;

use super::{SessionRecord, SessionStore};
use crate::error::SessionResult;

/// Process-local session store, used by tests and one-shot invocations
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<SessionRecord>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already present, optionally alongside a user
    pub fn with_token(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            inner: RwLock::new(SessionRecord {
                auth_token: Some(token.into()),
                user,
            }),
        }
    }

    /// Replace only the token, as a token rotation would
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.auth_token = Some(token.into());
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.auth_token.clone()
    }

    fn user(&self) -> Option<User> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.user.clone()
    }

    fn store(&self, token: &str, user: &User) -> SessionResult<()> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.auth_token = Some(token.to_string());
        guard.user = Some(user.clone());
        Ok(())
    }

    fn clear_token(&self) -> SessionResult<()> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.auth_token = None;
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = SessionRecord::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_core::Role;

    fn user() -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::Admin,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemorySessionStore::new();
        assert!(store.token().is_none());

        store.store("T", &user()).unwrap();
        assert_eq!(store.token().as_deref(), Some("T"));
        assert_eq!(store.user(), Some(user()));

        store.clear_token().unwrap();
        assert!(store.token().is_none());
        assert!(store.user().is_some());

        store.clear().unwrap();
        assert!(store.user().is_none());
    }

    #[test]
    fn test_set_token_rotates_in_place() {
        let store = MemorySessionStore::with_token("old", None);
        store.set_token("new");
        assert_eq!(store.token().as_deref(), Some("new"));
    }
}
