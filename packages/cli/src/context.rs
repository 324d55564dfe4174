// ABOUTME: Per-invocation wiring of config, session store and API client
// ABOUTME: Commands borrow the client and session from here instead of reaching for globals

use std::sync::Arc;

use cms_api::ApiClient;
use cms_auth::{AuthManager, FileSessionStore, SharedSession};
use cms_config::ApiConfig;
use cms_core::{Role, User};
use tracing::debug;

use crate::error::{CliError, CliResult};

pub struct AppContext {
    pub config: ApiConfig,
    pub session: SharedSession,
    pub client: ApiClient,
}

impl AppContext {
    pub fn from_env() -> CliResult<Self> {
        let config = ApiConfig::from_env()?;
        Ok(Self::with_config(config))
    }

    /// Session persisted at `config.session_path`
    pub fn with_config(config: ApiConfig) -> Self {
        let session: SharedSession = Arc::new(FileSessionStore::new(config.session_path.clone()));
        Self::with_session(config, session)
    }

    pub fn with_session(config: ApiConfig, session: SharedSession) -> Self {
        debug!("Using API at {}", config.base_url);
        let client = ApiClient::new(config.clone(), session.clone());
        Self {
            config,
            session,
            client,
        }
    }

    pub fn auth_manager(&self) -> AuthManager<ApiClient> {
        let mut manager = AuthManager::new(self.client.clone(), self.session.clone());
        manager.init();
        manager
    }

    /// The signed-in user, as restored from the session store
    pub fn require_login(&self) -> CliResult<User> {
        let manager = self.auth_manager();
        manager.user().cloned().ok_or(CliError::NotLoggedIn)
    }

    pub fn require_admin(&self) -> CliResult<User> {
        let user = self.require_login()?;
        if user.role != Role::Admin {
            return Err(CliError::AdminRequired);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_auth::{MemorySessionStore, SessionStore};

    fn user(role: Role) -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_require_login_without_session() {
        let ctx = AppContext::with_session(ApiConfig::default(), Arc::new(MemorySessionStore::new()));
        assert!(matches!(ctx.require_login(), Err(CliError::NotLoggedIn)));
    }

    #[test]
    fn test_require_admin_checks_role() {
        let store = Arc::new(MemorySessionStore::new());
        store.store("T", &user(Role::Creator)).unwrap();
        let ctx = AppContext::with_session(ApiConfig::default(), store.clone());
        assert_eq!(ctx.require_login().unwrap().id, 1);
        assert!(matches!(ctx.require_admin(), Err(CliError::AdminRequired)));

        store.store("T", &user(Role::Admin)).unwrap();
        assert!(ctx.require_admin().is_ok());
    }

    #[test]
    fn test_file_session_follows_config_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = ApiConfig {
            session_path: temp_dir.path().join("session.toml"),
            ..ApiConfig::default()
        };
        let ctx = AppContext::with_config(config);
        ctx.session.store("T", &user(Role::Admin)).unwrap();

        assert!(temp_dir.path().join("session.toml").exists());
        assert_eq!(ctx.client.session().token().as_deref(), Some("T"));
    }
}
