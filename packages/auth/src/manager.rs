// ABOUTME: Authentication state machine for the CMS console
// ABOUTME: Derives signed-in state from the session store and drives login, registration and logout

use cms_core::{
    validate_login, validate_user_form, ApiError, LoginRequest, LoginResponse, RegisterRequest,
    Role, User, UserForm,
};
use tracing::{debug, info, warn};

use crate::gateway::AuthGateway;
use crate::session::SharedSession;

/// Observable authentication state
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True until `init()` has inspected the stored session, and while a login is in flight
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }
}

pub struct AuthManager<G: AuthGateway> {
    gateway: G,
    session: SharedSession,
    state: AuthState,
}

impl<G: AuthGateway> AuthManager<G> {
    pub fn new(gateway: G, session: SharedSession) -> Self {
        Self {
            gateway,
            session,
            state: AuthState::default(),
        }
    }

    /// Derive the initial state from the stored session.
    ///
    /// Both a token and a user must be present; a lone token is treated as a
    /// corrupt session and discarded.
    pub fn init(&mut self) {
        let token = self.session.token();
        let user = self.session.user();

        match (token, user) {
            (Some(_), Some(user)) => {
                debug!("Restored session for user {}", user.id);
                self.state.user = Some(user);
                self.state.is_authenticated = true;
            }
            (Some(_), None) => {
                warn!("Discarding stored token without a stored user");
                if let Err(e) = self.session.clear_token() {
                    warn!("Failed to clear orphaned token: {}", e);
                }
                self.state.user = None;
                self.state.is_authenticated = false;
            }
            (None, _) => {
                self.state.user = None;
                self.state.is_authenticated = false;
            }
        }

        self.state.is_loading = false;
    }

    /// Sign in. Invalid credentials are rejected before any request is made.
    pub async fn login(&mut self, credentials: LoginRequest) -> bool {
        let errors = validate_login(&credentials);
        if !errors.is_empty() {
            self.state.error = Some(ApiError::Validation(errors).to_string());
            return false;
        }

        self.state.is_loading = true;
        self.state.error = None;

        let result = self.gateway.login(&credentials).await;
        let succeeded = self.accept_login(result);
        if succeeded {
            info!("Logged in as {}", credentials.email);
        }
        succeeded
    }

    /// Create an account and sign in with it
    pub async fn register(&mut self, request: RegisterRequest) -> bool {
        let form = UserForm {
            name: request.name.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
            role: request.role.unwrap_or(Role::Creator),
        };
        let errors = validate_user_form(&form, false);
        if !errors.is_empty() {
            self.state.error = Some(ApiError::Validation(errors).to_string());
            return false;
        }

        self.state.is_loading = true;
        self.state.error = None;

        let result = self.gateway.register(&request).await;
        let succeeded = self.accept_login(result);
        if succeeded {
            info!("Registered {}", request.email);
        }
        succeeded
    }

    fn accept_login(&mut self, result: Result<LoginResponse, ApiError>) -> bool {
        self.state.is_loading = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("Authentication failed: {}", e);
                self.state.user = None;
                self.state.is_authenticated = false;
                self.state.error = Some(e.to_string());
                return false;
            }
        };

        if let Err(e) = self.session.store(&response.access_token, &response.user) {
            warn!("Failed to persist session: {}", e);
            self.state.error = Some(e.to_string());
            return false;
        }

        self.state.user = Some(response.user);
        self.state.is_authenticated = true;
        true
    }

    /// Forget the local session. The token stays valid server-side until it expires.
    pub fn logout(&mut self) {
        if let Err(e) = self.session.clear() {
            warn!("Failed to clear session: {}", e);
        }
        self.state.user = None;
        self.state.is_authenticated = false;
        self.state.error = None;
        info!("Logged out");
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.state.user.as_ref().map(|u| u.role), Some(Role::Admin))
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }
}
