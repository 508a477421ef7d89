//! Session lifecycle: restore, login, register, logout.

use std::sync::Arc;

use api_client::{ClientResult, LendingApi, LoginRequest, RegisterRequest};
use entities::Session;
use tokio::sync::RwLock;
use tracing::info;
use validation::{validate_email, validate_full_name, validate_password, ValidationError};

use crate::admission::{admit, Admission};
use crate::navigation::{Navigator, Route};
use crate::storage::SessionStorage;

/// Fallback message when a login failure carries no detail.
const LOGIN_FALLBACK: &str = "Error al iniciar sesión. Verifica tus credenciales.";

/// Fallback message when a register failure carries no detail.
const REGISTER_FALLBACK: &str = "Error al registrarse. Intenta nuevamente.";

/// Authentication state of the client.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Restoring a persisted session; transient initial state.
    Loading,
    /// No session.
    Unauthenticated,
    /// Logged in.
    Authenticated(Session),
}

/// Field-scoped and form-level errors for the login and register forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormErrors {
    /// Email field error.
    pub email: Option<ValidationError>,
    /// Password field error.
    pub password: Option<ValidationError>,
    /// Full-name field error (register form only).
    pub full_name: Option<ValidationError>,
    /// Form-level message for backend failures.
    pub general: Option<String>,
}

/// The session context object: holds the current identity and role and
/// decides route admission. Injected into views; construct one per app.
pub struct SessionManager {
    api: Arc<dyn LendingApi>,
    storage: SessionStorage,
    navigator: Arc<dyn Navigator>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// Creates a manager in the `Loading` state.
    pub fn new(
        api: Arc<dyn LendingApi>,
        storage: SessionStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            storage,
            navigator,
            state: RwLock::new(SessionState::Loading),
        }
    }

    /// Restores the persisted session, if any.
    ///
    /// A malformed record has already been discarded by the storage layer,
    /// so this resolves to `Unauthenticated` and never returns an error.
    pub async fn initialize(&self) {
        match self.storage.load() {
            Some(session) => {
                self.api.set_token(Some(session.token.clone())).await;
                info!(email = %session.email, "Restored persisted session");
                *self.state.write().await = SessionState::Authenticated(session);
            }
            None => {
                *self.state.write().await = SessionState::Unauthenticated;
            }
        }
    }

    /// Returns a snapshot of the current state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// True while the persisted session is still being restored.
    pub async fn is_loading(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Loading)
    }

    /// The current session, when authenticated.
    pub async fn current(&self) -> Option<Session> {
        match &*self.state.read().await {
            SessionState::Authenticated(session) => Some(session.clone()),
            _ => None,
        }
    }

    /// True iff the current session belongs to an administrator.
    pub async fn is_admin(&self) -> bool {
        self.current().await.map(|s| s.is_admin()).unwrap_or(false)
    }

    /// Decides admission for a protected view against the current state.
    pub async fn admission(&self, require_admin: bool) -> Admission {
        admit(&*self.state.read().await, require_admin)
    }

    /// Authenticates and establishes a session.
    ///
    /// Navigates to the admin view for administrators, otherwise to the
    /// dashboard. On failure the state is left untouched and the error is
    /// returned to the caller for form-level display.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<()> {
        let session = self.api.login(request).await?;
        let is_admin = session.is_admin();
        self.establish(session).await;
        if is_admin {
            self.navigator.navigate(Route::Admin);
        } else {
            self.navigator.navigate(Route::Dashboard);
        }
        Ok(())
    }

    /// Registers a new account and establishes its session.
    ///
    /// Always lands on the dashboard: self-registration as admin is not
    /// exposed.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let session = self.api.register(request).await?;
        self.establish(session).await;
        self.navigator.navigate(Route::Dashboard);
        Ok(())
    }

    /// Validates the login form, then authenticates.
    ///
    /// Field errors block submission without a network call; a backend
    /// failure becomes the form-level message.
    pub async fn submit_login(&self, email: &str, password: &str) -> Result<(), AuthFormErrors> {
        let email_error = validate_email(email).err();
        let password_error = validate_password(password).err();
        if email_error.is_some() || password_error.is_some() {
            return Err(AuthFormErrors {
                email: email_error,
                password: password_error,
                ..Default::default()
            });
        }

        self.login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .map_err(|e| AuthFormErrors {
            general: Some(e.user_message(LOGIN_FALLBACK)),
            ..Default::default()
        })
    }

    /// Validates the register form, then creates the account.
    pub async fn submit_register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), AuthFormErrors> {
        let email_error = validate_email(email).err();
        let password_error = validate_password(password).err();
        let full_name_error = validate_full_name(full_name).err();
        if email_error.is_some() || password_error.is_some() || full_name_error.is_some() {
            return Err(AuthFormErrors {
                email: email_error,
                password: password_error,
                full_name: full_name_error,
                ..Default::default()
            });
        }

        self.register(&RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        })
        .await
        .map_err(|e| AuthFormErrors {
            general: Some(e.user_message(REGISTER_FALLBACK)),
            ..Default::default()
        })
    }

    /// Clears the session unconditionally.
    pub async fn logout(&self) {
        self.storage.clear();
        self.api.set_token(None).await;
        *self.state.write().await = SessionState::Unauthenticated;
        info!("Logged out");
        self.navigator.navigate(Route::Login);
    }

    async fn establish(&self, session: Session) {
        if let Err(e) = self.storage.save(&session) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        info!(email = %session.email, role = ?session.role, "Session established");
        *self.state.write().await = SessionState::Authenticated(session);
    }
}
