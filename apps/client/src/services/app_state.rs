//! Application state shared across views.

use std::sync::Arc;

use api_client::{HttpLendingApi, LendingApi};

use super::{AdminController, DashboardController, SessionManager};
use crate::config::ClientConfig;
use crate::navigation::Navigator;
use crate::storage::SessionStorage;

/// Application state composed at startup and handed to every view.
pub struct AppState {
    /// Backend client shared by the session manager and controllers.
    pub api: Arc<dyn LendingApi>,
    /// Session context injected into views.
    pub session: Arc<SessionManager>,
    /// User dashboard controller.
    pub dashboard: Arc<DashboardController>,
    /// Admin view controller.
    pub admin: Arc<AdminController>,
}

impl AppState {
    /// Creates the application state against the configured backend, with
    /// session storage in the default location.
    pub fn new(config: &ClientConfig, navigator: Arc<dyn Navigator>) -> anyhow::Result<Self> {
        let storage = SessionStorage::new()?;
        let api = Arc::new(HttpLendingApi::new(&config.api_url));
        Ok(Self::with_parts(api, storage, navigator))
    }

    /// Creates the application state from explicit collaborators.
    pub fn with_parts(
        api: Arc<dyn LendingApi>,
        storage: SessionStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session = Arc::new(SessionManager::new(api.clone(), storage, navigator));
        let dashboard = Arc::new(DashboardController::new(api.clone()));
        let admin = Arc::new(AdminController::new(api.clone()));
        Self {
            api,
            session,
            dashboard,
            admin,
        }
    }
}
