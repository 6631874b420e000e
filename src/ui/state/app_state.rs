use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use dioxus::prelude::{use_signal, ReadableExt, Signal, WritableExt};

use crate::config::AppConfig;
use crate::domain::entities::session::Session;
use crate::domain::routing::{DASHBOARD_PATH, LOGIN_PATH};
use crate::infra::blob::FsBlobStore;
use crate::infra::sqlite::{SqliteIdentity, SqliteRepo};
use crate::usecase::ports::blob::BlobStore;
use crate::usecase::ports::identity::IdentityService;
use crate::usecase::ports::repo::RecordStore;
use crate::usecase::services::account_service::AccountService;
use crate::usecase::services::auth_service::AuthService;
use crate::usecase::services::dashboard_service::DashboardService;
use crate::usecase::services::feedback_service::FeedbackService;
use crate::usecase::services::form_service::FormService;
use crate::usecase::services::report_service::ReportService;

/// Every service the pages talk to, wired over one set of stores.
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthService>,
    pub reports: Arc<ReportService>,
    pub feedback: Arc<FeedbackService>,
    pub accounts: Arc<AccountService>,
    pub forms: Arc<FormService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Opens the stores named by `config`, creates the schema and seeds
    /// the bootstrap admin when one is configured.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let repo: Arc<dyn RecordStore> = Arc::new(SqliteRepo::new(config.db_path.clone()));
        let identity: Arc<dyn IdentityService> = Arc::new(SqliteIdentity::new(
            config.db_path.clone(),
            config.session_ttl(),
        ));
        let blobs: Arc<dyn BlobStore> = Arc::new(FsBlobStore::new(config.blob_dir.clone()));

        repo.init()?;
        identity.init()?;

        let services = Self::from_parts(repo, identity, blobs);
        services.auth.ensure_admin_seed(config)?;
        tracing::info!(
            db = %config.db_path.display(),
            blobs = %config.blob_dir.display(),
            "services ready"
        );
        Ok(services)
    }

    pub fn from_parts(
        repo: Arc<dyn RecordStore>,
        identity: Arc<dyn IdentityService>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(identity.clone())),
            reports: Arc::new(ReportService::new(repo.clone())),
            feedback: Arc::new(FeedbackService::new(repo.clone())),
            accounts: Arc::new(AccountService::new(repo.clone(), identity)),
            forms: Arc::new(FormService::new(blobs)),
            dashboard: Arc::new(DashboardService::new(repo)),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<Option<Session>>,
    pub route: Signal<String>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(|| None::<Session>),
            route: use_signal(|| LOGIN_PATH.to_string()),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}

impl AppState {
    /// Moves to `path`, or to wherever the route guard sends the current
    /// session. A live session is refreshed on the way; a dead one is dropped.
    pub fn navigate(mut self, services: &AppServices, path: &str) {
        let current = self.session.read().clone();
        let live = match Session::active(current.as_ref(), Utc::now()) {
            Some(session) => match services.auth.refresh(session) {
                Ok(refreshed) => Some(refreshed),
                Err(err) => {
                    tracing::warn!(error = %err, "session refresh failed");
                    None
                }
            },
            None => None,
        };
        if live.is_none() && current.is_some() {
            self.status.set("Your session has ended. Please sign in again.".to_string());
        }
        self.session.set(live.clone());

        let decision = services.auth.check_route(path, live.as_ref());
        self.route.set(decision.destination(path).to_string());
    }

    pub fn sign_in(mut self, services: &AppServices, session: Session) {
        self.status.set(format!("Signed in as {}", session.email));
        self.session.set(Some(session));
        self.navigate(services, DASHBOARD_PATH);
    }

    pub fn sign_out(mut self, services: &AppServices) {
        self.session.set(None);
        self.status.set("Signed out".to_string());
        self.navigate(services, LOGIN_PATH);
    }

    pub fn report(mut self, message: impl Into<String>) {
        self.status.set(message.into());
    }
}
