use std::sync::Arc;

use chrono::Utc;

use crate::config::AppConfig;
use crate::domain::entities::account::{NewUser, Role};
use crate::domain::entities::credential::PasswordDigest;
use crate::domain::entities::session::Session;
use crate::domain::routing::{RouteDecision, RouteGuard};
use crate::usecase::error::{ServiceError, ServiceResult};
use crate::usecase::ports::identity::{AuthError, IdentityService};

pub struct AuthService {
    identity: Arc<dyn IdentityService>,
    guard: RouteGuard,
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityService>) -> Self {
        Self {
            identity,
            guard: RouteGuard,
        }
    }

    pub fn sign_in(&self, email: &str, password: &str) -> ServiceResult<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ServiceError::validation("Email and password are required"));
        }
        match self.identity.sign_in(email, password) {
            Ok(session) => {
                tracing::info!(
                    principal = session.principal_id.as_str(),
                    role = %session.role,
                    "signed in"
                );
                Ok(session)
            }
            Err(AuthError::InvalidCredentials) => {
                tracing::warn!("sign-in rejected");
                Err(ServiceError::Unauthorized("invalid email or password".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn refresh(&self, session: &Session) -> ServiceResult<Session> {
        Ok(self.identity.refresh(session)?)
    }

    pub fn check_route(&self, path: &str, session: Option<&Session>) -> RouteDecision {
        self.guard.check(path, session, Utc::now())
    }

    /// Creates the configured bootstrap admin when no admin account exists.
    /// Returns whether an account was created.
    pub fn ensure_admin_seed(&self, config: &AppConfig) -> ServiceResult<bool> {
        let users = self.identity.list_users()?;
        if users.iter().any(|user| user.role == Role::Admin) {
            return Ok(false);
        }
        let Some(seed) = config.admin_seed.as_ref() else {
            tracing::warn!("no admin account exists and no bootstrap admin is configured");
            return Ok(false);
        };

        self.identity.create_user(NewUser {
            email: seed.email.clone(),
            password: PasswordDigest::from_plain(&seed.password),
            first_name: "Administrator".to_string(),
            middle_initial: String::new(),
            last_name: String::new(),
            contact_number: String::new(),
            address: String::new(),
            role: Role::Admin,
        })?;
        tracing::info!(email = seed.email.as_str(), "bootstrap admin created");
        Ok(true)
    }
}
