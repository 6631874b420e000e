use std::path::PathBuf;

use chrono::{Duration, Utc};

use crate::domain::entities::account::{NewUser, UserProfile};
use crate::domain::entities::session::Session;
use crate::infra::sqlite::queries::{
    delete_user, find_user_by_email, get_user, insert_user, list_users, load_credentials,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::identity::{AuthError, IdentityService};

/// Local identity provider over the `users` table.
pub struct SqliteIdentity {
    pub db_path: PathBuf,
    pub session_ttl: Duration,
}

impl SqliteIdentity {
    pub fn new(db_path: impl Into<PathBuf>, session_ttl: Duration) -> Self {
        Self {
            db_path: db_path.into(),
            session_ttl,
        }
    }

    fn issue(&self, profile: &UserProfile) -> Session {
        Session {
            principal_id: profile.id.clone(),
            email: profile.email.clone(),
            role: profile.role,
            expiry: Utc::now() + self.session_ttl,
        }
    }
}

impl IdentityService for SqliteIdentity {
    fn init(&self) -> Result<(), AuthError> {
        init_db(&self.db_path).map_err(AuthError::from_anyhow)
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let credentials =
            load_credentials(&self.db_path, email).map_err(AuthError::from_anyhow)?;
        match credentials {
            Some((profile, digest)) if digest.verify(password) => Ok(self.issue(&profile)),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    fn refresh(&self, session: &Session) -> Result<Session, AuthError> {
        if session.is_expired(Utc::now()) {
            return Err(AuthError::SessionExpired);
        }
        let profile = get_user(&self.db_path, &session.principal_id)
            .map_err(AuthError::from_anyhow)?
            .ok_or_else(|| AuthError::UserNotFound(session.principal_id.clone()))?;
        Ok(self.issue(&profile))
    }

    fn create_user(&self, user: NewUser) -> Result<UserProfile, AuthError> {
        let existing =
            find_user_by_email(&self.db_path, &user.email).map_err(AuthError::from_anyhow)?;
        if existing.is_some() {
            return Err(AuthError::EmailTaken(user.email.trim().to_string()));
        }
        insert_user(&self.db_path, &user).map_err(AuthError::from_anyhow)
    }

    fn list_users(&self) -> Result<Vec<UserProfile>, AuthError> {
        list_users(&self.db_path).map_err(AuthError::from_anyhow)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, AuthError> {
        find_user_by_email(&self.db_path, email).map_err(AuthError::from_anyhow)
    }

    fn delete_user(&self, id: &str) -> Result<(), AuthError> {
        let affected = delete_user(&self.db_path, id).map_err(AuthError::from_anyhow)?;
        if affected == 0 {
            return Err(AuthError::UserNotFound(id.to_string()));
        }
        Ok(())
    }
}
