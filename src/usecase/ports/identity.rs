use thiserror::Error;

use crate::domain::entities::account::{NewUser, UserProfile};
use crate::domain::entities::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("session expired")]
    SessionExpired,
    #[error("a user with email {0} already exists")]
    EmailTaken(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("{0}")]
    Message(String),
}

impl AuthError {
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        AuthError::Message(format!("{err:#}"))
    }
}

/// Issues sessions carrying a role claim and manages user accounts.
pub trait IdentityService: Send + Sync {
    fn init(&self) -> Result<(), AuthError>;

    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
    /// Extends a live session, re-reading the role claim.
    fn refresh(&self, session: &Session) -> Result<Session, AuthError>;

    fn create_user(&self, user: NewUser) -> Result<UserProfile, AuthError>;
    fn list_users(&self) -> Result<Vec<UserProfile>, AuthError>;
    fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, AuthError>;
    fn delete_user(&self, id: &str) -> Result<(), AuthError>;
}
