use chrono::{DateTime, Utc};

use crate::domain::entities::account::Role;

/// The signed-in principal, obtained once at sign-in and passed explicitly
/// to whatever needs the role claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub principal_id: String,
    pub email: String,
    pub role: Role,
    pub expiry: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiry
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_privileged()
    }

    /// The session when it is still live at `now`.
    pub fn active(session: Option<&Session>, now: DateTime<Utc>) -> Option<&Session> {
        session.filter(|session| !session.is_expired(now))
    }
}
