use chrono::{DateTime, Utc};

use crate::domain::entities::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

const STANDARD_PREFIX: &str = "/dashboard";
const PRIVILEGED_PREFIX: &str = "/admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

impl RouteDecision {
    fn redirect(target: &str) -> Self {
        RouteDecision::Redirect(target.to_string())
    }

    /// Path the caller should end up on for a request to `requested`.
    pub fn destination<'a>(&'a self, requested: &'a str) -> &'a str {
        match self {
            RouteDecision::Allow => requested,
            RouteDecision::Redirect(target) => target.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Decides access to `path`. Expired sessions count as signed out.
    pub fn check(&self, path: &str, session: Option<&Session>, now: DateTime<Utc>) -> RouteDecision {
        let session = Session::active(session, now);
        let standard = under_prefix(path, STANDARD_PREFIX);
        let privileged = under_prefix(path, PRIVILEGED_PREFIX);
        let login = path == LOGIN_PATH;

        let decision = match session {
            None if standard || privileged => RouteDecision::redirect(LOGIN_PATH),
            None => RouteDecision::Allow,
            Some(session) if session.is_admin() => {
                if login || standard {
                    RouteDecision::redirect(ADMIN_DASHBOARD_PATH)
                } else {
                    RouteDecision::Allow
                }
            }
            Some(_) if login || privileged => RouteDecision::redirect(DASHBOARD_PATH),
            Some(_) => RouteDecision::Allow,
        };

        if let RouteDecision::Redirect(target) = &decision {
            tracing::debug!(path, target = target.as_str(), "route redirected");
        }
        decision
    }
}

fn under_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}
