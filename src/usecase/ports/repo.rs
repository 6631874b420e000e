use thiserror::Error;

use crate::domain::entities::account::{AccountRequest, NewAccountRequest};
use crate::domain::entities::credential::PasswordDigest;
use crate::domain::entities::feedback::{Feedback, NewFeedback};
use crate::domain::entities::incident::{IncidentReport, NewIncidentReport};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{0}")]
    Message(String),
    #[error("record not found: {0}")]
    NotFound(String),
}

impl RepoError {
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        RepoError::Message(format!("{err:#}"))
    }
}

/// Durable storage for the submissions the app manages.
///
/// Reads return the full collection, newest first. Filtering, sorting and
/// paging for display happen in the table engine.
pub trait RecordStore: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn insert_incident(
        &self,
        user_id: Option<&str>,
        report: &NewIncidentReport,
    ) -> Result<IncidentReport, RepoError>;
    fn list_incidents(&self) -> Result<Vec<IncidentReport>, RepoError>;
    fn list_incidents_by_user(&self, user_id: &str) -> Result<Vec<IncidentReport>, RepoError>;
    fn get_incident(&self, id: &str) -> Result<Option<IncidentReport>, RepoError>;
    fn delete_incident(&self, id: &str) -> Result<(), RepoError>;

    fn insert_feedback(&self, feedback: &NewFeedback) -> Result<Feedback, RepoError>;
    fn list_feedback(&self) -> Result<Vec<Feedback>, RepoError>;
    fn delete_feedback(&self, id: &str) -> Result<(), RepoError>;

    fn insert_account_request(
        &self,
        request: &NewAccountRequest,
        password: &PasswordDigest,
    ) -> Result<AccountRequest, RepoError>;
    fn list_account_requests(&self) -> Result<Vec<AccountRequest>, RepoError>;
    fn get_account_request(&self, id: &str) -> Result<Option<AccountRequest>, RepoError>;
    fn find_account_request_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountRequest>, RepoError>;
    fn delete_account_request(&self, id: &str) -> Result<(), RepoError>;
}
