use std::path::PathBuf;

use crate::domain::entities::account::{AccountRequest, NewAccountRequest};
use crate::domain::entities::credential::PasswordDigest;
use crate::domain::entities::feedback::{Feedback, NewFeedback};
use crate::domain::entities::incident::{IncidentReport, NewIncidentReport};
use crate::infra::sqlite::queries::{
    delete_account_request, delete_feedback, delete_incident, find_account_request_by_email,
    get_account_request, get_incident, insert_account_request, insert_feedback, insert_incident,
    list_account_requests, list_feedback, list_incidents,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{RecordStore, RepoError};

pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl SqliteRepo {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

fn require_deleted(affected: usize, id: &str) -> Result<(), RepoError> {
    if affected == 0 {
        Err(RepoError::NotFound(id.to_string()))
    } else {
        Ok(())
    }
}

impl RecordStore for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(RepoError::from_anyhow)
    }

    fn insert_incident(
        &self,
        user_id: Option<&str>,
        report: &NewIncidentReport,
    ) -> Result<IncidentReport, RepoError> {
        insert_incident(&self.db_path, user_id, report).map_err(RepoError::from_anyhow)
    }

    fn list_incidents(&self) -> Result<Vec<IncidentReport>, RepoError> {
        list_incidents(&self.db_path, None).map_err(RepoError::from_anyhow)
    }

    fn list_incidents_by_user(&self, user_id: &str) -> Result<Vec<IncidentReport>, RepoError> {
        list_incidents(&self.db_path, Some(user_id)).map_err(RepoError::from_anyhow)
    }

    fn get_incident(&self, id: &str) -> Result<Option<IncidentReport>, RepoError> {
        get_incident(&self.db_path, id).map_err(RepoError::from_anyhow)
    }

    fn delete_incident(&self, id: &str) -> Result<(), RepoError> {
        let affected = delete_incident(&self.db_path, id).map_err(RepoError::from_anyhow)?;
        require_deleted(affected, id)
    }

    fn insert_feedback(&self, feedback: &NewFeedback) -> Result<Feedback, RepoError> {
        insert_feedback(&self.db_path, feedback).map_err(RepoError::from_anyhow)
    }

    fn list_feedback(&self) -> Result<Vec<Feedback>, RepoError> {
        list_feedback(&self.db_path).map_err(RepoError::from_anyhow)
    }

    fn delete_feedback(&self, id: &str) -> Result<(), RepoError> {
        let affected = delete_feedback(&self.db_path, id).map_err(RepoError::from_anyhow)?;
        require_deleted(affected, id)
    }

    fn insert_account_request(
        &self,
        request: &NewAccountRequest,
        password: &PasswordDigest,
    ) -> Result<AccountRequest, RepoError> {
        insert_account_request(&self.db_path, request, password).map_err(RepoError::from_anyhow)
    }

    fn list_account_requests(&self) -> Result<Vec<AccountRequest>, RepoError> {
        list_account_requests(&self.db_path).map_err(RepoError::from_anyhow)
    }

    fn get_account_request(&self, id: &str) -> Result<Option<AccountRequest>, RepoError> {
        get_account_request(&self.db_path, id).map_err(RepoError::from_anyhow)
    }

    fn find_account_request_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountRequest>, RepoError> {
        find_account_request_by_email(&self.db_path, email).map_err(RepoError::from_anyhow)
    }

    fn delete_account_request(&self, id: &str) -> Result<(), RepoError> {
        let affected =
            delete_account_request(&self.db_path, id).map_err(RepoError::from_anyhow)?;
        require_deleted(affected, id)
    }
}
