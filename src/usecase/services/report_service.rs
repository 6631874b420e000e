use std::sync::Arc;

use crate::domain::entities::incident::{IncidentReport, NewIncidentReport};
use crate::domain::entities::session::Session;
use crate::domain::table::calendar::parse_calendar_date;
use crate::usecase::error::{ServiceError, ServiceResult};
use crate::usecase::ports::repo::{RecordStore, RepoError};

pub struct ReportService {
    repo: Arc<dyn RecordStore>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn RecordStore>) -> Self {
        Self { repo }
    }

    pub fn submit(
        &self,
        session: &Session,
        report: &NewIncidentReport,
    ) -> ServiceResult<IncidentReport> {
        let report = report.resolved();
        validate_report(&report)?;
        let stored = self
            .repo
            .insert_incident(Some(session.principal_id.as_str()), &report)?;
        tracing::info!(
            report_id = stored.id.as_str(),
            user_id = session.principal_id.as_str(),
            kind = stored.incident_type.as_str(),
            "incident report submitted"
        );
        Ok(stored)
    }

    pub fn list_all(&self) -> ServiceResult<Vec<IncidentReport>> {
        Ok(self.repo.list_incidents()?)
    }

    /// Reports the signed-in resident filed.
    pub fn list_for(&self, session: &Session) -> ServiceResult<Vec<IncidentReport>> {
        Ok(self.repo.list_incidents_by_user(&session.principal_id)?)
    }

    /// Residents may only open their own reports; admins may open any.
    pub fn get(&self, session: &Session, id: &str) -> ServiceResult<IncidentReport> {
        let report = self
            .repo
            .get_incident(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("incident report {id}")))?;
        let owns = report.user_id.as_deref() == Some(session.principal_id.as_str());
        if !session.is_admin() && !owns {
            return Err(ServiceError::Unauthorized(format!("incident report {id}")));
        }
        Ok(report)
    }

    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        match self.repo.delete_incident(id) {
            Ok(()) => {
                tracing::info!(report_id = id, "incident report deleted");
                Ok(())
            }
            Err(RepoError::NotFound(_)) => {
                Err(ServiceError::NotFound(format!("incident report {id}")))
            }
            Err(err) => Err(err.into()),
        }
    }
}

pub fn validate_report(report: &NewIncidentReport) -> ServiceResult<()> {
    let required = [
        ("Full name", report.full_name.as_str()),
        ("Incident type", report.incident_type.as_str()),
        ("Description", report.description.as_str()),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(ServiceError::validation(format!("{label} is required")));
        }
    }

    if parse_calendar_date(&report.datetime).is_none() {
        return Err(ServiceError::validation(
            "Date and time of the incident is required",
        ));
    }

    let contact = report.contact_number.trim();
    let contact_ok = contact
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    if !contact_ok {
        return Err(ServiceError::validation(
            "Contact number may only contain digits",
        ));
    }

    Ok(())
}
