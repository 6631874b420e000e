use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::feedback::{Feedback, NewFeedback, DEFAULT_FEEDBACK_TYPE};
use crate::infra::export::csv::{export_feedback_csv, write_feedback_csv};
use crate::usecase::error::{ServiceError, ServiceResult};
use crate::usecase::ports::repo::{RecordStore, RepoError};

pub struct FeedbackService {
    repo: Arc<dyn RecordStore>,
}

impl FeedbackService {
    pub fn new(repo: Arc<dyn RecordStore>) -> Self {
        Self { repo }
    }

    pub fn submit(&self, feedback: &NewFeedback) -> ServiceResult<Feedback> {
        if feedback.message.trim().is_empty() {
            return Err(ServiceError::validation("Message is required"));
        }
        let email = feedback.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(ServiceError::validation("Email address is not valid"));
        }

        let mut normalized = feedback.clone();
        if normalized.feedback_type.trim().is_empty() {
            normalized.feedback_type = DEFAULT_FEEDBACK_TYPE.to_string();
        }

        let stored = self.repo.insert_feedback(&normalized)?;
        tracing::info!(feedback_id = stored.id.as_str(), "feedback submitted");
        Ok(stored)
    }

    /// Newest first.
    pub fn list(&self) -> ServiceResult<Vec<Feedback>> {
        Ok(self.repo.list_feedback()?)
    }

    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        match self.repo.delete_feedback(id) {
            Ok(()) => {
                tracing::info!(feedback_id = id, "feedback deleted");
                Ok(())
            }
            Err(RepoError::NotFound(_)) => Err(ServiceError::NotFound(format!("feedback {id}"))),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes every feedback entry as CSV and returns the row count.
    pub fn export_csv<W: Write>(&self, writer: W) -> ServiceResult<usize> {
        let feedback = self.list()?;
        let rows = write_feedback_csv(writer, &feedback)?;
        tracing::info!(rows, "feedback exported");
        Ok(rows)
    }

    pub fn export_csv_file(&self, path: &Path) -> ServiceResult<usize> {
        let feedback = self.list()?;
        let rows = export_feedback_csv(path, &feedback)?;
        tracing::info!(rows, path = %path.display(), "feedback exported");
        Ok(rows)
    }
}
