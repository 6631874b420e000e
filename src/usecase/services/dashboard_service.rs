use std::sync::Arc;

use crate::domain::stats::DashboardStats;
use crate::usecase::error::ServiceResult;
use crate::usecase::ports::repo::RecordStore;

pub struct DashboardService {
    repo: Arc<dyn RecordStore>,
}

impl DashboardService {
    pub fn new(repo: Arc<dyn RecordStore>) -> Self {
        Self { repo }
    }

    pub fn stats(&self) -> ServiceResult<DashboardStats> {
        let reports = self.repo.list_incidents()?;
        let feedback = self.repo.list_feedback()?;
        Ok(DashboardStats::compute(&reports, &feedback))
    }
}
