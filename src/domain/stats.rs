use std::collections::BTreeMap;

use crate::domain::entities::feedback::Feedback;
use crate::domain::entities::incident::IncidentReport;

pub const LATEST_FEEDBACK_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub report_count: usize,
    pub type_breakdown: BTreeMap<String, usize>,
    pub latest_feedback: Vec<Feedback>,
}

impl DashboardStats {
    /// `feedback` is expected newest first, as the store returns it.
    pub fn compute(reports: &[IncidentReport], feedback: &[Feedback]) -> Self {
        let mut type_breakdown = BTreeMap::new();
        for report in reports {
            let key = match report.incident_type.trim() {
                "" => "Unspecified".to_string(),
                kind => kind.to_string(),
            };
            *type_breakdown.entry(key).or_insert(0) += 1;
        }

        Self {
            report_count: reports.len(),
            type_breakdown,
            latest_feedback: feedback.iter().take(LATEST_FEEDBACK_LIMIT).cloned().collect(),
        }
    }

    /// Share of each type as a percentage, for the breakdown bars.
    pub fn type_shares(&self) -> Vec<(String, usize, f64)> {
        self.type_breakdown
            .iter()
            .map(|(kind, count)| {
                let share = if self.report_count == 0 {
                    0.0
                } else {
                    *count as f64 * 100.0 / self.report_count as f64
                };
                (kind.clone(), *count, share)
            })
            .collect()
    }
}
