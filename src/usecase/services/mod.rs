pub mod account_service;
pub mod auth_service;
pub mod dashboard_service;
pub mod feedback_service;
pub mod form_service;
pub mod report_service;
