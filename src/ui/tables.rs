use crate::domain::entities::account::{AccountRequestField, UserField};
use crate::domain::entities::feedback::FeedbackField;
use crate::domain::entities::form_file::FormFileField;
use crate::domain::entities::incident::IncidentField;
use crate::domain::table::{ColumnSpec, TableConfig, TableConfigError};

/// Column layouts of every table the app shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSet {
    pub all_reports: TableConfig<IncidentField>,
    pub my_reports: TableConfig<IncidentField>,
    pub feedback: TableConfig<FeedbackField>,
    pub requests: TableConfig<AccountRequestField>,
    pub users: TableConfig<UserField>,
    pub forms: TableConfig<FormFileField>,
}

impl TableSet {
    pub fn new(page_size: usize) -> Result<Self, TableConfigError> {
        Ok(Self {
            all_reports: TableConfig::new(
                vec![
                    ColumnSpec::new("Reported", IncidentField::CreatedAt),
                    ColumnSpec::new("Name", IncidentField::FullName),
                    ColumnSpec::new("Contact", IncidentField::ContactNumber),
                    ColumnSpec::new("Type", IncidentField::IncidentType),
                    ColumnSpec::new("When", IncidentField::Datetime),
                    ColumnSpec::new("Location", IncidentField::Location),
                    ColumnSpec::new("Description", IncidentField::Description),
                    ColumnSpec::new("Witnesses", IncidentField::HasWitnesses),
                    ColumnSpec::new("Reported to authorities", IncidentField::ReportedToAuthorities),
                    ColumnSpec::new("Damages", IncidentField::DamagesOrInjuries),
                    ColumnSpec::new("Evidence", IncidentField::HasEvidence),
                    ColumnSpec::new("Preferred action", IncidentField::PreferredAction),
                ],
                page_size,
            )?
            .with_date_field(IncidentField::CreatedAt),
            my_reports: TableConfig::new(
                vec![
                    ColumnSpec::new("Reported", IncidentField::CreatedAt),
                    ColumnSpec::new("Type", IncidentField::IncidentType),
                    ColumnSpec::new("When", IncidentField::Datetime),
                    ColumnSpec::new("Location", IncidentField::Location),
                    ColumnSpec::new("Description", IncidentField::Description),
                    ColumnSpec::new("Preferred action", IncidentField::PreferredAction),
                ],
                page_size,
            )?
            .with_date_field(IncidentField::CreatedAt),
            feedback: TableConfig::new(
                vec![
                    ColumnSpec::new("Submitted", FeedbackField::CreatedAt),
                    ColumnSpec::new("Name", FeedbackField::Name),
                    ColumnSpec::new("Email", FeedbackField::Email),
                    ColumnSpec::new("Type", FeedbackField::FeedbackType),
                    ColumnSpec::new("Message", FeedbackField::Message),
                ],
                page_size,
            )?
            .with_date_field(FeedbackField::CreatedAt),
            requests: TableConfig::new(
                vec![
                    ColumnSpec::new("Requested", AccountRequestField::CreatedAt),
                    ColumnSpec::new("Name", AccountRequestField::FullName),
                    ColumnSpec::new("Email", AccountRequestField::Email),
                    ColumnSpec::new("Contact", AccountRequestField::ContactNumber),
                    ColumnSpec::new("Address", AccountRequestField::Address),
                ],
                page_size,
            )?
            .with_date_field(AccountRequestField::CreatedAt),
            users: TableConfig::new(
                vec![
                    ColumnSpec::new("Email", UserField::Email),
                    ColumnSpec::new("Name", UserField::FullName),
                    ColumnSpec::new("Contact", UserField::ContactNumber),
                    ColumnSpec::new("Address", UserField::Address),
                    ColumnSpec::new("Role", UserField::Role),
                    ColumnSpec::new("Created", UserField::CreatedAt),
                ],
                page_size,
            )?
            .with_date_field(UserField::CreatedAt),
            forms: TableConfig::new(
                vec![
                    ColumnSpec::new("File", FormFileField::Name),
                    ColumnSpec::new("Size (bytes)", FormFileField::Size),
                    ColumnSpec::new("Uploaded", FormFileField::CreatedAt),
                ],
                page_size,
            )?,
        })
    }
}
