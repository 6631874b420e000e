pub mod confirm_dialog;
pub mod form_field;
pub mod paginated_table;
pub mod report_detail;

pub use confirm_dialog::ConfirmDialog;
pub use form_field::{CheckField, SelectField, TextField};
pub use paginated_table::{PaginatedTable, RowAction, RowEvent};
pub use report_detail::ReportDetail;
