pub mod calendar;
pub mod column;
pub mod engine;
pub mod pager;
pub mod view_state;

pub use column::{ColumnSpec, TableConfig, TableConfigError};
pub use engine::{TableEngine, TableView};
pub use pager::PageLink;
pub use view_state::{SortDirection, ViewState};
