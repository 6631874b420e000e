use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec<F> {
    pub label: String,
    pub accessor: F,
}

impl<F> ColumnSpec<F> {
    pub fn new(label: impl Into<String>, accessor: F) -> Self {
        Self {
            label: label.into(),
            accessor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableConfigError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Per-table configuration. Fixed for the lifetime of one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig<F> {
    columns: Vec<ColumnSpec<F>>,
    page_size: usize,
    date_field: Option<F>,
}

impl<F: Copy + Eq + Debug> TableConfig<F> {
    pub fn new(columns: Vec<ColumnSpec<F>>, page_size: usize) -> Result<Self, TableConfigError> {
        if page_size == 0 {
            return Err(TableConfigError::ZeroPageSize);
        }
        Ok(Self {
            columns,
            page_size,
            date_field: None,
        })
    }

    /// Designates the field the date-range filter reads.
    pub fn with_date_field(mut self, field: F) -> Self {
        self.date_field = Some(field);
        self
    }

    pub fn columns(&self) -> &[ColumnSpec<F>] {
        &self.columns
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn date_field(&self) -> Option<F> {
        self.date_field
    }
}
