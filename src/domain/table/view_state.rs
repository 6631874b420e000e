use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Search, filter, sort and page selection of one table instance.
///
/// Only `TableEngine` mutates this; callers read it to render controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<F> {
    pub search_text: String,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub sort_column: Option<F>,
    pub sort_direction: SortDirection,
    pub current_page: usize,
}

impl<F> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            date_start: None,
            date_end: None,
            sort_column: None,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
        }
    }
}

impl<F> ViewState<F> {
    pub fn has_date_bounds(&self) -> bool {
        self.date_start.is_some() || self.date_end.is_some()
    }
}
