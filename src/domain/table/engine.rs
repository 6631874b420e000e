use std::cmp::Ordering;

use chrono::NaiveDate;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::table::calendar::parse_calendar_date;
use crate::domain::table::column::{ColumnSpec, TableConfig};
use crate::domain::table::view_state::{SortDirection, ViewState};

/// One rendered page of a table.
#[derive(Debug, PartialEq)]
pub struct TableView<'a, T> {
    pub items: Vec<&'a T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Filter, sort and paginate state machine over a caller-owned collection.
///
/// The engine never holds records. Every projection takes the current
/// snapshot by reference, so the caller may refetch between calls.
pub struct TableEngine<T: Record> {
    config: TableConfig<T::Field>,
    state: ViewState<T::Field>,
}

impl<T: Record> TableEngine<T> {
    pub fn new(config: TableConfig<T::Field>) -> Self {
        Self {
            config,
            state: ViewState::default(),
        }
    }

    pub fn config(&self) -> &TableConfig<T::Field> {
        &self.config
    }

    pub fn columns(&self) -> &[ColumnSpec<T::Field>] {
        self.config.columns()
    }

    pub fn state(&self) -> &ViewState<T::Field> {
        &self.state
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.state.current_page = 1;
    }

    /// Stores the date bounds. Without a configured date field the bounds
    /// are kept for display but never filter anything.
    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        if self.config.date_field().is_none() && (start.is_some() || end.is_some()) {
            tracing::debug!("date range set on a table without a date field; ignored");
        }
        self.state.date_start = start;
        self.state.date_end = end;
        self.state.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.state.search_text.clear();
        self.state.date_start = None;
        self.state.date_end = None;
        self.state.current_page = 1;
    }

    /// Same column flips the direction; a new column starts ascending.
    /// The page number is left alone.
    pub fn set_sort(&mut self, column: T::Field) {
        if self.state.sort_column == Some(column) {
            self.state.sort_direction = self.state.sort_direction.flipped();
        } else {
            self.state.sort_column = Some(column);
            self.state.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_page(&mut self, page: usize, records: &[T]) {
        let total_pages = self.total_pages(records);
        self.state.current_page = page.clamp(1, total_pages);
    }

    /// Re-clamps the page after the caller's collection changed.
    pub fn reconcile(&mut self, records: &[T]) {
        let current = self.state.current_page;
        self.set_page(current, records);
    }

    pub fn total_pages(&self, records: &[T]) -> usize {
        page_count(self.filtered(records).len(), self.config.page_size())
    }

    pub fn view<'a>(&self, records: &'a [T]) -> TableView<'a, T> {
        let mut rows = self.filtered(records);
        self.sort(&mut rows);

        let page_size = self.config.page_size();
        let total_items = rows.len();
        let total_pages = page_count(total_items, page_size);
        let current_page = self.state.current_page.clamp(1, total_pages);

        let start = (current_page - 1) * page_size;
        let items = rows.into_iter().skip(start).take(page_size).collect();

        TableView {
            items,
            total_items,
            total_pages,
            current_page,
        }
    }

    fn filtered<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        let needle = self.state.search_text.to_lowercase();
        records
            .iter()
            .filter(|record| matches_search(*record, &needle))
            .filter(|record| self.matches_date_range(*record))
            .collect()
    }

    fn matches_date_range(&self, record: &T) -> bool {
        let Some(field) = self.config.date_field() else {
            return true;
        };
        if !self.state.has_date_bounds() {
            return true;
        }

        let Some(date) = record.value(field).as_text().and_then(parse_calendar_date) else {
            return false;
        };

        let after_start = self.state.date_start.map_or(true, |start| date >= start);
        let before_end = self.state.date_end.map_or(true, |end| date <= end);
        after_start && before_end
    }

    fn sort(&self, rows: &mut Vec<&T>) {
        let Some(column) = self.state.sort_column else {
            return;
        };
        let direction = self.state.sort_direction;

        merge_sort_by(rows, &mut |a: &&T, b: &&T| {
            let ordering = compare_values(&a.value(column), &b.value(column));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

/// Stable merge sort that tolerates comparators which are not a total
/// order. Mixed-type ties make the column comparator intransitive, which
/// `slice::sort_by` is allowed to panic on.
fn merge_sort_by<X, F>(items: &mut Vec<X>, compare: &mut F)
where
    F: FnMut(&X, &X) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    let mut right = items.split_off(items.len() / 2);
    merge_sort_by(items, compare);
    merge_sort_by(&mut right, compare);

    let left = std::mem::take(items);
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    *items = merged;
}

fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

fn matches_search<T: Record>(record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    T::FIELDS
        .iter()
        .any(|field| record.value(*field).display().to_lowercase().contains(needle))
}

/// Text against text and number against number; any other pairing is a tie.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => locale_compare(a, b),
        (FieldValue::Number(a), FieldValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

/// Collation order for display text. Letters compare without accents or
/// case first; on a tie the plain form sorts before the accented one, then
/// lowercase before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| decomposed_lower(a).cmp(decomposed_lower(b)))
        .then_with(|| b.cmp(a))
}

fn collation_key(text: &str) -> impl Iterator<Item = char> + '_ {
    decomposed_lower(text).filter(|c| !is_combining_mark(*c))
}

fn decomposed_lower(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::column::ColumnSpec;

    #[derive(Debug, Clone, PartialEq)]
    struct Resident {
        id: String,
        name: String,
        date: String,
        age: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ResidentField {
        Id,
        Name,
        Date,
        Age,
    }

    impl Record for Resident {
        type Field = ResidentField;

        const FIELDS: &'static [ResidentField] = &[
            ResidentField::Id,
            ResidentField::Name,
            ResidentField::Date,
            ResidentField::Age,
        ];

        fn id(&self) -> &str {
            &self.id
        }

        fn value(&self, field: ResidentField) -> FieldValue {
            match field {
                ResidentField::Id => FieldValue::from(&self.id),
                ResidentField::Name => FieldValue::from(&self.name),
                ResidentField::Date => FieldValue::from(&self.date),
                ResidentField::Age => self.age.map(FieldValue::from).unwrap_or(FieldValue::Missing),
            }
        }
    }

    fn resident(id: &str, name: &str, date: &str, age: Option<f64>) -> Resident {
        Resident {
            id: id.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            age,
        }
    }

    fn numbered(count: usize) -> Vec<Resident> {
        (0..count)
            .map(|idx| resident(&format!("r{idx}"), &format!("Resident {idx}"), "2024-01-01", None))
            .collect()
    }

    fn engine(page_size: usize) -> TableEngine<Resident> {
        let config = TableConfig::new(
            vec![
                ColumnSpec::new("Name", ResidentField::Name),
                ColumnSpec::new("Date", ResidentField::Date),
            ],
            page_size,
        )
        .expect("page size is positive")
        .with_date_field(ResidentField::Date);
        TableEngine::new(config)
    }

    fn ids<'a>(view: &TableView<'a, Resident>) -> Vec<&'a str> {
        view.items.iter().map(|record| record.id.as_str()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn bob_and_amy() -> Vec<Resident> {
        vec![
            resident("1", "Bob", "2024-01-05", None),
            resident("2", "Amy", "2024-02-10", None),
        ]
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = TableConfig::<ResidentField>::new(Vec::new(), 0);
        assert_eq!(result, Err(crate::domain::table::column::TableConfigError::ZeroPageSize));
    }

    #[test]
    fn twelve_records_split_into_three_pages_of_five() {
        let records = numbered(12);
        let mut table = engine(5);

        let first = table.view(&records);
        assert_eq!(first.total_pages, 3);
        assert_eq!(ids(&first), vec!["r0", "r1", "r2", "r3", "r4"]);

        table.set_page(3, &records);
        let last = table.view(&records);
        assert_eq!(last.current_page, 3);
        assert_eq!(ids(&last), vec!["r10", "r11"]);
    }

    #[test]
    fn date_range_keeps_only_records_inside_bounds() {
        let records = bob_and_amy();
        let mut table = engine(10);

        table.set_date_range(Some(date(2024, 2, 1)), Some(date(2024, 2, 28)));

        assert_eq!(ids(&table.view(&records)), vec!["2"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = bob_and_amy();
        let mut table = engine(10);

        table.set_search_text("bob");

        assert_eq!(ids(&table.view(&records)), vec!["1"]);
        assert_eq!(table.state().search_text, "bob");
    }

    #[test]
    fn search_reads_fields_without_a_column() {
        let records = vec![
            resident("alpha", "Bob", "2024-01-05", Some(41.0)),
            resident("beta", "Amy", "2024-02-10", Some(29.0)),
        ];
        let mut table = engine(10);

        table.set_search_text("BETA");
        assert_eq!(ids(&table.view(&records)), vec!["beta"]);

        table.set_search_text("41");
        assert_eq!(ids(&table.view(&records)), vec!["alpha"]);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let records: Vec<Resident> = Vec::new();
        let table = engine(5);

        let view = table.view(&records);

        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let records = numbered(12);
        let mut table = engine(5);

        table.set_page(999, &records);
        assert_eq!(table.state().current_page, 3);

        table.set_page(0, &records);
        assert_eq!(table.state().current_page, 1);
    }

    #[test]
    fn filters_reset_the_page() {
        let records = numbered(12);
        let mut table = engine(5);

        table.set_page(3, &records);
        table.set_search_text("resident");
        assert_eq!(table.state().current_page, 1);

        table.set_page(2, &records);
        table.set_date_range(None, Some(date(2024, 12, 31)));
        assert_eq!(table.state().current_page, 1);
    }

    #[test]
    fn sorting_keeps_the_page_number() {
        let records = numbered(12);
        let mut table = engine(5);

        table.set_page(2, &records);
        table.set_sort(ResidentField::Name);

        assert_eq!(table.state().current_page, 2);
    }

    #[test]
    fn sort_toggles_direction_on_repeat_and_resets_on_new_column() {
        let mut table = engine(5);

        table.set_sort(ResidentField::Name);
        assert_eq!(table.state().sort_direction, SortDirection::Ascending);
        table.set_sort(ResidentField::Name);
        assert_eq!(table.state().sort_direction, SortDirection::Descending);
        table.set_sort(ResidentField::Name);
        assert_eq!(table.state().sort_direction, SortDirection::Ascending);

        table.set_sort(ResidentField::Name);
        table.set_sort(ResidentField::Date);
        assert_eq!(table.state().sort_column, Some(ResidentField::Date));
        assert_eq!(table.state().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn sorts_text_and_numbers_in_both_directions() {
        let records = vec![
            resident("1", "carla", "2024-01-01", Some(30.0)),
            resident("2", "Bea", "2024-01-01", Some(4.0)),
            resident("3", "adam", "2024-01-01", Some(12.5)),
        ];
        let mut table = engine(10);

        table.set_sort(ResidentField::Name);
        assert_eq!(ids(&table.view(&records)), vec!["3", "2", "1"]);
        table.set_sort(ResidentField::Name);
        assert_eq!(ids(&table.view(&records)), vec!["1", "2", "3"]);

        table.set_sort(ResidentField::Age);
        assert_eq!(ids(&table.view(&records)), vec!["2", "3", "1"]);
    }

    #[test]
    fn sort_is_stable_and_mixed_values_tie() {
        let records = vec![
            resident("1", "Same", "2024-01-01", Some(2.0)),
            resident("2", "Same", "2024-01-01", None),
            resident("3", "Same", "2024-01-01", Some(1.0)),
            resident("4", "Same", "2024-01-01", None),
        ];
        let mut table = engine(10);

        table.set_sort(ResidentField::Name);
        assert_eq!(ids(&table.view(&records)), vec!["1", "2", "3", "4"]);
        table.set_sort(ResidentField::Name);
        assert_eq!(ids(&table.view(&records)), vec!["1", "2", "3", "4"]);

        table.set_sort(ResidentField::Age);
        let sorted = table.view(&records);
        assert_eq!(sorted.total_items, 4);
        let position = |id: &str| {
            ids(&sorted)
                .iter()
                .position(|candidate| *candidate == id)
                .expect("record present")
        };
        assert!(position("2") < position("4"));
    }

    #[test]
    fn numeric_sort_keeps_equal_values_in_input_order() {
        let records = vec![
            resident("1", "A", "2024-01-01", Some(5.0)),
            resident("2", "B", "2024-01-01", Some(1.0)),
            resident("3", "C", "2024-01-01", Some(5.0)),
            resident("4", "D", "2024-01-01", Some(1.0)),
        ];
        let mut table = engine(10);

        table.set_sort(ResidentField::Age);
        assert_eq!(ids(&table.view(&records)), vec!["2", "4", "1", "3"]);
        table.set_sort(ResidentField::Age);
        assert_eq!(ids(&table.view(&records)), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn unparseable_dates_are_excluded_not_fatal() {
        let records = vec![
            resident("1", "Bob", "not a date", None),
            resident("2", "Amy", "2024-02-10 09:00:00", None),
            resident("3", "Cid", "", None),
        ];
        let mut table = engine(10);

        table.set_date_range(Some(date(2024, 1, 1)), None);

        assert_eq!(ids(&table.view(&records)), vec!["2"]);
    }

    #[test]
    fn date_range_without_date_field_is_a_no_op() {
        let records = bob_and_amy();
        let config = TableConfig::new(vec![ColumnSpec::new("Name", ResidentField::Name)], 10)
            .expect("page size is positive");
        let mut table: TableEngine<Resident> = TableEngine::new(config);

        table.set_date_range(Some(date(2030, 1, 1)), Some(date(2030, 1, 2)));

        assert_eq!(table.view(&records).total_items, 2);
        assert_eq!(table.state().date_start, Some(date(2030, 1, 1)));
    }

    #[test]
    fn view_is_idempotent_and_leaves_records_untouched() {
        let records = numbered(7);
        let snapshot = records.clone();
        let mut table = engine(3);
        table.set_sort(ResidentField::Name);
        table.set_sort(ResidentField::Name);
        table.set_page(2, &records);

        let first = table.view(&records);
        let second = table.view(&records);

        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }

    #[test]
    fn filtered_view_is_a_subset_of_input() {
        let records = numbered(12);
        let mut table = engine(100);
        table.set_search_text("resident 1");

        let view = table.view(&records);

        assert!(view
            .items
            .iter()
            .all(|item| records.iter().any(|record| std::ptr::eq(record, *item))));
        assert_eq!(ids(&view), vec!["r1", "r10", "r11"]);
    }

    #[test]
    fn reconcile_clamps_after_the_collection_shrinks() {
        let mut records = numbered(12);
        let mut table = engine(5);
        table.set_page(3, &records);

        records.truncate(6);
        assert_eq!(table.view(&records).current_page, 2);
        assert_eq!(table.state().current_page, 3);

        table.reconcile(&records);
        assert_eq!(table.state().current_page, 2);
    }

    #[test]
    fn locale_compare_ignores_case_before_breaking_ties() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letters() {
        assert_eq!(locale_compare("Ángel", "Bea"), Ordering::Less);
        assert_eq!(locale_compare("école", "zoo"), Ordering::Less);
        assert_eq!(locale_compare("Peña", "Penz"), Ordering::Less);
        assert_eq!(locale_compare("Peña", "Pena"), Ordering::Greater);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("Élan", "élan"), Ordering::Greater);
    }

    #[test]
    fn name_sort_interleaves_accented_residents() {
        let records = vec![
            resident("1", "Zaldy", "2024-01-01", None),
            resident("2", "Ángel", "2024-01-01", None),
            resident("3", "Bea", "2024-01-01", None),
            resident("4", "Peña", "2024-01-01", None),
            resident("5", "Penz", "2024-01-01", None),
        ];
        let mut table = engine(10);
        table.set_sort(ResidentField::Name);

        assert_eq!(ids(&table.view(&records)), vec!["2", "3", "4", "5", "1"]);
    }
}
