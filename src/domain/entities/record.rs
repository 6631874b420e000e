use std::fmt::Debug;

/// A single cell value read off a record through one of its accessors.
///
/// Dates travel as `Text` in their stored form; the table engine parses them
/// only when a date filter asks for it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Missing,
    Text(String),
    Number(f64),
    Flag(bool),
}

impl FieldValue {
    /// Display form used both for rendering and for free-text search.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Missing => String::new(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(value) => value.to_string(),
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        value.map(FieldValue::from).unwrap_or(FieldValue::Missing)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// A row that can be rendered by the table engine.
///
/// `Field` is the record's accessor set. `FIELDS` lists every accessor that
/// free-text search looks at, which may include fields no column shows.
pub trait Record {
    type Field: Copy + Eq + Debug + 'static;

    const FIELDS: &'static [Self::Field];

    fn id(&self) -> &str;

    fn value(&self, field: Self::Field) -> FieldValue;
}
