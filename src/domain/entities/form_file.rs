use crate::domain::entities::record::{FieldValue, Record};

/// A downloadable form stored in the forms bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFile {
    pub name: String,
    pub size: u64,
    pub created_at: String,
    pub public_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFileField {
    Name,
    Size,
    CreatedAt,
}

impl Record for FormFile {
    type Field = FormFileField;

    const FIELDS: &'static [FormFileField] = &[
        FormFileField::Name,
        FormFileField::Size,
        FormFileField::CreatedAt,
    ];

    fn id(&self) -> &str {
        &self.name
    }

    fn value(&self, field: FormFileField) -> FieldValue {
        match field {
            FormFileField::Name => FieldValue::from(&self.name),
            FormFileField::Size => FieldValue::from(self.size),
            FormFileField::CreatedAt => FieldValue::from(&self.created_at),
        }
    }
}
