use crate::domain::entities::record::{FieldValue, Record};

pub const DEFAULT_FEEDBACK_TYPE: &str = "Suggestion";
pub const FEEDBACK_TYPES: &[&str] = &[DEFAULT_FEEDBACK_TYPE, "Complaint", "Compliment"];

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub feedback_type: String,
    pub message: String,
    pub created_at: String,
}

impl Feedback {
    pub fn author_label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Anonymous")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub feedback_type: String,
    pub message: String,
}

impl Default for NewFeedback {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            feedback_type: DEFAULT_FEEDBACK_TYPE.to_string(),
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    Id,
    Name,
    Email,
    FeedbackType,
    Message,
    CreatedAt,
}

impl Record for Feedback {
    type Field = FeedbackField;

    const FIELDS: &'static [FeedbackField] = &[
        FeedbackField::Id,
        FeedbackField::Name,
        FeedbackField::Email,
        FeedbackField::FeedbackType,
        FeedbackField::Message,
        FeedbackField::CreatedAt,
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: FeedbackField) -> FieldValue {
        match field {
            FeedbackField::Id => FieldValue::from(&self.id),
            FeedbackField::Name => FieldValue::from(self.name.as_deref()),
            FeedbackField::Email => FieldValue::from(self.email.as_deref()),
            FeedbackField::FeedbackType => FieldValue::from(&self.feedback_type),
            FeedbackField::Message => FieldValue::from(&self.message),
            FeedbackField::CreatedAt => FieldValue::from(&self.created_at),
        }
    }
}
