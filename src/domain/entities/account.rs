use std::fmt;
use std::str::FromStr;

use crate::domain::entities::credential::PasswordDigest;
use crate::domain::entities::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Resident,
}

impl Role {
    pub fn is_privileged(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Resident => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" | "resident" => Ok(Role::Resident),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountRequest {
    pub id: String,
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub password: PasswordDigest,
    pub created_at: String,
}

impl AccountRequest {
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.middle_initial, &self.last_name)
    }

    /// Whether `user` is the resident account an earlier approval of this
    /// request already created.
    pub fn was_approved_as(&self, user: &UserProfile) -> bool {
        user.role == Role::Resident
            && user.email.trim().eq_ignore_ascii_case(self.email.trim())
            && user.first_name == self.first_name
            && user.middle_initial == self.middle_initial
            && user.last_name == self.last_name
            && user.created_at >= self.created_at
    }
}

/// Sign-up form as typed by the requester, before hashing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAccountRequest {
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRequestField {
    Id,
    FullName,
    ContactNumber,
    Email,
    Address,
    CreatedAt,
}

impl Record for AccountRequest {
    type Field = AccountRequestField;

    const FIELDS: &'static [AccountRequestField] = &[
        AccountRequestField::Id,
        AccountRequestField::FullName,
        AccountRequestField::ContactNumber,
        AccountRequestField::Email,
        AccountRequestField::Address,
        AccountRequestField::CreatedAt,
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: AccountRequestField) -> FieldValue {
        match field {
            AccountRequestField::Id => FieldValue::from(&self.id),
            AccountRequestField::FullName => FieldValue::from(self.full_name()),
            AccountRequestField::ContactNumber => FieldValue::from(&self.contact_number),
            AccountRequestField::Email => FieldValue::from(&self.email),
            AccountRequestField::Address => FieldValue::from(&self.address),
            AccountRequestField::CreatedAt => FieldValue::from(&self.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub contact_number: String,
    pub address: String,
    pub role: Role,
    pub created_at: String,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.middle_initial, &self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: PasswordDigest,
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub contact_number: String,
    pub address: String,
    pub role: Role,
}

impl NewUser {
    pub fn from_request(request: &AccountRequest) -> Self {
        Self {
            email: request.email.clone(),
            password: request.password.clone(),
            first_name: request.first_name.clone(),
            middle_initial: request.middle_initial.clone(),
            last_name: request.last_name.clone(),
            contact_number: request.contact_number.clone(),
            address: request.address.clone(),
            role: Role::Resident,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Email,
    FullName,
    ContactNumber,
    Address,
    Role,
    CreatedAt,
}

impl Record for UserProfile {
    type Field = UserField;

    const FIELDS: &'static [UserField] = &[
        UserField::Id,
        UserField::Email,
        UserField::FullName,
        UserField::ContactNumber,
        UserField::Address,
        UserField::Role,
        UserField::CreatedAt,
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: UserField) -> FieldValue {
        match field {
            UserField::Id => FieldValue::from(&self.id),
            UserField::Email => FieldValue::from(&self.email),
            UserField::FullName => FieldValue::from(self.full_name()),
            UserField::ContactNumber => FieldValue::from(&self.contact_number),
            UserField::Address => FieldValue::from(&self.address),
            UserField::Role => FieldValue::from(self.role.as_str()),
            UserField::CreatedAt => FieldValue::from(&self.created_at),
        }
    }
}

fn join_name(first: &str, middle_initial: &str, last: &str) -> String {
    let middle = middle_initial.trim();
    let parts: Vec<String> = [
        first.trim().to_string(),
        if middle.is_empty() {
            String::new()
        } else {
            format!("{}.", middle.trim_end_matches('.'))
        },
        last.trim().to_string(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    parts.join(" ")
}
