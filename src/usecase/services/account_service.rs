use std::sync::Arc;

use crate::domain::entities::account::{
    AccountRequest, NewAccountRequest, NewUser, Role, UserProfile,
};
use crate::domain::entities::credential::PasswordDigest;
use crate::usecase::error::{ServiceError, ServiceResult};
use crate::usecase::ports::identity::{AuthError, IdentityService};
use crate::usecase::ports::repo::{RecordStore, RepoError};

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct AccountService {
    repo: Arc<dyn RecordStore>,
    identity: Arc<dyn IdentityService>,
}

impl AccountService {
    pub fn new(repo: Arc<dyn RecordStore>, identity: Arc<dyn IdentityService>) -> Self {
        Self { repo, identity }
    }

    pub fn request_account(&self, request: &NewAccountRequest) -> ServiceResult<AccountRequest> {
        validate_email(&request.email)?;
        if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
            return Err(ServiceError::validation("First and last name are required"));
        }
        if request.password != request.confirm_password {
            return Err(ServiceError::validation("Passwords do not match."));
        }
        validate_password(&request.password)?;

        if self.repo.find_account_request_by_email(&request.email)?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "A request for {} is already pending",
                request.email.trim()
            )));
        }
        if self.identity.find_by_email(&request.email)?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "An account for {} already exists",
                request.email.trim()
            )));
        }

        let digest = PasswordDigest::from_plain(&request.password);
        let stored = self.repo.insert_account_request(request, &digest)?;
        tracing::info!(request_id = stored.id.as_str(), "account request submitted");
        Ok(stored)
    }

    pub fn list_requests(&self) -> ServiceResult<Vec<AccountRequest>> {
        Ok(self.repo.list_account_requests()?)
    }

    /// Creates a resident account from the request, then drops the request.
    /// When the account cannot be created the request stays pending, unless
    /// the existing account came from this very request.
    pub fn approve(&self, request_id: &str) -> ServiceResult<UserProfile> {
        let request = self
            .repo
            .get_account_request(request_id)?
            .ok_or_else(|| ServiceError::NotFound("Account request".to_string()))?;

        let user = match self.identity.create_user(NewUser::from_request(&request)) {
            Ok(user) => user,
            Err(AuthError::EmailTaken(email)) => {
                match self.identity.find_by_email(&email)? {
                    Some(existing) if request.was_approved_as(&existing) => {
                        tracing::warn!(request_id, "request was already approved; clearing it");
                        existing
                    }
                    _ => {
                        tracing::warn!(request_id, "approve failed: email already registered");
                        return Err(ServiceError::Conflict(format!(
                            "An account for {email} already exists"
                        )));
                    }
                }
            }
            Err(err) => {
                tracing::error!(request_id, error = %err, "approve failed: user creation");
                return Err(err.into());
            }
        };

        if let Err(err) = self.repo.delete_account_request(&request.id) {
            tracing::error!(request_id, error = %err, "approved request could not be removed");
            return Err(err.into());
        }

        tracing::info!(request_id, user_id = user.id.as_str(), "account request approved");
        Ok(user)
    }

    pub fn reject(&self, request_id: &str) -> ServiceResult<()> {
        if request_id.trim().is_empty() {
            return Err(ServiceError::validation("Missing ID"));
        }
        match self.repo.delete_account_request(request_id) {
            Ok(()) => {
                tracing::info!(request_id, "account request rejected");
                Ok(())
            }
            Err(RepoError::NotFound(_)) => {
                Err(ServiceError::NotFound("Account request".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Admin-created account with an explicit role.
    pub fn create_user(&self, form: &NewUserForm) -> ServiceResult<UserProfile> {
        validate_email(&form.email)?;
        validate_password(&form.password)?;

        let user = NewUser {
            email: form.email.trim().to_string(),
            password: PasswordDigest::from_plain(&form.password),
            first_name: form.first_name.clone(),
            middle_initial: form.middle_initial.clone(),
            last_name: form.last_name.clone(),
            contact_number: form.contact_number.clone(),
            address: form.address.clone(),
            role: form.role,
        };
        let created = self.identity.create_user(user).map_err(|err| match err {
            AuthError::EmailTaken(email) => {
                ServiceError::Conflict(format!("An account for {email} already exists"))
            }
            other => other.into(),
        })?;
        tracing::info!(user_id = created.id.as_str(), role = %created.role, "user created");
        Ok(created)
    }

    pub fn list_users(&self) -> ServiceResult<Vec<UserProfile>> {
        Ok(self.identity.list_users()?)
    }

    pub fn delete_user(&self, user_id: &str) -> ServiceResult<()> {
        if user_id.trim().is_empty() {
            return Err(ServiceError::validation("User ID is required."));
        }
        match self.identity.delete_user(user_id) {
            Ok(()) => {
                tracing::info!(user_id, "user deleted");
                Ok(())
            }
            Err(AuthError::UserNotFound(_)) => Err(ServiceError::NotFound("User".to_string())),
            Err(err) => Err(err.into()),
        }
    }
}

/// Admin "create user" form as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub contact_number: String,
    pub address: String,
    pub role: Role,
}

impl Default for NewUserForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            middle_initial: String::new(),
            last_name: String::new(),
            contact_number: String::new(),
            address: String::new(),
            role: Role::Resident,
        }
    }
}

fn validate_email(email: &str) -> ServiceResult<()> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(())
    } else {
        Err(ServiceError::validation("A valid email address is required"))
    }
}

fn validate_password(password: &str) -> ServiceResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ServiceError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
