use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::validation::{
    self, EMAIL_REQUIRED, FIRST_NAME_REQUIRED, LAST_NAME_REQUIRED, PASSWORD_REQUIRED,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SignupRequest {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

impl SignupRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validation::validate_signup(&self.email, &self.first_name, &self.last_name, &self.password)
            .into_result()?;
        Ok(Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validation::validate_login(&self.email, &self.password).into_result()?;
        Ok(Self {
            email: self.email.trim().to_string(),
            password: self.password,
        })
    }
}

/// Partial update of a user. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct UpdateUserRequest {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) password: Option<String>,
}

impl UpdateUserRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let mut errors = Vec::new();
        if let Some(email) = &self.email {
            validation::require(&mut errors, email, EMAIL_REQUIRED);
        }
        if let Some(first_name) = &self.first_name {
            validation::require(&mut errors, first_name, FIRST_NAME_REQUIRED);
        }
        if let Some(last_name) = &self.last_name {
            validation::require(&mut errors, last_name, LAST_NAME_REQUIRED);
        }
        if let Some(password) = &self.password {
            validation::require(&mut errors, password, PASSWORD_REQUIRED);
        }
        if !errors.is_empty() {
            return Err(DomainError::InvalidInput(errors));
        }

        Ok(Self {
            first_name: self.first_name.map(|v| v.trim().to_string()),
            last_name: self.last_name.map(|v| v.trim().to_string()),
            email: self.email.map(|v| v.trim().to_string()),
            password: self.password,
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) avatar: Option<String>,
    pub(crate) created: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        avatar: Option<String>,
        created: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::Unexpected(format!("user id must be > 0, got {id}")));
        }

        Ok(Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            avatar,
            created,
        })
    }

    pub(crate) fn is_owned_by(&self, caller_id: i64) -> bool {
        self.id == caller_id
    }
}
