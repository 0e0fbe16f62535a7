//! User entity - a catalog member who can like films and befriend others

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::DomainError;
use crate::value_objects::UserId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: Option<NaiveDate>,
    /// Ids of users on the other end of a friendship edge
    pub friends: BTreeSet<UserId>,
}

impl User {
    /// Build a stored user from a draft and its assigned id
    pub fn from_draft(id: UserId, draft: &UserDraft, friends: BTreeSet<UserId>) -> Self {
        Self {
            id,
            email: draft.email.clone(),
            login: draft.login.clone(),
            name: draft.name.clone(),
            birthday: draft.birthday,
            friends,
        }
    }
}

/// Field values for creating or replacing a user
///
/// The display name is already resolved: a blank or absent name becomes the
/// login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: Option<NaiveDate>,
}

impl UserDraft {
    /// Create a draft, defaulting the display name to the login
    pub fn new(
        email: String,
        login: String,
        name: Option<String>,
        birthday: Option<NaiveDate>,
    ) -> Self {
        let name = display_name(name.as_deref(), &login);
        Self {
            email,
            login,
            name,
            birthday,
        }
    }

    /// Check the domain rules that do not need the store
    ///
    /// `today` is the reference date for the birthday check.
    pub fn validate(&self, today: NaiveDate) -> Result<(), DomainError> {
        validate_login(&self.login)?;

        if let Some(birthday) = self.birthday {
            if birthday > today {
                return Err(DomainError::BirthdayInFuture(birthday));
            }
        }

        Ok(())
    }
}

/// Resolve the display name: blank or missing falls back to the login
pub fn display_name(name: Option<&str>, login: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => login.to_string(),
    }
}

/// Login must be non-empty and contain no whitespace
pub fn validate_login(login: &str) -> Result<(), DomainError> {
    if login.is_empty() || login.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidLogin(login.to_string()));
    }
    Ok(())
}
