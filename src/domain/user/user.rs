//! User account entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{UserId, ValidationError};

/// Account role. Fixed at creation; there is no role-change operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Coordinator,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Coordinator => "coordinator",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person known to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Profile fields supplied when an account is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserProfile {
    pub name: String,
    pub email: String,
    pub reg_no: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

/// Partial profile update. `None` leaves a field untouched; an empty string
/// clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub reg_no: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.reg_no.is_none()
            && self.department.is_none()
            && self.phone.is_none()
            && self.avatar.is_none()
    }
}

impl User {
    /// Builds a new account from validated profile input.
    ///
    /// Falls back to a generated avatar URL when none is supplied.
    pub fn register(id: UserId, role: Role, profile: NewUserProfile) -> Result<Self, ValidationError> {
        let name = required("name", &profile.name)?;
        let email = validate_email(&profile.email)?;
        let avatar = optional(profile.avatar).or_else(|| Some(default_avatar(&name)));

        Ok(Self {
            id,
            name,
            email,
            role,
            reg_no: optional(profile.reg_no),
            avatar,
            department: optional(profile.department),
            phone: optional(profile.phone),
        })
    }

    /// Applies a partial update. The role never changes.
    pub fn apply_changes(&mut self, changes: ProfileChanges) -> Result<(), ValidationError> {
        if let Some(name) = changes.name {
            self.name = required("name", &name)?;
        }
        if let Some(email) = changes.email {
            self.email = validate_email(&email)?;
        }
        if let Some(reg_no) = changes.reg_no {
            self.reg_no = optional(Some(reg_no));
        }
        if let Some(department) = changes.department {
            self.department = optional(Some(department));
        }
        if let Some(phone) = changes.phone {
            self.phone = optional(Some(phone));
        }
        if let Some(avatar) = changes.avatar {
            self.avatar = optional(Some(avatar)).or_else(|| Some(default_avatar(&self.name)));
        }
        Ok(())
    }

    /// Case-insensitive email comparison.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_coordinator(&self) -> bool {
        self.role == Role::Coordinator
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

/// Generated avatar for accounts created without a picture.
pub fn default_avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        urlencoding::encode(name)
    )
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = required("email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ValidationError::invalid_format("email", "must look like name@domain")),
    }
}
