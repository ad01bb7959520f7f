//! Shared user domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{USER_TYPE_DOCTOR, USER_TYPE_FITNESS, USER_TYPE_PATIENT};
use crate::{Error, Result};

/// How to reach a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn new(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Fields every role variant carries.
///
/// This is plain data, not a user: only the role variants implement
/// [`super::User`]. `user_id` has no setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBase {
    user_id: String,
    name: String,
    age: u32,
    gender: String,
    contact_info: ContactInfo,
}

impl UserBase {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        contact_info: ContactInfo,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            age,
            gender: gender.into(),
            contact_info,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn contact_info(&self) -> &ContactInfo {
        &self.contact_info
    }

    pub(crate) fn contact_info_mut(&mut self) -> &mut ContactInfo {
        &mut self.contact_info
    }

    pub fn to_profile(&self) -> ProfileView {
        ProfileView {
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            age: self.age,
            gender: self.gender.clone(),
            contact_info: self.contact_info.clone(),
        }
    }
}

/// Snapshot of the base profile returned by `view_profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact_info: ContactInfo,
}

/// The closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Doctor,
    Patient,
    FitnessEnthusiast,
}

impl UserRole {
    /// Returns the factory tag for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Doctor => USER_TYPE_DOCTOR,
            UserRole::Patient => USER_TYPE_PATIENT,
            UserRole::FitnessEnthusiast => USER_TYPE_FITNESS,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = Error;

    /// Parses a factory tag, ignoring case.
    fn from_str(tag: &str) -> Result<Self> {
        match tag.to_lowercase().as_str() {
            USER_TYPE_DOCTOR => Ok(UserRole::Doctor),
            USER_TYPE_PATIENT => Ok(UserRole::Patient),
            USER_TYPE_FITNESS => Ok(UserRole::FitnessEnthusiast),
            _ => Err(Error::UnknownVariant(tag.to_string())),
        }
    }
}
