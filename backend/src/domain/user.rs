//! User identity types.
//!
//! Account lifecycle (signup, password storage, token issuance) belongs to
//! the external authentication collaborator; this module only models the
//! identity the rest of the domain references.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the constructors in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyUsername,
    EmptyPassword,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from string input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Wrap an already-parsed UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Username/password pair handed to the login collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: String,
}

impl LoginCredentials {
    /// Validate both parts are non-empty.
    pub fn try_from_parts(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self { username, password })
    }

    /// Login name as submitted.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Raw password as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
