//! Course aggregate and ingestion draft types.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::tag::TagName;

/// Fractional digits stored for course prices.
pub const PRICE_DECIMAL_PLACES: u32 = 2;
/// Fractional digits stored for course ratings.
pub const RATING_DECIMAL_PLACES: u32 = 3;

/// Validation errors returned by [`CourseId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseIdError {
    Empty,
    Invalid,
}

impl fmt::Display for CourseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "course id must not be empty"),
            Self::Invalid => write!(f, "course id must be a valid UUID"),
        }
    }
}

impl std::error::Error for CourseIdError {}

/// Stable course identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseId(Uuid);

impl CourseId {
    /// Validate and construct a [`CourseId`] from string input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, CourseIdError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(CourseIdError::Empty);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| CourseIdError::Invalid)?;
        Ok(Self(parsed))
    }

    /// Wrap an already-parsed UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random [`CourseId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CourseId> for String {
    fn from(value: CourseId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CourseId {
    type Error = CourseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted course as read back from the catalogue.
///
/// Reaction membership (likes/dislikes) and wishlist edges live in their own
/// relations and are queried through the reaction and wishlist ports rather
/// than materialized on this value.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub site: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub url: String,
    pub price: Decimal,
    pub rating: Decimal,
    pub thumbnail_url: String,
    pub is_package: bool,
    pub is_free: bool,
    pub enrollment_count: u64,
    pub upload_date: NaiveDate,
}

/// One validated spreadsheet row, ready to be committed.
///
/// The `(site, url)` pair is the upsert key: re-importing a file refreshes
/// existing rows instead of duplicating them.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    pub site: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub url: String,
    pub price: Decimal,
    pub rating: Decimal,
    pub thumbnail_url: String,
    pub is_package: bool,
    pub is_free: bool,
    pub enrollment_count: u64,
    pub upload_date: NaiveDate,
    pub tags: Vec<TagName>,
}
