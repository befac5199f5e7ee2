//! Driven port for committing catalogue imports.
//!
//! Implementations must commit all records, their tags, and the tag
//! associations in a single transaction: a failed import leaves the
//! catalogue untouched.

use async_trait::async_trait;

use crate::domain::course::CourseRecord;

/// Errors raised when persisting a catalogue import.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseImportRepositoryError {
    /// Repository connection could not be established.
    #[error("course import connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("course import query failed: {message}")]
    Query { message: String },
}

impl CourseImportRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing validated spreadsheet rows to the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseImportRepository: Send + Sync {
    /// Commit all records atomically, returning how many were written.
    ///
    /// Courses upsert on their `(site, url)` key; tags get-or-create on
    /// their unique name.
    async fn import_courses(
        &self,
        records: &[CourseRecord],
    ) -> Result<u64, CourseImportRepositoryError>;
}

/// Fixture implementation that accepts imports without persisting them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseImportRepository;

#[async_trait]
impl CourseImportRepository for FixtureCourseImportRepository {
    async fn import_courses(
        &self,
        records: &[CourseRecord],
    ) -> Result<u64, CourseImportRepositoryError> {
        Ok(records.len() as u64)
    }
}
