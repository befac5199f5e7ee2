//! Driven port for reading a user's stored course interests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::course::CourseId;
use crate::domain::user::UserId;

/// One stored interest edge joined with its course title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseInterest {
    pub course_id: CourseId,
    pub title: String,
}

/// Errors raised by interest reads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterestsRepositoryError {
    /// Repository connection could not be established.
    #[error("interests store connection failed: {message}")]
    Connection { message: String },
    /// Query failed during execution.
    #[error("interests store query failed: {message}")]
    Query { message: String },
    /// The referenced user does not exist.
    #[error("user {user_id} not found")]
    UserNotFound { user_id: Uuid },
}

impl InterestsRepositoryError {
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

    /// Create a user-not-found error.
    pub const fn user_not_found(user_id: Uuid) -> Self {
        Self::UserNotFound { user_id }
    }
}

/// Port over the user-profile interests relation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterestsRepository: Send + Sync {
    /// All interests for the user, in stored order.
    async fn interests_for(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CourseInterest>, InterestsRepositoryError>;
}

/// Fixture implementation returning an empty wishlist.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInterestsRepository;

#[async_trait]
impl InterestsRepository for FixtureInterestsRepository {
    async fn interests_for(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<CourseInterest>, InterestsRepositoryError> {
        Ok(Vec::new())
    }
}
