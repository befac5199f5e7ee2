//! Driven port for like/dislike set membership.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::course::CourseId;
use crate::domain::reactions::Reaction;
use crate::domain::user::UserId;

/// Errors raised by reaction persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReactionRepositoryError {
    /// Repository connection could not be established.
    #[error("reaction store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("reaction store query failed: {message}")]
    Query { message: String },
    /// The referenced course does not exist.
    #[error("course {course_id} not found")]
    CourseNotFound { course_id: Uuid },
    /// The referenced user does not exist.
    #[error("user {user_id} not found")]
    UserNotFound { user_id: Uuid },
}

impl ReactionRepositoryError {
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

    /// Create a course-not-found error.
    pub const fn course_not_found(course_id: Uuid) -> Self {
        Self::CourseNotFound { course_id }
    }

    /// Create a user-not-found error.
    pub const fn user_not_found(user_id: Uuid) -> Self {
        Self::UserNotFound { user_id }
    }
}

/// Port over the per-course like/dislike membership sets.
///
/// `apply` must perform the delete-opposite + insert pair atomically so a
/// user is never observed in both sets, and repeated calls are idempotent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Record the reaction, displacing the opposite one if present.
    async fn apply(
        &self,
        course_id: &CourseId,
        user_id: &UserId,
        reaction: Reaction,
    ) -> Result<(), ReactionRepositoryError>;

    /// Whether the user currently likes the course.
    async fn is_liked(
        &self,
        course_id: &CourseId,
        user_id: &UserId,
    ) -> Result<bool, ReactionRepositoryError>;

    /// Cardinality of the course's like set.
    async fn like_count(&self, course_id: &CourseId) -> Result<u64, ReactionRepositoryError>;
}

/// Fixture implementation for tests that do not exercise reactions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReactionRepository;

#[async_trait]
impl ReactionRepository for FixtureReactionRepository {
    async fn apply(
        &self,
        _course_id: &CourseId,
        _user_id: &UserId,
        _reaction: Reaction,
    ) -> Result<(), ReactionRepositoryError> {
        Ok(())
    }

    async fn is_liked(
        &self,
        _course_id: &CourseId,
        _user_id: &UserId,
    ) -> Result<bool, ReactionRepositoryError> {
        Ok(false)
    }

    async fn like_count(&self, _course_id: &CourseId) -> Result<u64, ReactionRepositoryError> {
        Ok(0)
    }
}
