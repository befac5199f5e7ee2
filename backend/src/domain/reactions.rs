//! Reaction ledger service.
//!
//! A user's like and dislike on a course are mutually exclusive; the
//! repository applies each change as one atomic delete-opposite + insert
//! pair. This service owns the mapping from persistence failures to domain
//! errors so handlers never see repository error types.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::course::CourseId;
use crate::domain::ports::{ReactionCommand, ReactionRepository, ReactionRepositoryError};
use crate::domain::user::UserId;

/// Direction of a user's reaction to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    /// The reaction this one displaces.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

/// Domain service implementing the reaction command port.
#[derive(Clone)]
pub struct ReactionService<R> {
    reactions: Arc<R>,
}

impl<R> ReactionService<R> {
    /// Create a new reaction service.
    pub fn new(reactions: Arc<R>) -> Self {
        Self { reactions }
    }
}

fn map_reaction_error(error: ReactionRepositoryError) -> Error {
    match error {
        ReactionRepositoryError::CourseNotFound { course_id } => {
            Error::not_found(format!("course {course_id} not found"))
        }
        ReactionRepositoryError::UserNotFound { user_id } => {
            Error::not_found(format!("user {user_id} not found"))
        }
        ReactionRepositoryError::Connection { message } => Error::service_unavailable(message),
        ReactionRepositoryError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl<R> ReactionCommand for ReactionService<R>
where
    R: ReactionRepository,
{
    async fn react(
        &self,
        course_id: &CourseId,
        user_id: &UserId,
        reaction: Reaction,
    ) -> Result<(), Error> {
        self.reactions
            .apply(course_id, user_id, reaction)
            .await
            .map_err(map_reaction_error)
    }

    async fn is_liked(&self, course_id: &CourseId, user_id: &UserId) -> Result<bool, Error> {
        self.reactions
            .is_liked(course_id, user_id)
            .await
            .map_err(map_reaction_error)
    }

    async fn like_count(&self, course_id: &CourseId) -> Result<u64, Error> {
        self.reactions
            .like_count(course_id)
            .await
            .map_err(map_reaction_error)
    }
}
