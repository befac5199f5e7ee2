//! Driving port for the reaction ledger.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::course::CourseId;
use crate::domain::reactions::Reaction;
use crate::domain::user::UserId;

/// Domain use-case port for like/dislike interactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReactionCommand: Send + Sync {
    /// Record a reaction, enforcing like/dislike mutual exclusivity.
    async fn react(
        &self,
        course_id: &CourseId,
        user_id: &UserId,
        reaction: Reaction,
    ) -> Result<(), Error>;

    /// Whether the user currently likes the course.
    async fn is_liked(&self, course_id: &CourseId, user_id: &UserId) -> Result<bool, Error>;

    /// Number of users currently liking the course.
    async fn like_count(&self, course_id: &CourseId) -> Result<u64, Error>;
}

/// Fixture implementation used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReactionCommand;

#[async_trait]
impl ReactionCommand for FixtureReactionCommand {
    async fn react(
        &self,
        _course_id: &CourseId,
        _user_id: &UserId,
        _reaction: Reaction,
    ) -> Result<(), Error> {
        Ok(())
    }

    async fn is_liked(&self, _course_id: &CourseId, _user_id: &UserId) -> Result<bool, Error> {
        Ok(false)
    }

    async fn like_count(&self, _course_id: &CourseId) -> Result<u64, Error> {
        Ok(0)
    }
}
