//! Wishlist projection service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::course::CourseId;
use crate::domain::ports::{InterestsRepository, InterestsRepositoryError, WishlistQuery};
use crate::domain::user::UserId;

/// One wishlist row projected for the caller.
///
/// Both identifier fields carry the course id; `course_name` carries the
/// course title. The duplication is part of the response contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistEntry {
    pub id: CourseId,
    pub course_id: CourseId,
    pub course_name: String,
}

/// Domain service implementing the wishlist query port.
#[derive(Clone)]
pub struct WishlistService<R> {
    interests: Arc<R>,
}

impl<R> WishlistService<R> {
    /// Create a new wishlist service.
    pub fn new(interests: Arc<R>) -> Self {
        Self { interests }
    }
}

fn map_interests_error(error: InterestsRepositoryError) -> Error {
    match error {
        InterestsRepositoryError::UserNotFound { user_id } => {
            Error::not_found(format!("user {user_id} not found"))
        }
        InterestsRepositoryError::Connection { message } => Error::service_unavailable(message),
        InterestsRepositoryError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl<R> WishlistQuery for WishlistService<R>
where
    R: InterestsRepository,
{
    async fn wishlist(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, Error> {
        let interests = self
            .interests
            .interests_for(user_id)
            .await
            .map_err(map_interests_error)?;
        Ok(interests
            .into_iter()
            .map(|interest| WishlistEntry {
                id: interest.course_id,
                course_id: interest.course_id,
                course_name: interest.title,
            })
            .collect())
    }
}
