//! PostgreSQL-backed wishlist interests adapter.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::course::CourseId;
use crate::domain::ports::{CourseInterest, InterestsRepository, InterestsRepositoryError};
use crate::domain::user::UserId;

use super::pool::{DbPool, PoolError};
use super::schema::{courses, user_interests, users};

/// Diesel-backed implementation of the interests repository port.
#[derive(Clone)]
pub struct DieselInterestsRepository {
    pool: DbPool,
}

impl DieselInterestsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> InterestsRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            InterestsRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> InterestsRepositoryError {
    let error_message = error.to_string();
    debug!(%error_message, "interests diesel operation failed");
    InterestsRepositoryError::query(error_message)
}

#[async_trait]
impl InterestsRepository for DieselInterestsRepository {
    async fn interests_for(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CourseInterest>, InterestsRepositoryError> {
        let user = *user_id.as_uuid();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let present: bool = diesel::select(exists(users::table.find(user)))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if !present {
            return Err(InterestsRepositoryError::user_not_found(user));
        }

        let rows: Vec<(Uuid, String)> = user_interests::table
            .inner_join(courses::table)
            .filter(user_interests::user_id.eq(user))
            .order((
                user_interests::created_at.asc(),
                user_interests::course_id.asc(),
            ))
            .select((courses::id, courses::title))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(course_id, title)| CourseInterest {
                course_id: CourseId::from_uuid(course_id),
                title,
            })
            .collect())
    }
}
