//! PostgreSQL-backed reaction ledger adapter.
//!
//! Each `apply` call runs as one transaction: existence checks, delete of
//! the opposite membership, then an idempotent insert. Concurrent calls on
//! the same `(course, user)` pair serialize on the row locks taken by the
//! delete/insert pair, so a user is never visible in both sets.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::AsyncPgConnection;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::debug;
use uuid::Uuid;

use crate::domain::course::CourseId;
use crate::domain::ports::{ReactionRepository, ReactionRepositoryError};
use crate::domain::reactions::Reaction;
use crate::domain::user::UserId;

use super::pool::{DbPool, PoolError};
use super::schema::{course_dislikes, course_likes, courses, users};

/// Diesel-backed implementation of the reaction repository port.
#[derive(Clone)]
pub struct DieselReactionRepository {
    pool: DbPool,
}

impl DieselReactionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ReactionRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ReactionRepositoryError::connection(message)
        }
    }
}

impl From<diesel::result::Error> for ReactionRepositoryError {
    fn from(error: diesel::result::Error) -> Self {
        let error_message = error.to_string();
        debug!(%error_message, "reaction diesel operation failed");
        Self::query(error_message)
    }
}

async fn ensure_course(
    conn: &mut AsyncPgConnection,
    course_id: Uuid,
) -> Result<(), ReactionRepositoryError> {
    let present: bool = diesel::select(exists(courses::table.find(course_id)))
        .get_result(conn)
        .await?;
    if present {
        Ok(())
    } else {
        Err(ReactionRepositoryError::course_not_found(course_id))
    }
}

async fn ensure_user(
    conn: &mut AsyncPgConnection,
    user_id: Uuid,
) -> Result<(), ReactionRepositoryError> {
    let present: bool = diesel::select(exists(users::table.find(user_id)))
        .get_result(conn)
        .await?;
    if present {
        Ok(())
    } else {
        Err(ReactionRepositoryError::user_not_found(user_id))
    }
}

#[async_trait]
impl ReactionRepository for DieselReactionRepository {
    async fn apply(
        &self,
        course_id: &CourseId,
        user_id: &UserId,
        reaction: Reaction,
    ) -> Result<(), ReactionRepositoryError> {
        let course = *course_id.as_uuid();
        let user = *user_id.as_uuid();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction::<_, ReactionRepositoryError, _>(|conn| {
            async move {
                ensure_course(conn, course).await?;
                ensure_user(conn, user).await?;

                match reaction {
                    Reaction::Like => {
                        diesel::delete(course_dislikes::table.find((course, user)))
                            .execute(conn)
                            .await?;
                        diesel::insert_into(course_likes::table)
                            .values((
                                course_likes::course_id.eq(course),
                                course_likes::user_id.eq(user),
                            ))
                            .on_conflict_do_nothing()
                            .execute(conn)
                            .await?;
                    }
                    Reaction::Dislike => {
                        diesel::delete(course_likes::table.find((course, user)))
                            .execute(conn)
                            .await?;
                        diesel::insert_into(course_dislikes::table)
                            .values((
                                course_dislikes::course_id.eq(course),
                                course_dislikes::user_id.eq(user),
                            ))
                            .on_conflict_do_nothing()
                            .execute(conn)
                            .await?;
                    }
                }
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn is_liked(
        &self,
        course_id: &CourseId,
        user_id: &UserId,
    ) -> Result<bool, ReactionRepositoryError> {
        let course = *course_id.as_uuid();
        let user = *user_id.as_uuid();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        ensure_course(&mut conn, course).await?;
        ensure_user(&mut conn, user).await?;

        let liked: bool = diesel::select(exists(course_likes::table.find((course, user))))
            .get_result(&mut conn)
            .await?;
        Ok(liked)
    }

    async fn like_count(&self, course_id: &CourseId) -> Result<u64, ReactionRepositoryError> {
        let course = *course_id.as_uuid();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        ensure_course(&mut conn, course).await?;

        let count: i64 = course_likes::table
            .filter(course_likes::course_id.eq(course))
            .count()
            .get_result(&mut conn)
            .await?;
        u64::try_from(count)
            .map_err(|_| ReactionRepositoryError::query("negative like count from storage"))
    }
}
