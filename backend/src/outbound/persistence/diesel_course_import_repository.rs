//! PostgreSQL-backed catalogue import adapter.
//!
//! The whole batch commits in one transaction: course upserts keyed on
//! `(site, url)`, conflict-tolerant tag get-or-create, and the tag
//! associations. Any failure rolls the catalogue back to its prior state.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::debug;
use uuid::Uuid;

use crate::domain::course::CourseRecord;
use crate::domain::ports::{CourseImportRepository, CourseImportRepositoryError};

use super::models::{NewCourseRow, NewTagRow};
use super::pool::{DbPool, PoolError};
use super::schema::{course_tags, courses, tags};

/// Diesel-backed implementation of the course import port.
#[derive(Clone)]
pub struct DieselCourseImportRepository {
    pool: DbPool,
}

impl DieselCourseImportRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CourseImportRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CourseImportRepositoryError::connection(message)
        }
    }
}

impl From<diesel::result::Error> for CourseImportRepositoryError {
    fn from(error: diesel::result::Error) -> Self {
        let error_message = error.to_string();
        debug!(%error_message, "course import diesel operation failed");
        Self::query(error_message)
    }
}

#[async_trait]
impl CourseImportRepository for DieselCourseImportRepository {
    async fn import_courses(
        &self,
        records: &[CourseRecord],
    ) -> Result<u64, CourseImportRepositoryError> {
        if records.is_empty() {
            return Ok(0);
        }

        // Materialize owned rows before the transaction so the closure owns
        // everything it touches.
        let batch: Vec<(NewCourseRow, Vec<String>)> = records
            .iter()
            .map(|record| {
                let tag_names = record.tags.iter().map(|tag| tag.as_str().to_owned()).collect();
                (NewCourseRow::from(record), tag_names)
            })
            .collect();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction::<_, CourseImportRepositoryError, _>(|conn| {
            async move {
                let mut imported = 0u64;
                for (row, tag_names) in &batch {
                    let course_id: Uuid = diesel::insert_into(courses::table)
                        .values(row)
                        .on_conflict((courses::site, courses::url))
                        .do_update()
                        .set((
                            courses::title.eq(excluded(courses::title)),
                            courses::instructor.eq(excluded(courses::instructor)),
                            courses::description.eq(excluded(courses::description)),
                            courses::price.eq(excluded(courses::price)),
                            courses::rating.eq(excluded(courses::rating)),
                            courses::thumbnail_url.eq(excluded(courses::thumbnail_url)),
                            courses::is_package.eq(excluded(courses::is_package)),
                            courses::is_free.eq(excluded(courses::is_free)),
                            courses::enrollment_count.eq(excluded(courses::enrollment_count)),
                            courses::upload_date.eq(excluded(courses::upload_date)),
                        ))
                        .returning(courses::id)
                        .get_result(conn)
                        .await?;

                    if !tag_names.is_empty() {
                        let new_tags: Vec<NewTagRow> = tag_names
                            .iter()
                            .map(|name| NewTagRow {
                                id: Uuid::new_v4(),
                                name: name.clone(),
                            })
                            .collect();
                        diesel::insert_into(tags::table)
                            .values(&new_tags)
                            .on_conflict(tags::name)
                            .do_nothing()
                            .execute(conn)
                            .await?;

                        let tag_ids: Vec<Uuid> = tags::table
                            .filter(tags::name.eq_any(tag_names))
                            .select(tags::id)
                            .load(conn)
                            .await?;

                        let associations: Vec<_> = tag_ids
                            .iter()
                            .map(|tag_id| {
                                (
                                    course_tags::course_id.eq(course_id),
                                    course_tags::tag_id.eq(*tag_id),
                                )
                            })
                            .collect();
                        diesel::insert_into(course_tags::table)
                            .values(&associations)
                            .on_conflict_do_nothing()
                            .execute(conn)
                            .await?;
                    }

                    imported += 1;
                }
                Ok(imported)
            }
            .scope_boxed()
        })
        .await
    }
}
