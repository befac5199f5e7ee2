//! PostgreSQL-backed catalogue listing adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::course::{Course, CourseId};
use crate::domain::ports::CatalogueQuery;
use crate::domain::Error;

use super::models::CourseRow;
use super::pool::DbPool;
use super::schema::courses;

/// Diesel-backed implementation of the catalogue query port.
#[derive(Clone)]
pub struct DieselCatalogueQuery {
    pool: DbPool,
}

impl DieselCatalogueQuery {
    /// Create a new query adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn course_from_row(row: CourseRow) -> Result<Course, Error> {
    let enrollment_count = u64::try_from(row.enrollment_count)
        .map_err(|_| Error::internal("negative enrollment count in storage"))?;
    Ok(Course {
        id: CourseId::from_uuid(row.id),
        site: row.site,
        title: row.title,
        instructor: row.instructor,
        description: row.description,
        url: row.url,
        price: row.price,
        rating: row.rating,
        thumbnail_url: row.thumbnail_url,
        is_package: row.is_package,
        is_free: row.is_free,
        enrollment_count,
        upload_date: row.upload_date,
    })
}

#[async_trait]
impl CatalogueQuery for DieselCatalogueQuery {
    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| Error::service_unavailable(err.to_string()))?;

        let rows: Vec<CourseRow> = courses::table
            .order(courses::created_at.asc())
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| {
                let error_message = err.to_string();
                debug!(%error_message, "catalogue listing diesel operation failed");
                Error::internal("course listing failed")
            })?;

        rows.into_iter().map(course_from_row).collect()
    }
}
