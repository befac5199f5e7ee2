//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::course::CourseRecord;

use super::schema::{courses, tags};

/// Row struct for reading from the courses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub id: Uuid,
    pub site: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub url: String,
    pub price: Decimal,
    pub rating: Decimal,
    pub thumbnail_url: String,
    pub is_package: bool,
    pub is_free: bool,
    pub enrollment_count: i64,
    pub upload_date: NaiveDate,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for upserting course records.
///
/// Owns its values so batches can be built before entering a transaction.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow {
    pub id: Uuid,
    pub site: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub url: String,
    pub price: Decimal,
    pub rating: Decimal,
    pub thumbnail_url: String,
    pub is_package: bool,
    pub is_free: bool,
    pub enrollment_count: i64,
    pub upload_date: NaiveDate,
}

impl From<&CourseRecord> for NewCourseRow {
    fn from(record: &CourseRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            site: record.site.clone(),
            title: record.title.clone(),
            instructor: record.instructor.clone(),
            description: record.description.clone(),
            url: record.url.clone(),
            price: record.price,
            rating: record.rating,
            thumbnail_url: record.thumbnail_url.clone(),
            is_package: record.is_package,
            is_free: record.is_free,
            enrollment_count: i64::try_from(record.enrollment_count).unwrap_or(i64::MAX),
            upload_date: record.upload_date,
        }
    }
}

/// Insertable struct for get-or-create tag writes.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tags)]
pub(crate) struct NewTagRow {
    pub id: Uuid,
    pub name: String,
}
