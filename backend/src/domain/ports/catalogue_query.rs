//! Driving port for catalogue reads.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::Error;
use crate::domain::course::{Course, CourseId};

/// Domain use-case port for listing the full catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Every stored course, oldest first.
    async fn list_courses(&self) -> Result<Vec<Course>, Error>;
}

/// Fixture catalogue with one deterministic course.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueQuery;

#[async_trait]
impl CatalogueQuery for FixtureCatalogueQuery {
    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        // Compile-time constants; surface invalid data as an internal error
        // so automated checks catch accidental regressions.
        let id = CourseId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .map_err(|err| Error::internal(format!("invalid fixture course id: {err}")))?;
        let upload_date = NaiveDate::from_ymd_opt(2026, 1, 1)
            .ok_or_else(|| Error::internal("invalid fixture upload date"))?;
        Ok(vec![Course {
            id,
            site: "udemy".to_owned(),
            title: "Fixture Course".to_owned(),
            instructor: "Ada Lovelace".to_owned(),
            description: "A deterministic catalogue entry.".to_owned(),
            url: "https://example.com/courses/fixture".to_owned(),
            price: Decimal::new(1999, 2),
            rating: Decimal::new(4500, 3),
            thumbnail_url: "https://example.com/thumbs/fixture.png".to_owned(),
            is_package: false,
            is_free: false,
            enrollment_count: 42,
            upload_date,
        }])
    }
}
