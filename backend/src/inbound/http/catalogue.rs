//! Catalogue listing HTTP handler.

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Course, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// One course as serialized to the caller.
///
/// Decimal fields are rendered as strings so clients never lose precision to
/// floating-point JSON numbers.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseBody {
    pub id: String,
    pub site: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub url: String,
    pub price: String,
    pub rating: String,
    pub thumbnail_url: String,
    pub is_package: bool,
    pub is_free: bool,
    pub enrollment_count: u64,
    pub upload_date: String,
}

impl From<Course> for CourseBody {
    fn from(value: Course) -> Self {
        Self {
            id: value.id.to_string(),
            site: value.site,
            title: value.title,
            instructor: value.instructor,
            description: value.description,
            url: value.url,
            price: value.price.to_string(),
            rating: value.rating.to_string(),
            thumbnail_url: value.thumbnail_url,
            is_package: value.is_package,
            is_free: value.is_free,
            enrollment_count: value.enrollment_count,
            upload_date: value.upload_date.to_string(),
        }
    }
}

/// Response payload for the catalogue listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoursesResponse {
    pub courses: Vec<CourseBody>,
}

/// List every stored course.
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "All courses", body = CoursesResponse),
        (status = 503, description = "Catalogue unavailable", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let courses = state.catalogue.list_courses().await?;
    Ok(HttpResponse::Ok().json(CoursesResponse {
        courses: courses.into_iter().map(CourseBody::from).collect(),
    }))
}
