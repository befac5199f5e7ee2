//! OpenAPI document served by Swagger UI in debug builds.

use utoipa::OpenApi;

/// Public OpenAPI surface for the course-catalog endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::catalogue::list_courses,
        crate::inbound::http::reactions::like_course,
        crate::inbound::http::reactions::dislike_course,
        crate::inbound::http::reactions::check_course_like,
        crate::inbound::http::reactions::course_like_count,
        crate::inbound::http::wishlist::user_wishlist,
        crate::inbound::http::upload::upload_catalogue,
        crate::inbound::http::upload::upload_success,
    ),
    tags(
        (name = "accounts", description = "Session login and logout"),
        (name = "catalogue", description = "Course catalogue reads"),
        (name = "reactions", description = "Like/dislike ledger"),
        (name = "wishlist", description = "Stored interests projection"),
        (name = "admin", description = "Catalogue spreadsheet ingestion"),
    )
)]
pub struct ApiDoc;
