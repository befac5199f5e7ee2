//! Like/dislike HTTP handlers.
//!
//! ```text
//! POST /like/{course_id}
//! POST /dislike/{course_id}
//! POST /check_like/{course_id}
//! GET  /like_count/{course_id}
//! ```
//!
//! Wire field names are snake_case: the paths and payload shapes are an
//! external contract shared with existing clients.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{CourseId, Error, Reaction, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_uuid};

/// Request payload carrying the reacting user.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReactionRequest {
    pub user_id: Option<String>,
}

/// Response payload for `check_like`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckLikeResponse {
    /// 1 when the user currently likes the course, else 0.
    pub check: u8,
}

/// Response payload for `like_count`.
#[derive(Debug, Serialize, ToSchema)]
pub struct LikeCountResponse {
    pub like_count: u64,
}

fn parse_user_id(raw: Option<String>) -> Result<UserId, Error> {
    let raw = raw.ok_or_else(|| missing_field_error(FieldName::new("user_id")))?;
    let id = parse_uuid(&raw, FieldName::new("user_id"))?;
    Ok(UserId::from_uuid(id))
}

/// Record a like, displacing any dislike.
#[utoipa::path(
    post,
    path = "/like/{course_id}",
    request_body = ReactionRequest,
    params(("course_id" = Uuid, Path, description = "Course identifier")),
    responses(
        (status = 201, description = "Like recorded"),
        (status = 400, description = "user_id missing or malformed", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Course or user not found", body = Error)
    ),
    tags = ["reactions"],
    operation_id = "likeCourse"
)]
#[post("/like/{course_id}")]
pub async fn like_course(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    body: web::Json<ReactionRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let course_id = CourseId::from_uuid(path.into_inner());
    let user_id = parse_user_id(body.into_inner().user_id)?;
    state
        .reactions
        .react(&course_id, &user_id, Reaction::Like)
        .await?;
    Ok(HttpResponse::Created().json(json!({})))
}

/// Record a dislike, displacing any like.
#[utoipa::path(
    post,
    path = "/dislike/{course_id}",
    request_body = ReactionRequest,
    params(("course_id" = Uuid, Path, description = "Course identifier")),
    responses(
        (status = 202, description = "Dislike recorded"),
        (status = 400, description = "user_id missing or malformed", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Course or user not found", body = Error)
    ),
    tags = ["reactions"],
    operation_id = "dislikeCourse"
)]
#[post("/dislike/{course_id}")]
pub async fn dislike_course(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    body: web::Json<ReactionRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let course_id = CourseId::from_uuid(path.into_inner());
    let user_id = parse_user_id(body.into_inner().user_id)?;
    state
        .reactions
        .react(&course_id, &user_id, Reaction::Dislike)
        .await?;
    Ok(HttpResponse::Accepted().json(json!({})))
}

/// Report whether the user currently likes the course.
#[utoipa::path(
    post,
    path = "/check_like/{course_id}",
    request_body = ReactionRequest,
    params(("course_id" = Uuid, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Membership flag", body = CheckLikeResponse),
        (status = 400, description = "user_id missing or malformed", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Course or user not found", body = Error)
    ),
    tags = ["reactions"],
    operation_id = "checkCourseLike"
)]
#[post("/check_like/{course_id}")]
pub async fn check_course_like(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    body: web::Json<ReactionRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let course_id = CourseId::from_uuid(path.into_inner());
    let user_id = parse_user_id(body.into_inner().user_id)?;
    let liked = state.reactions.is_liked(&course_id, &user_id).await?;
    Ok(HttpResponse::Ok().json(CheckLikeResponse {
        check: u8::from(liked),
    }))
}

/// Report the cardinality of the course's like set.
#[utoipa::path(
    get,
    path = "/like_count/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Like count", body = LikeCountResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Course not found", body = Error)
    ),
    tags = ["reactions"],
    operation_id = "courseLikeCount"
)]
#[get("/like_count/{course_id}")]
pub async fn course_like_count(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let course_id = CourseId::from_uuid(path.into_inner());
    let like_count = state.reactions.like_count(&course_id).await?;
    Ok(HttpResponse::Ok().json(LikeCountResponse { like_count }))
}
