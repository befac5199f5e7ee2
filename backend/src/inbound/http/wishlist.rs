//! Wishlist HTTP handler.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, UserId, WishlistEntry};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_uuid};

/// Request payload naming the wishlist owner.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct WishlistRequest {
    pub user_id: Option<String>,
}

/// One wishlist row as serialized to the caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistEntryBody {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
}

impl From<WishlistEntry> for WishlistEntryBody {
    fn from(value: WishlistEntry) -> Self {
        Self {
            id: value.id.to_string(),
            course_id: value.course_id.to_string(),
            course_name: value.course_name,
        }
    }
}

/// Response payload for the wishlist endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistResponse {
    pub wishlist: Vec<WishlistEntryBody>,
}

/// Project the user's stored interests in stored order.
#[utoipa::path(
    post,
    path = "/wishlist",
    request_body = WishlistRequest,
    responses(
        (status = 200, description = "Wishlist entries", body = WishlistResponse),
        (status = 400, description = "user_id missing or malformed", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["wishlist"],
    operation_id = "userWishlist"
)]
#[post("/wishlist")]
pub async fn user_wishlist(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Json<WishlistRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let raw = body
        .into_inner()
        .user_id
        .ok_or_else(|| missing_field_error(FieldName::new("user_id")))?;
    let user_id = UserId::from_uuid(parse_uuid(&raw, FieldName::new("user_id"))?);

    let wishlist = state.wishlist.wishlist(&user_id).await?;
    Ok(HttpResponse::Ok().json(WishlistResponse {
        wishlist: wishlist.into_iter().map(WishlistEntryBody::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    //! Serialisation coverage for the wishlist projection.
    use crate::domain::CourseId;

    use super::*;

    #[test]
    fn entry_body_flattens_the_projection() {
        let course_id = CourseId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
        let body = WishlistEntryBody::from(WishlistEntry {
            id: course_id,
            course_id,
            course_name: "Intro to Rust".to_owned(),
        });
        assert_eq!(body.id, body.course_id);
        assert_eq!(body.course_name, "Intro to Rust");
    }
}
