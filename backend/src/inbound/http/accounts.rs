//! Login and logout HTTP handlers.
//!
//! Authentication itself is delegated to the [`LoginService`] collaborator;
//! these handlers only exchange credentials for a session cookie.
//!
//! [`LoginService`]: crate::domain::ports::LoginService

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error};

/// Request payload for a login attempt.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Authenticate and persist the user id in the session cookie.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 204, description = "Logged in; session cookie set"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest { username, password } = body.into_inner();
    let username = username.ok_or_else(|| missing_field_error(FieldName::new("username")))?;
    let password = password.ok_or_else(|| missing_field_error(FieldName::new("password")))?;
    let credentials = LoginCredentials::try_from_parts(username, password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;

    let user_id = state.login.authenticate(&credentials).await?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["accounts"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.clear();
    Ok(HttpResponse::NoContent().finish())
}
