//! Admin catalogue upload HTTP handlers.
//!
//! The upload is a multipart form with a single `csv_file` part. Bytes are
//! drained chunk by chunk against a hard size cap before the import command
//! sees them; the success page itself belongs to the external template
//! renderer, so success is a redirect and failures surface the JSON error
//! payload for the form to display.

use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use futures_util::StreamExt as _;
use serde_json::json;
use tracing::info;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error};

/// Hard cap on uploaded spreadsheet size.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Location clients are redirected to after a committed import.
pub const UPLOAD_SUCCESS_LOCATION: &str = "/upload/success";

async fn read_csv_field(payload: &mut Multipart) -> Result<Vec<u8>, Error> {
    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|err| Error::invalid_request(format!("malformed multipart payload: {err}")))?;
        if field.name() != "csv_file" {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|err| {
                Error::invalid_request(format!("upload interrupted mid-stream: {err}"))
            })?;
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(Error::invalid_request(format!(
                    "csv_file exceeds the {MAX_UPLOAD_BYTES} byte upload limit",
                ))
                .with_details(json!({ "field": "csv_file", "code": "too_large" })));
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok(bytes);
    }
    Err(missing_field_error(FieldName::new("csv_file")))
}

/// Ingest an uploaded catalogue spreadsheet.
#[utoipa::path(
    post,
    path = "/upload",
    request_body(content_type = "multipart/form-data", description = "Form with a csv_file part"),
    responses(
        (status = 303, description = "Import committed; redirect to the success page"),
        (status = 400, description = "Missing file or structural defect in the upload", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Catalogue store unavailable", body = Error)
    ),
    tags = ["admin"],
    operation_id = "uploadCatalogue"
)]
#[post("/upload")]
pub async fn upload_catalogue(
    state: web::Data<HttpState>,
    session: SessionContext,
    mut payload: Multipart,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let csv_bytes = read_csv_field(&mut payload).await?;
    let outcome = state.catalogue_import.import_csv(&csv_bytes).await?;
    info!(
        courses = outcome.courses,
        upload_date = %outcome.upload_date,
        "catalogue upload committed",
    );
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, UPLOAD_SUCCESS_LOCATION))
        .finish())
}

/// Success indicator the upload redirect lands on.
#[utoipa::path(
    get,
    path = "/upload/success",
    responses((status = 200, description = "Upload success marker")),
    tags = ["admin"],
    operation_id = "uploadSuccess"
)]
#[get("/upload/success")]
pub async fn upload_success() -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
