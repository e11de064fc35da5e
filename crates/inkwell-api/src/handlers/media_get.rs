//! Watermarked media retrieval.
//!
//! `GET /api/media/{id}` resolves an asset through the storage collaborator and
//! serves the payload with an immutable, year-long cache policy. Unknown,
//! malformed and undecodable ids answer a plain-text 404; storage failures go
//! through `HttpAppError`.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use inkwell_core::constants::{IMMUTABLE_CACHE_CONTROL, NOT_FOUND_BODY};
use inkwell_core::AppError;
use inkwell_storage::load_watermarked_media;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Instant;

#[utoipa::path(
    get,
    path = "/api/media/{id}",
    tag = "media",
    params(
        ("id" = String, Path, description = "Watermarked media identifier")
    ),
    responses(
        (
            status = 200,
            description = "Watermarked media payload",
            content_type = "application/octet-stream"
        ),
        (status = 304, description = "Not modified; the cached copy is current"),
        (status = 404, description = "Media not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage or internal failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(operation = "get_media"))]
pub async fn get_media(
    id: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    // An id that does not percent-decode to UTF-8 cannot name a stored asset.
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable media id");
            return not_found();
        }
    };

    serve_media(&state, &id, &headers)
        .await
        .unwrap_or_else(|err| err.render(state.config.is_production()))
}

/// `GET /api/media/` with an empty identifier.
pub async fn get_media_empty(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    serve_media(&state, "", &headers)
        .await
        .unwrap_or_else(|err| err.render(state.config.is_production()))
}

async fn serve_media(
    state: &AppState,
    id: &str,
    headers: &HeaderMap,
) -> Result<Response, HttpAppError> {
    let started = Instant::now();

    let Some(asset) = load_watermarked_media(state.storage.as_ref(), id).await? else {
        tracing::debug!(media_id = %id, "Media not found");
        return Ok(not_found());
    };

    let etag = entity_tag(&asset.buffer);

    if if_none_match_hits(headers, &etag) {
        tracing::debug!(media_id = %id, "Media not modified");
        return Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header(header::ETAG, &etag)
            .header(header::CACHE_CONTROL, IMMUTABLE_CACHE_CONTROL)
            .body(Body::empty())
            .map_err(build_error);
    }

    tracing::debug!(
        media_id = %id,
        mime_type = %asset.mime_type(),
        size_bytes = asset.size(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Serving watermarked media"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, asset.mime_type())
        .header(header::CONTENT_LENGTH, asset.size())
        .header(header::CACHE_CONTROL, IMMUTABLE_CACHE_CONTROL)
        .header(header::ETAG, &etag)
        .body(Body::from(asset.buffer))
        .map_err(build_error)
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        NOT_FOUND_BODY,
    )
        .into_response()
}

fn build_error(e: axum::http::Error) -> HttpAppError {
    tracing::error!(error = %e, "Failed to build response");
    HttpAppError::from(AppError::Internal(e.to_string()))
}

/// Strong entity tag: quoted hex SHA-256 of the payload.
fn entity_tag(payload: &[u8]) -> String {
    format!("\"{}\"", hex::encode(Sha256::digest(payload)))
}

/// `If-None-Match` uses weak comparison, so a `W/` prefix is ignored.
fn if_none_match_hits(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|candidate| {
            candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
        })
}
