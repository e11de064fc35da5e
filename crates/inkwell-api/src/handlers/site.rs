//! Public site information: the base URL media links are built from.

use crate::constants::media_url_template;
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, Json};
use inkwell_core::resolve_base_url;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SiteInfoResponse {
    /// Absolute base URL of the site, without a trailing slash
    pub base_url: String,
    /// URL of a media asset, with `{id}` left as a placeholder
    pub media_url_template: String,
}

#[utoipa::path(
    get,
    path = "/api/site",
    tag = "site",
    responses(
        (status = 200, description = "Resolved site base URL", body = SiteInfoResponse)
    )
)]
pub async fn get_site(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<SiteInfoResponse> {
    let base_url = resolve_base_url(&state.base_url_env, &headers);
    tracing::debug!(base_url = %base_url, "Resolved base URL");

    Json(SiteInfoResponse {
        media_url_template: media_url_template(&base_url),
        base_url,
    })
}
