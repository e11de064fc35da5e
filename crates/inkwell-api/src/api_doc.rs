//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inkwell API",
        version = "0.1.0",
        description = "Delivery of watermarked media assets. Assets are immutable once retrievable and are served with a year-long cache policy."
    ),
    paths(
        handlers::media_get::get_media,
        handlers::site::get_site,
    ),
    components(
        schemas(
            error::ErrorResponse,
            handlers::site::SiteInfoResponse,
            inkwell_core::MediaMeta,
        )
    ),
    tags(
        (name = "media", description = "Watermarked media retrieval"),
        (name = "site", description = "Site information")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
