use axum::Json;
use utoipa::OpenApi;

use crate::{error::ErrorBody, handlers, models};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::import::import_stocks, handlers::stocks::search_stocks),
    components(schemas(
        models::ImportRequest,
        models::ImportResponse,
        models::ImportSummary,
        models::StoredStock,
        ErrorBody
    )),
    tags((name = "stocks", description = "Stock catalogue import and search"))
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
