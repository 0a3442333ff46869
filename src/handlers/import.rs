use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::AppError,
    importer::import_csv,
    models::{ImportRequest, ImportResponse},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/import-stocks",
    tag = "stocks",
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Import finished, possibly with failed batches", body = ImportResponse),
        (status = 400, description = "csvData missing or empty", body = crate::error::ErrorBody),
        (status = 500, description = "Unreadable body or unexpected failure", body = crate::error::ErrorBody)
    )
)]
pub async fn import_stocks(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ImportResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let csv_data = req
        .csv_data
        .filter(|data| !data.is_empty())
        .ok_or(AppError::MissingCsvData)?;

    let summary = import_csv(state.store.as_ref(), &csv_data).await;

    Ok(Json(summary.into()))
}
