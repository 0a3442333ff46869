use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::{
    error::AppError,
    models::{StockSearchQuery, StoredStock},
    state::AppState,
};

const DEFAULT_SEARCH_LIMIT: i64 = 10;
const MAX_SEARCH_LIMIT: i64 = 100;

#[utoipa::path(
    get,
    path = "/api/stocks",
    tag = "stocks",
    params(StockSearchQuery),
    responses(
        (status = 200, description = "Stocks whose symbol or company name contains q", body = [StoredStock]),
        (status = 400, description = "Unparseable query string", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody)
    )
)]
pub async fn search_stocks(
    State(state): State<AppState>,
    params: Result<Query<StockSearchQuery>, QueryRejection>,
) -> Result<Json<Vec<StoredStock>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::InvalidQuery(e.body_text()))?;

    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let stocks = state.store.search(query, limit).await?;

    Ok(Json(stocks))
}
