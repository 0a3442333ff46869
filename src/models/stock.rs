use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// A symbol/company pair accepted by the importer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRecord {
    pub symbol: String,
    pub company_name: String,
}

impl StockRecord {
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct StoredStock {
    pub id: Uuid,
    pub symbol: String,
    pub company_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StockSearchQuery {
    /// Substring matched against symbol and company name.
    pub q: Option<String>,
    /// Maximum rows returned, 10 by default and at most 100.
    pub limit: Option<i64>,
}
