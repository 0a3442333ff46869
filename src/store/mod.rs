//! Persistence seam for the stock catalogue.
//!
//! The importer and the search handler only see [`StockStore`]; the
//! PostgreSQL implementation lives in [`postgres`].

mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{StockRecord, StoredStock};

pub use postgres::PgStockStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Inserts every record whose symbol is not already stored. Existing rows
    /// are left untouched.
    async fn upsert_ignore_duplicates(&self, batch: &[StockRecord]) -> Result<(), StoreError>;

    /// Case-insensitive substring search over symbol and company name.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<StoredStock>, StoreError>;
}
