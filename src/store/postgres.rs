use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use super::{StockStore, StoreError};
use crate::models::{StockRecord, StoredStock};

pub struct PgStockStore {
    pool: PgPool,
}

impl PgStockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn upsert_ignore_duplicates(&self, batch: &[StockRecord]) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut query_builder =
            QueryBuilder::<Postgres>::new("INSERT INTO stocks (symbol, company_name) ");

        query_builder.push_values(batch, |mut b, stock| {
            b.push_bind(&stock.symbol).push_bind(&stock.company_name);
        });

        query_builder.push(" ON CONFLICT (symbol) DO NOTHING");

        let result = query_builder.build().execute(&self.pool).await?;

        debug!(
            "Upserted batch of {} stocks, {} new rows",
            batch.len(),
            result.rows_affected()
        );
        Ok(())
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<StoredStock>, StoreError> {
        let stocks = sqlx::query_as::<_, StoredStock>(
            r#"
            SELECT id, symbol, company_name, created_at
            FROM stocks
            WHERE symbol ILIKE $1 OR company_name ILIKE $1
            ORDER BY symbol
            LIMIT $2
            "#,
        )
        .bind(like_pattern(query))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(stocks)
    }
}

/// Wraps `query` in `%` after escaping the LIKE metacharacters it contains.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
