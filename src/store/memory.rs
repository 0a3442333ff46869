use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{StockStore, StoreError};
use crate::models::{StockRecord, StoredStock};

/// In-process store with skip-on-conflict semantics. Calls listed in
/// `failing_calls` (zero-based, counted across the store's lifetime) fail
/// without writing anything.
#[derive(Default)]
pub struct MemoryStockStore {
    rows: Mutex<BTreeMap<String, StoredStock>>,
    batch_sizes: Mutex<Vec<usize>>,
    failing_calls: HashSet<usize>,
}

impl MemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing_calls: calls.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn company_name(&self, symbol: &str) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .get(symbol)
            .map(|s| s.company_name.clone())
    }

    /// Size of every batch passed to `upsert_ignore_duplicates`, failed ones included.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batch_sizes.lock().unwrap().clone()
    }
}

#[async_trait]
impl StockStore for MemoryStockStore {
    async fn upsert_ignore_duplicates(&self, batch: &[StockRecord]) -> Result<(), StoreError> {
        let call = {
            let mut sizes = self.batch_sizes.lock().unwrap();
            sizes.push(batch.len());
            sizes.len() - 1
        };

        if self.failing_calls.contains(&call) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }

        let mut rows = self.rows.lock().unwrap();
        for record in batch {
            rows.entry(record.symbol.clone())
                .or_insert_with(|| StoredStock {
                    id: Uuid::new_v4(),
                    symbol: record.symbol.clone(),
                    company_name: record.company_name.clone(),
                    created_at: Utc::now(),
                });
        }
        Ok(())
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<StoredStock>, StoreError> {
        let needle = query.to_lowercase();
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .filter(|s| {
                s.symbol.to_lowercase().contains(&needle)
                    || s.company_name.to_lowercase().contains(&needle)
            })
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }
}
