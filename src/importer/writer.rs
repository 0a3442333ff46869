use tracing::{error, info};

use crate::models::StockRecord;
use crate::store::StockStore;

pub const BATCH_SIZE: usize = 500;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub inserted: usize,
    pub errors: usize,
}

/// Writes `records` in consecutive batches, one upsert per batch, strictly in
/// order. A failed batch is logged and counted; the remaining batches are
/// still written and nothing is retried.
pub async fn write_batches(
    store: &dyn StockStore,
    records: &[StockRecord],
    batch_size: usize,
) -> WriteOutcome {
    let batch_size = batch_size.max(1);
    let mut outcome = WriteOutcome::default();

    for (index, batch) in records.chunks(batch_size).enumerate() {
        match store.upsert_ignore_duplicates(batch).await {
            Ok(()) => outcome.inserted += batch.len(),
            Err(e) => {
                error!("Batch error at {}: {}", index * batch_size, e);
                outcome.errors += 1;
            }
        }
    }

    info!(
        "Import complete: {} stocks processed, {} batch errors",
        outcome.inserted, outcome.errors
    );
    outcome
}
