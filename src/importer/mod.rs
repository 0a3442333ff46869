//! CSV stock import: parse raw text, then write it through a [`StockStore`]
//! in fixed-size batches.

mod parser;
mod writer;

use tracing::info;

use crate::models::ImportSummary;
use crate::store::StockStore;

pub use parser::{parse_stock_csv, ParsedCsv};
pub use writer::{write_batches, WriteOutcome, BATCH_SIZE};

pub async fn import_csv(store: &dyn StockStore, csv: &str) -> ImportSummary {
    let ParsedCsv { records, skipped } = parse_stock_csv(csv);

    info!("Parsed {} stocks from CSV ({} rows skipped)", records.len(), skipped);

    let WriteOutcome { inserted, errors } = write_batches(store, &records, BATCH_SIZE).await;

    ImportSummary {
        parsed: records.len(),
        inserted,
        errors,
        skipped,
    }
}
