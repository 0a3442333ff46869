pub mod import;
pub mod stocks;

pub use import::import_stocks;
pub use stocks::search_stocks;
