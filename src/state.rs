use std::sync::Arc;

use crate::config::Config;
use crate::store::StockStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StockStore>,
    pub config: Config,
}
