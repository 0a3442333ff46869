mod config;
mod db;
mod docs;
mod error;
mod handlers;
mod importer;
mod models;
mod state;
mod store;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use handlers::{import_stocks, search_stocks};
use state::AppState;
use store::PgStockStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    let pool = db::create_pool(&config).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState {
        store: Arc::new(PgStockStore::new(pool)),
        config: config.clone(),
    };

    let app = router(state);

    info!("Server listening on http://{}", config.bind_addr);

    axum::serve(tokio::net::TcpListener::bind(config.bind_addr).await?, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/openapi.json", get(docs::openapi))
        .route("/api/stocks", get(search_stocks))
        .route("/api/import-stocks", post(import_stocks))
        .layer(DefaultBodyLimit::max(state.config.max_csv_bytes))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
