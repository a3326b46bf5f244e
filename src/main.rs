use std::sync::Arc;

use medremind_api::config;
use medremind_api::routes::app;
use medremind_api::store::{MemoryMedicineStore, PgMedicineStore, SharedStore};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, MEDREMIND_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting MedRemind API in {:?} mode", config.environment);

    let store: SharedStore = match &config.database.url {
        Some(url) => {
            let pg = PgMedicineStore::connect(url)
                .await
                .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));
            pg.ensure_schema()
                .await
                .unwrap_or_else(|e| panic!("failed to prepare database schema: {}", e));
            Arc::new(pg)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory store (data is not persisted)");
            Arc::new(MemoryMedicineStore::new())
        }
    };

    let app = app(store);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("💊 MedRemind API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
