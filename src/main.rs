use lectern_admin_api::{config, database::Database, handlers, session::SessionStore};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and the shared secrets.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Lectern Admin API in {:?} mode", config.environment);

    // Best effort: the server still serves liveness when the database is down.
    if std::env::var("DATABASE_URL").is_ok() {
        if let Err(e) = Database::migrate().await {
            tracing::warn!("skipping migrations: {}", e);
        }
    } else {
        tracing::warn!("DATABASE_URL not set; starting without a database");
    }

    let app = handlers::app(SessionStore::new());

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Lectern Admin API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
