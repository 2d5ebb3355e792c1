use std::sync::Arc;

use reelrank::{AppState, build_router, config::Config, db, seed, store::MovieStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelrank=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url, config.db_max_connections).await?;
    seed::bootstrap(&db, config.reset_on_start).await?;

    let state = Arc::new(AppState { config: config.clone(), store: MovieStore::new(db) });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, static_dir = %config.static_dir.display(), "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
