//! Server binary: loads settings from env, opens the pool, ensures the
//! schema, and serves the API.

use cupcake_api::{app_router, connect, ensure_schema, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cupcake_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env();
    let pool = connect(&settings).await?;
    ensure_schema(&pool).await?;

    let app = app_router(AppState { pool });

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
