//! Service entry point: config, database bootstrap, router wiring.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use student_registry::{
    common_routes, ensure_database_exists, ensure_student_table, student_routes, AppState, Config,
    PgStudentService,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_registry=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    ensure_student_table(&pool).await?;

    let state = AppState {
        service: Arc::new(PgStudentService::new(pool)),
    };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
