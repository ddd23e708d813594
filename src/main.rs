//! Server binary: env config, pool, schema, routes, serve.

use axum::Router;
use campus_api::{api_routes, common_routes_with_ready, db, AppState, Config};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("campus_api=info".parse()?))
        .init();

    let config = Config::from_env();
    let pool = db::connect(&config.database_url).await?;
    db::apply_schema(&pool).await?;
    let state = AppState { pool };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
