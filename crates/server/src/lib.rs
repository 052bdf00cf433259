pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

use axum::{Router, middleware, routing::get};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_page))
        .route("/api", get(handlers::api_home))
        .route("/api/", get(handlers::api_home))
        .route("/api/ConstantDefinition/{id}", get(handlers::get_definition))
        .route("/api/ConstantInstance/{id}", get(handlers::get_instance))
        .route("/api/search", get(handlers::search))
        .route("/api/stats", get(handlers::stats))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(handlers::log_request))
        .with_state(state)
}

pub async fn run_http_server(
    state: AppState,
    addr: SocketAddr,
    cancel_token: CancellationToken,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state, cancel_token).await
}

/// Serve on an already bound listener until `cancel_token` fires.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    cancel_token: CancellationToken,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Catalog server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await?;

    info!("Catalog server stopped");
    Ok(())
}
