//! HTTP surface of the payment system.
//!
//! Every route is stateless; the router carries no shared state.

pub mod handlers;

use crate::config::ServerConfig;
use crate::error::Result;
use axum::Router;
use axum::routing::{get, post};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builds the payment API router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/cart/{id}", get(handlers::cart))
        .route("/available_payments", get(handlers::available_payments))
        .route("/login", post(handlers::login))
        .method_not_allowed_fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
}

/// Binds to the configured address and serves until `shutdown` resolves.
pub async fn serve<F>(config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await.inspect_err(|e| {
        tracing::error!(addr = %addr, error = %e, "Failed to bind payment API");
    })?;

    serve_listener(listener, shutdown).await
}

/// Serves the router on an already bound listener.
pub async fn serve_listener<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(addr = %addr, "API available on localhost port {}", addr.port());

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Payment API stopped");
    Ok(())
}
