// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn_with_state,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use listenfd::ListenFd;
use anyhow::Result;

use crate::api::pages::routes::page_routes;
use crate::config::state::AppState;
use crate::pipeline::pipeline_middleware;
use crate::utils::error_handler::handle_global_error;

/// Creates and configures the application router with all middleware layers.
///
/// The session layer sits outermost so the pipeline can read and write the
/// per-session prototype data; the pipeline runs before routing so a tilde
/// redirect short-circuits page rendering entirely.
pub fn create_app() -> Router {
    let state: &'static AppState = AppState::instance();
    let env: &std::sync::Arc<crate::config::environment::EnvironmentVariables> = &state.environment;

    // Prototype data lives in memory for the lifetime of the process; the
    // cookie is not marked Secure because prototypes run over plain HTTP.
    let session_store: MemoryStore = MemoryStore::default();
    let session_layer: SessionManagerLayer<MemoryStore> =
        SessionManagerLayer::new(session_store).with_secure(false);

    Router::new()
        .merge(page_routes())
        .layer(
            ServiceBuilder::new()
                .layer(session_layer)
                .layer(from_fn_with_state(state.clone(), pipeline_middleware))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
        )
        .with_state(state.clone())
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener() -> Result<TcpListener> {
    let env: &std::sync::Arc<crate::config::environment::EnvironmentVariables> = &AppState::instance().environment;
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
