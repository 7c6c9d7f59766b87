// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use sketchkit::core::logging::init_tracing;
use sketchkit::core::server::{create_app, setup_listener, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    // build our router with the full pipeline and session layers
    let app: Router = create_app();

    // Listenfd integration (or plain bind from the environment)
    let listener: TcpListener = setup_listener().await?;

    println!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
