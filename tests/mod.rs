//! tests/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

use axum::{serve, Router};
use sketchkit::core::server::create_app;
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app() -> String {
    // * Build the application with the same layers as main().
    let app: Router = create_app();

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}

/// A client that keeps session cookies and never follows redirects, so
/// tests can assert on the redirect itself and then observe the session.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client")
}
