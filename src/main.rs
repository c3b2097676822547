use cart_backend::cart::AppState;
use cart_backend::config::Config;
use cart_backend::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Read runtime configuration from the process environment
    let config = Config::from_env();
    config.environment.set_active();

    // Initialize application state with the demo carts
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Backend API server listening on port {}", config.port);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
