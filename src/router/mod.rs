//! Routing module for the cart backend
//!
//! Builds the application router: the health probe, the cart API, a 404
//! fallback for unknown routes, and the middleware stack (request logging,
//! response timing, CORS).

use crate::cart::{self, state::SharedState};
use crate::config::Config;
use crate::error::ApiError;
use axum::http::{header, Method};
use axum::response::Response;
use axum::routing::get;
use axum::{body::Body, extract::Request, middleware::Next, Json, Router};
use serde::Serialize;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Body of the `GET /health` probe
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState, config: &Config) -> Router {
    // Middleware: one log line per request (method, path, status, latency)
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let start = Instant::now();

        let res = next.run(req).await;

        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            "{} {} {} - {:.3} ms",
            method,
            path,
            res.status().as_u16(),
            elapsed
        );
        res
    });

    // Routes
    Router::new()
        .route("/health", get(health))
        .nest("/api/carts", cart::routes())
        .fallback(unknown_route)
        .layer(log_layer)
        .layer(axum::middleware::from_fn(response_time))
        .layer(cors_layer(config))
        .with_state(state)
}

/// Endpoint: GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "backend",
    })
}

/// Fallback for requests matching no route
async fn unknown_route() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Middleware: stamps every response with an `x-response-time` header
async fn response_time(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();

    let mut res = next.run(req).await;

    let millis = format!("{:.3}ms", start.elapsed().as_secs_f64() * 1000.0);
    res.headers_mut()
        .insert("x-response-time", millis.parse().unwrap());
    res
}

/// Middleware: CORS, pinned to the configured frontend origin when one is
/// set, permissive otherwise. A wildcard origin may not be combined with
/// credentials, so the allow-all arm stays credential-less.
fn cors_layer(config: &Config) -> CorsLayer {
    match &config.frontend_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
