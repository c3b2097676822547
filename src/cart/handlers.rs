//! REST API handlers for shopping cart operations
//!
//! This module implements the HTTP endpoints for fetching a cart by id
//! and creating a new cart.

use super::{models::Cart, state::SharedState};
use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/:id", get(get_cart))
}

/// Endpoint: GET /api/carts/:id
///
/// Responds with the first cart matching the id, or 404 when no cart does.
async fn get_cart(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Cart>, ApiError> {
    state
        .store
        .find(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Cart not found"))
}

/// Endpoint: POST /api/carts
///
/// Appends the submitted cart to the store and echoes it back with 201.
/// The id is required; item shape is checked only by the typed decode.
async fn create_cart(
    State(state): State<SharedState>,
    Json(payload): Json<Cart>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.cart_id.is_empty() {
        return Err(ApiError::bad_request("Cart ID required"));
    }

    let cart = state.store.append(payload);
    Ok((StatusCode::CREATED, Json(cart)))
}
