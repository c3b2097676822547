//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Cart, CartItem)
//! - The in-memory cart store
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
pub use store::CartStore;
