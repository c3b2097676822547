//! Shopping Cart State Management
//!
//! This module manages the application state shared between request
//! handlers. The state owns the cart store; nothing else holds references
//! into it.

use super::store::CartStore;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state owning the cart store
pub struct AppState {
    /// In-memory storage for carts
    pub store: CartStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state with the demo carts the service serves out of the box
    pub fn new() -> Self {
        Self {
            store: CartStore::seeded(),
        }
    }

    /// Creates state with an empty store
    pub fn empty() -> Self {
        Self {
            store: CartStore::new(),
        }
    }
}
