//! Product Inventory Service - REST API for an in-memory product catalog.
//!
//! This is a REST API server that keeps product records in process memory and
//! exposes list/create/delete/update endpoints guarded by a single static
//! bearer token.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory collection behind an owned [`store::ProductStore`]
//!   handle, shared with handlers via router state
//! - **Authentication**: Static bearer token checked by middleware
//! - **Format**: JSON requests/responses
//!
//! The router is assembled by [`app`] so integration tests can drive the full
//! middleware and handler stack without binding a socket.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::store::ProductStore;

/// Shared application state, cloned into every handler via `State` extraction.
///
/// Each test builds its own `AppState`, so every test case runs against an
/// isolated product collection.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory product collection
    pub store: ProductStore,

    /// The token every request must present as `Authorization: Bearer <token>`
    pub auth_token: String,
}

impl AppState {
    /// Create state with an empty product collection.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            store: ProductStore::new(),
            auth_token: auth_token.into(),
        }
    }
}

/// Assemble the application router with all routes and middleware.
///
/// The four product routes sit behind the bearer token middleware. The health
/// probe is mounted outside the auth gate so monitoring needs no credentials.
pub fn app(state: AppState) -> Router {
    // Authenticated routes (product API)
    let product_routes = Router::new()
        .route("/product/all", get(handlers::products::list_products))
        .route("/product", post(handlers::products::create_product))
        .route("/product/{id}", delete(handlers::products::delete_product))
        .route("/product/{id}", put(handlers::products::update_product))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .merge(product_routes)
        // Per-request logs for observability
        .layer(TraceLayer::new_for_http())
        // Share the store and token with all handlers via State extraction
        .with_state(state)
}
