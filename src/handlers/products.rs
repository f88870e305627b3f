//! Product management HTTP handlers.
//!
//! This module implements the product API endpoints:
//! - GET /product/all - List all products
//! - POST /product - Create a new product
//! - DELETE /product/:id - Delete a product
//! - PUT /product/:id - Update fields of a product
//!
//! Handlers translate between HTTP and the store; all validation and
//! mutation lives in [`crate::store::ProductStore`].

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::AppError,
    models::product::{CreateProductRequest, MessageResponse, Product, UpdateProductRequest},
};

/// List every product.
///
/// # Endpoint
///
/// `GET /product/all`
///
/// # Response
///
/// - **Success (200 OK)**: Array of products in insertion order (may be empty)
/// - **Error (401)**: Missing or invalid bearer token
/// - **Error (500)**: Store fault
///
/// ```json
/// [
///   {"id": 0, "name": "Pen", "type": "Stationery", "price": 10.0, "amount": 5.0}
/// ]
/// ```
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.store.list()?))
}

/// Create a new product.
///
/// # Endpoint
///
/// `POST /product`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Pen",
///   "type": "Stationery",
///   "price": 10,
///   "amount": 5
/// }
/// ```
///
/// All four fields are required. `price` and `amount` must be non-negative
/// numbers; numeric strings are accepted.
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "Product add"}`
/// - **Error (400)**: Validation failure, message names the first violated rule
/// - **Error (401)**: Missing or invalid bearer token
/// - **Error (500)**: Store fault
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.create(request)?;
    Ok(Json(MessageResponse {
        message: "Product add",
    }))
}

/// Delete a product by id.
///
/// # Endpoint
///
/// `DELETE /product/:id`
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "Product deleted"}`
/// - **Error (400)**: Non-numeric id, or no product with that id
/// - **Error (401)**: Missing or invalid bearer token
/// - **Error (500)**: Store fault
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    state.store.delete(id)?;
    Ok(Json(MessageResponse {
        message: "Product deleted",
    }))
}

/// Update fields of an existing product.
///
/// # Endpoint
///
/// `PUT /product/:id`
///
/// # Request Body
///
/// Any subset of the product fields, at least one:
///
/// ```json
/// {
///   "price": 12,
///   "amount": 3
/// }
/// ```
///
/// Unlike creation, an updated `amount` must be a whole number.
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "Product updated"}`
/// - **Error (400)**: Non-numeric id, unknown id, or field validation failure
/// - **Error (401)**: Missing or invalid bearer token
/// - **Error (500)**: Store fault
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    state.store.update(id, request)?;
    Ok(Json(MessageResponse {
        message: "Product updated",
    }))
}

/// Parse the id path parameter.
///
/// Ids arrive as text; they are parsed to a number once here and compared
/// numerically by the store. Non-numeric text is rejected before any lookup.
fn parse_id(raw: &str) -> Result<f64, AppError> {
    raw.parse::<f64>()
        .ok()
        .filter(|id| id.is_finite())
        .ok_or(AppError::InvalidId)
}
