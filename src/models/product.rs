//! Product data model and API request/response types.
//!
//! This module defines:
//! - `Product`: the stored inventory record
//! - `CreateProductRequest`: request body for creating products
//! - `UpdateProductRequest`: partial request body for updating products
//! - `MessageResponse`: the `{"message": ...}` body returned by mutations

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single inventory line item.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 0,
///   "name": "Pen",
///   "type": "Stationery",
///   "price": 10.0,
///   "amount": 5.0
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique identifier, assigned by the store at creation and never reused
    /// for the lifetime of the process
    pub id: u64,

    /// Human-readable product name, never empty
    pub name: String,

    /// Product category, never empty
    ///
    /// Serialized as `type`; renamed because `type` is a Rust keyword.
    #[serde(rename = "type")]
    pub product_type: String,

    /// Unit price, never negative
    pub price: f64,

    /// Stock quantity, never negative
    ///
    /// Stored as a float: creation accepts fractional quantities, only the
    /// update path restricts the value to whole numbers.
    pub amount: f64,
}

/// Request body for creating a new product.
///
/// All four fields are required, but each is declared optional so the handler
/// can reject an incomplete body with the documented message instead of a
/// deserialization failure. `price` and `amount` stay raw JSON values until
/// [`as_number`] coerces them, since clients may send numbers or numeric
/// strings.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub product_type: Option<String>,

    pub price: Option<Value>,

    pub amount: Option<Value>,
}

/// Request body for updating an existing product.
///
/// Any subset of the four fields may be supplied; at least one must be.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub product_type: Option<String>,

    pub price: Option<Value>,

    pub amount: Option<Value>,
}

/// Response body for successful mutations.
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "Product add"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Interpret a JSON value as a number.
///
/// Accepts native JSON numbers and strings that parse to a finite number.
/// Everything else (booleans, arrays, objects, non-numeric text) is rejected.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
