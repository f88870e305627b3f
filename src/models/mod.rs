//! Data models for the product API.
//!
//! This module contains the stored product record and the request/response
//! types exchanged with clients.

/// Product entity and API request/response types
pub mod product;
