//! In-memory product store.
//!
//! The store owns the ordered product collection and implements the four
//! operations the API exposes: list, create, delete, update. Field-level
//! validation lives here, next to the mutation it guards, so handlers stay
//! thin HTTP adapters.

use std::sync::{Arc, RwLock};

use crate::error::AppError;
use crate::models::product::{CreateProductRequest, Product, UpdateProductRequest, as_number};

/// Thread-safe handle to the shared product collection.
///
/// Cloning is cheap; all clones share the same underlying collection. Every
/// operation takes the lock once and completes while holding it, so each
/// request mutates the collection atomically. Identifiers come from a
/// monotonic counter rather than the collection length, which keeps ids
/// unique across delete/create cycles.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Debug, Default)]
struct StoreInner {
    products: Vec<Product>,
    next_id: u64,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, insertion order preserved.
    pub fn list(&self) -> Result<Vec<Product>, AppError> {
        let inner = self.inner.read()?;
        Ok(inner.products.clone())
    }

    /// Validate a candidate record and append it to the collection.
    ///
    /// Checks run in a fixed order and the first failure wins:
    ///
    /// 1. all four fields present, else [`AppError::InvalidData`]
    /// 2. `name` and `type` non-empty, else [`AppError::EmptyNameOrType`]
    /// 3. `price` and `amount` numeric, else [`AppError::PriceOrAmountNotNumeric`]
    /// 4. `price` and `amount` non-negative, else [`AppError::PriceOrAmountNegative`]
    ///
    /// Presence is checked explicitly, so `price: 0` and `amount: 0` are
    /// valid. A fractional `amount` is accepted here; only updates restrict
    /// the quantity to whole numbers.
    pub fn create(&self, request: CreateProductRequest) -> Result<Product, AppError> {
        let (Some(name), Some(product_type), Some(price), Some(amount)) = (
            request.name,
            request.product_type,
            request.price,
            request.amount,
        ) else {
            return Err(AppError::InvalidData);
        };

        if name.is_empty() || product_type.is_empty() {
            return Err(AppError::EmptyNameOrType);
        }

        let (Some(price), Some(amount)) = (as_number(&price), as_number(&amount)) else {
            return Err(AppError::PriceOrAmountNotNumeric);
        };

        if price < 0.0 || amount < 0.0 {
            return Err(AppError::PriceOrAmountNegative);
        }

        let mut inner = self.inner.write()?;
        let product = Product {
            id: inner.next_id,
            name,
            product_type,
            price,
            amount,
        };
        inner.next_id += 1;
        inner.products.push(product.clone());
        Ok(product)
    }

    /// Remove the product whose id matches, shifting later records to close
    /// the gap.
    pub fn delete(&self, id: f64) -> Result<(), AppError> {
        let mut inner = self.inner.write()?;
        let index = find_index(&inner.products, id).ok_or(AppError::ProductNotFound)?;
        inner.products.remove(index);
        Ok(())
    }

    /// Apply a partial update to the product whose id matches.
    ///
    /// At least one field must be supplied. Fields are validated in the fixed
    /// order name, type, price, amount, and the first invalid field rejects
    /// the whole request. Every supplied field is validated before any of
    /// them is written, so a rejected request leaves the record untouched.
    pub fn update(&self, id: f64, request: UpdateProductRequest) -> Result<(), AppError> {
        let mut inner = self.inner.write()?;
        let index = find_index(&inner.products, id).ok_or(AppError::ProductNotFound)?;

        if request.name.is_none()
            && request.product_type.is_none()
            && request.price.is_none()
            && request.amount.is_none()
        {
            return Err(AppError::InvalidData);
        }

        if let Some(name) = &request.name {
            if name.is_empty() {
                return Err(AppError::EmptyName);
            }
        }

        if let Some(product_type) = &request.product_type {
            if product_type.is_empty() {
                return Err(AppError::EmptyType);
            }
        }

        let price = match &request.price {
            Some(value) => {
                let price = as_number(value).ok_or(AppError::PriceNotNumeric)?;
                if price < 0.0 {
                    return Err(AppError::PriceNegative);
                }
                Some(price)
            }
            None => None,
        };

        let amount = match &request.amount {
            Some(value) => {
                let amount = as_number(value).ok_or(AppError::AmountNotNumeric)?;
                if amount < 0.0 {
                    return Err(AppError::AmountNegative);
                }
                if amount.fract() != 0.0 {
                    return Err(AppError::AmountNotInteger);
                }
                Some(amount)
            }
            None => None,
        };

        // All supplied fields validated; write them in place. The id is
        // never altered.
        let product = &mut inner.products[index];
        if let Some(name) = request.name {
            product.name = name;
        }
        if let Some(product_type) = request.product_type {
            product.product_type = product_type;
        }
        if let Some(price) = price {
            product.price = price;
        }
        if let Some(amount) = amount {
            product.amount = amount;
        }

        Ok(())
    }
}

/// Linear scan for the record matching a parsed id path parameter.
///
/// The parameter arrives as text and is parsed once by the handler; the
/// comparison here is numeric.
fn find_index(products: &[Product], id: f64) -> Option<usize> {
    products.iter().position(|product| product.id as f64 == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request(body: serde_json::Value) -> CreateProductRequest {
        serde_json::from_value(body).unwrap()
    }

    fn update_request(body: serde_json::Value) -> UpdateProductRequest {
        serde_json::from_value(body).unwrap()
    }

    fn store_with_pen() -> ProductStore {
        let store = ProductStore::new();
        store
            .create(create_request(
                json!({"name": "Pen", "type": "Stationery", "price": 10, "amount": 5}),
            ))
            .unwrap();
        store
    }

    #[test]
    fn create_assigns_sequential_ids_in_insertion_order() {
        let store = ProductStore::new();
        for name in ["Pen", "Pencil", "Eraser"] {
            store
                .create(create_request(
                    json!({"name": name, "type": "Stationery", "price": 1, "amount": 1}),
                ))
                .unwrap();
        }

        let products = store.list().unwrap();
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(names, vec!["Pen", "Pencil", "Eraser"]);
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let store = ProductStore::new();
        for name in ["Pen", "Pencil"] {
            store
                .create(create_request(
                    json!({"name": name, "type": "Stationery", "price": 1, "amount": 1}),
                ))
                .unwrap();
        }
        store.delete(0.0).unwrap();

        let product = store
            .create(create_request(
                json!({"name": "Eraser", "type": "Stationery", "price": 1, "amount": 1}),
            ))
            .unwrap();

        // With length-based ids this would collide with the surviving id 1.
        assert_eq!(product.id, 2);
        let ids: Vec<u64> = store.list().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn create_rejects_missing_fields() {
        let store = ProductStore::new();
        let bodies = [
            json!({}),
            json!({"name": "Pen"}),
            json!({"name": "Pen", "type": "Stationery", "price": 10}),
            json!({"type": "Stationery", "price": 10, "amount": 5}),
        ];
        for body in bodies {
            let err = store.create(create_request(body)).unwrap_err();
            assert!(matches!(err, AppError::InvalidData));
        }
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn create_rejects_empty_name_or_type() {
        let store = ProductStore::new();
        let err = store
            .create(create_request(
                json!({"name": "", "type": "Stationery", "price": 10, "amount": 5}),
            ))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyNameOrType));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn create_rejects_non_numeric_price_or_amount() {
        let store = ProductStore::new();
        let err = store
            .create(create_request(
                json!({"name": "Pen", "type": "Stationery", "price": "cheap", "amount": 5}),
            ))
            .unwrap_err();
        assert!(matches!(err, AppError::PriceOrAmountNotNumeric));
    }

    #[test]
    fn create_rejects_negative_price_or_amount() {
        let store = ProductStore::new();
        let err = store
            .create(create_request(
                json!({"name": "Pen", "type": "Stationery", "price": -1, "amount": 5}),
            ))
            .unwrap_err();
        assert!(matches!(err, AppError::PriceOrAmountNegative));
    }

    #[test]
    fn create_accepts_zero_price_and_amount() {
        // Zero is present, not missing; a free or out-of-stock product is valid.
        let store = ProductStore::new();
        let product = store
            .create(create_request(
                json!({"name": "Flyer", "type": "Paper", "price": 0, "amount": 0}),
            ))
            .unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.amount, 0.0);
    }

    #[test]
    fn create_accepts_fractional_amount() {
        let store = ProductStore::new();
        let product = store
            .create(create_request(
                json!({"name": "Rope", "type": "Hardware", "price": 2, "amount": 1.5}),
            ))
            .unwrap();
        assert_eq!(product.amount, 1.5);
    }

    #[test]
    fn create_accepts_numeric_strings() {
        let store = ProductStore::new();
        let product = store
            .create(create_request(
                json!({"name": "Pen", "type": "Stationery", "price": "10", "amount": "5"}),
            ))
            .unwrap();
        assert_eq!(product.price, 10.0);
        assert_eq!(product.amount, 5.0);
    }

    #[test]
    fn delete_removes_exactly_the_matching_record() {
        let store = ProductStore::new();
        for name in ["Pen", "Pencil", "Eraser"] {
            store
                .create(create_request(
                    json!({"name": name, "type": "Stationery", "price": 1, "amount": 1}),
                ))
                .unwrap();
        }

        store.delete(1.0).unwrap();

        let ids: Vec<u64> = store.list().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn delete_unknown_id_leaves_collection_unchanged() {
        let store = store_with_pen();
        let err = store.delete(7.0).unwrap_err();
        assert!(matches!(err, AppError::ProductNotFound));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn update_single_field_leaves_others_unchanged() {
        let store = store_with_pen();
        store.update(0.0, update_request(json!({"price": 12}))).unwrap();

        let product = &store.list().unwrap()[0];
        assert_eq!(product.price, 12.0);
        assert_eq!(product.name, "Pen");
        assert_eq!(product.product_type, "Stationery");
        assert_eq!(product.amount, 5.0);
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let store = store_with_pen();
        let err = store.update(0.0, update_request(json!({}))).unwrap_err();
        assert!(matches!(err, AppError::InvalidData));
    }

    #[test]
    fn update_unknown_id_is_not_found_before_body_validation() {
        let store = store_with_pen();
        let err = store.update(9.0, update_request(json!({}))).unwrap_err();
        assert!(matches!(err, AppError::ProductNotFound));
    }

    #[test]
    fn update_rejects_fractional_amount() {
        let store = store_with_pen();
        let err = store
            .update(0.0, update_request(json!({"amount": 2.5})))
            .unwrap_err();
        assert!(matches!(err, AppError::AmountNotInteger));
        assert_eq!(store.list().unwrap()[0].amount, 5.0);
    }

    #[test]
    fn update_rejects_empty_name() {
        let store = store_with_pen();
        let err = store
            .update(0.0, update_request(json!({"name": ""})))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyName));
        assert_eq!(store.list().unwrap()[0].name, "Pen");
    }

    #[test]
    fn update_first_invalid_field_wins_in_fixed_order() {
        let store = store_with_pen();
        let err = store
            .update(0.0, update_request(json!({"name": "", "price": -1})))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyName));
    }

    #[test]
    fn rejected_update_writes_nothing() {
        // A valid name next to an invalid price must not be applied.
        let store = store_with_pen();
        let err = store
            .update(0.0, update_request(json!({"name": "Marker", "price": -1})))
            .unwrap_err();
        assert!(matches!(err, AppError::PriceNegative));

        let product = &store.list().unwrap()[0];
        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 10.0);
    }

    #[test]
    fn update_accepts_zero_price() {
        let store = store_with_pen();
        store.update(0.0, update_request(json!({"price": 0}))).unwrap();
        assert_eq!(store.list().unwrap()[0].price, 0.0);
    }

    #[test]
    fn update_never_alters_the_id() {
        let store = store_with_pen();
        store
            .update(0.0, update_request(json!({"name": "Marker", "amount": 3})))
            .unwrap();

        let product = &store.list().unwrap()[0];
        assert_eq!(product.id, 0);
        assert_eq!(product.name, "Marker");
        assert_eq!(product.amount, 3.0);
    }
}
