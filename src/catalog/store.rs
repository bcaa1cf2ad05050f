//! Product Store Module
//!
//! Ordered in-memory collection of products. The backing vector is private;
//! callers go through the five store operations.

use uuid::Uuid;

use crate::catalog::{sample_products, Product, ProductFields};
use crate::error::{ApiError, Result};

// == Product Store ==
/// Insertion-ordered product collection.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    // == Constructors ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the sample catalogue.
    pub fn with_samples() -> Self {
        Self {
            products: sample_products(),
        }
    }

    // == List All ==
    /// Returns every product in enumeration order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    // == Find By Id ==
    /// Looks up a product by exact identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // == Insert ==
    /// Appends a new product under a freshly generated identifier.
    pub fn insert(&mut self, fields: ProductFields) -> Product {
        let product = Product::from_fields(self.fresh_id(), fields);
        self.products.push(product.clone());
        product
    }

    // == Replace ==
    /// Overwrites all fields of an existing product, keeping its position.
    pub fn replace(&mut self, id: &str, fields: ProductFields) -> Result<Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

        product.apply(fields);
        Ok(product.clone())
    }

    // == Remove ==
    /// Deletes a product and returns it.
    pub fn remove(&mut self, id: &str) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

        Ok(self.products.remove(index))
    }

    // == Length ==
    /// Returns the number of stored products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn kettle() -> ProductFields {
        ProductFields::new("Kettle", "Boils water", 30, "kitchen", true)
    }

    #[test]
    fn test_store_new() {
        let store = ProductStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_with_samples() {
        let store = ProductStore::with_samples();
        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id("2").unwrap().name, "Smartphone");
    }

    #[test]
    fn test_store_insert_and_find() {
        let mut store = ProductStore::new();

        let created = store.insert(kettle());

        assert!(!created.id.is_empty());
        assert_eq!(store.find_by_id(&created.id), Some(&created));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_insert_appends() {
        let mut store = ProductStore::with_samples();

        let created = store.insert(kettle());

        assert_eq!(store.list_all().last(), Some(&created));
    }

    #[test]
    fn test_store_insert_generates_distinct_ids() {
        let mut store = ProductStore::new();

        let a = store.insert(kettle());
        let b = store.insert(kettle());

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_store_find_nonexistent() {
        let store = ProductStore::with_samples();
        assert!(store.find_by_id("nope").is_none());
    }

    #[test]
    fn test_store_replace_keeps_position() {
        let mut store = ProductStore::with_samples();

        let updated = store.replace("2", kettle()).unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Kettle");
        assert_eq!(store.list_all()[1], updated);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_store_replace_nonexistent() {
        let mut store = ProductStore::with_samples();

        let result = store.replace("missing", kettle());

        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert_eq!(store.list_all(), sample_products().as_slice());
    }

    #[test]
    fn test_store_remove() {
        let mut store = ProductStore::with_samples();

        let removed = store.remove("1").unwrap();

        assert_eq!(removed.name, "Laptop");
        assert!(store.find_by_id("1").is_none());
        let ids: Vec<&str> = store.list_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_store_remove_nonexistent() {
        let mut store = ProductStore::with_samples();

        let result = store.remove("missing");

        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert_eq!(store.len(), 3);
    }
}
