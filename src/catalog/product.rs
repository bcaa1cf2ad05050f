//! Product Module
//!
//! Defines the product record and the field set accepted on writes.

use serde::{Deserialize, Serialize};
use serde_json::Number;

// == Product Fields ==
/// Every product attribute except the identifier.
///
/// Produced by the validation gate and consumed by the store on insert
/// and replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    /// Kept as a JSON number so integers round-trip as integers
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl ProductFields {
    /// Creates a field set from its parts.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Number>,
        category: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            category: category.into(),
            in_stock,
        }
    }
}

// == Product ==
/// A stored product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, never changes
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    // == Constructor ==
    /// Builds a product from an identifier and its fields.
    pub fn from_fields(id: impl Into<String>, fields: ProductFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
        }
    }

    // == Apply Fields ==
    /// Overwrites every attribute except `id`.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.category = fields.category;
        self.in_stock = fields.in_stock;
    }
}

// == Sample Catalogue ==
/// The products a fresh server starts with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::from_fields(
            "1",
            ProductFields::new(
                "Laptop",
                "High-performance laptop with 16GB RAM",
                1200,
                "electronics",
                true,
            ),
        ),
        Product::from_fields(
            "2",
            ProductFields::new(
                "Smartphone",
                "Latest model with 128GB storage",
                800,
                "electronics",
                true,
            ),
        ),
        Product::from_fields(
            "3",
            ProductFields::new(
                "Coffee Maker",
                "Programmable coffee maker with timer",
                50,
                "kitchen",
                false,
            ),
        ),
    ]
}
