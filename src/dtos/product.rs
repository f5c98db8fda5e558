// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Cause};
use crate::models::product::{Product, ProductData};

/// Body of `POST /product` and `PUT /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ProductRequest {
    /// Checks that every required field is present. Range checks belong to the use case.
    pub fn into_data(self) -> Result<ProductData, AppError> {
        let mut causes = Vec::new();
        if self.name.is_none() {
            causes.push(Cause::new("name", "field is required"));
        }
        if self.price.is_none() {
            causes.push(Cause::new("price", "field is required"));
        }

        match (self.name, self.price) {
            (Some(name), Some(price)) => Ok(ProductData { name, price }),
            _ => Err(AppError::validation_with_causes("invalid request body", causes)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
    pub count: usize,
}

impl From<Vec<Product>> for ProductListResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            count: products.len(),
            data: products,
        }
    }
}
