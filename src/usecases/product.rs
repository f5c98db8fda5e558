// src/usecases/product.rs
use std::sync::Arc;

use crate::error::{AppError, Cause};
use crate::models::product::{Product, ProductData};
use crate::repositories::product::{ProductRepository, RepositoryError};

const PRODUCT_NOT_FOUND: &str = "product not found";

/// Validation and error translation in front of a [`ProductRepository`].
#[derive(Clone)]
pub struct ProductUsecase {
    repo: Arc<dyn ProductRepository>,
}

impl ProductUsecase {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_products(&self) -> Result<Vec<Product>, AppError> {
        self.repo
            .list()
            .await
            .map_err(|_| AppError::internal("could not retrieve products"))
    }

    pub async fn get_product_by_id(&self, id: i64) -> Result<Product, AppError> {
        validate_id(id)?;
        self.existing(id, "could not retrieve product").await
    }

    pub async fn create_product(&self, data: ProductData) -> Result<Product, AppError> {
        validate_product(&data)?;

        let id = self
            .repo
            .create(&data)
            .await
            .map_err(|_| AppError::internal("could not create product"))?;

        Ok(Product::from_data(id, data))
    }

    pub async fn update_product_by_id(&self, id: i64, data: ProductData) -> Result<Product, AppError> {
        validate_id(id)?;
        validate_product(&data)?;
        self.existing(id, "could not fetch existing product").await?;

        self.repo.update_by_id(id, &data).await.map_err(|e| match e {
            RepositoryError::NotFound => AppError::not_found(PRODUCT_NOT_FOUND),
            RepositoryError::Database(_) => AppError::internal("could not update product"),
        })
    }

    pub async fn delete_product_by_id(&self, id: i64) -> Result<Product, AppError> {
        validate_id(id)?;
        self.existing(id, "could not fetch product to delete").await?;

        self.repo.delete_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => AppError::not_found(PRODUCT_NOT_FOUND),
            RepositoryError::Database(_) => AppError::internal("could not delete product"),
        })
    }

    async fn existing(&self, id: i64, on_failure: &str) -> Result<Product, AppError> {
        self.repo.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => AppError::not_found(PRODUCT_NOT_FOUND),
            RepositoryError::Database(_) => AppError::internal(on_failure),
        })
    }
}

fn validate_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::validation("invalid ID"));
    }
    Ok(())
}

fn validate_product(data: &ProductData) -> Result<(), AppError> {
    if data.name.trim().is_empty() {
        return Err(AppError::validation_with_causes(
            "name required",
            vec![Cause::new("name", "name required")],
        ));
    }
    // Also rejects NaN.
    if !(data.price > 0.0) {
        return Err(AppError::validation_with_causes(
            "price must be greater than zero",
            vec![Cause::new("price", "price must be greater than zero")],
        ));
    }
    Ok(())
}
