// src/repositories/product.rs
use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::error;

use crate::models::product::{Product, ProductData};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("product not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage operations for the `product` table.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ascending by id.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Inserts a new row and returns the id the store assigned to it.
    async fn create(&self, data: &ProductData) -> Result<i64, RepositoryError>;
    async fn update_by_id(&self, id: i64, data: &ProductData) -> Result<Product, RepositoryError>;
    /// Removes the row and returns it as it was before deletion.
    async fn delete_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
}

pub struct PgProductRepository {
    db_pool: PgPool,
}

impl PgProductRepository {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    async fn fetch(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, product_name, price::FLOAT8 AS price FROM product WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, product_name, price::FLOAT8 AS price FROM product ORDER BY id ASC"
        )
        .fetch_all(&self.db_pool)
        .await
        .map_err(|e| {
            error!(?e, "Error retrieving products from database");
            e.into()
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.fetch(id)
            .await
            .map_err(|e| {
                error!(?e, id, "Error retrieving product from database");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, data: &ProductData) -> Result<i64, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO product (product_name, price) VALUES ($1, $2) RETURNING id"
        )
        .bind(&data.name)
        .bind(data.price)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| {
            error!(?e, "Error creating product in database");
            RepositoryError::from(e)
        })?;

        Ok(id)
    }

    async fn update_by_id(&self, id: i64, data: &ProductData) -> Result<Product, RepositoryError> {
        let current = self
            .fetch(id)
            .await
            .map_err(|e| {
                error!(?e, id, "Error retrieving product for update in database");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        sqlx::query_as::<_, Product>(
            "UPDATE product SET product_name = $1, price = $2
             WHERE id = $3 RETURNING id, product_name, price::FLOAT8 AS price"
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(current.id)
        .fetch_optional(&self.db_pool)
        .await
        .map_err(|e| {
            error!(?e, id, "Error saving updated product in database");
            RepositoryError::from(e)
        })?
        // The row can vanish between the lookup and the write.
        .ok_or(RepositoryError::NotFound)
    }

    async fn delete_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let current = self
            .fetch(id)
            .await
            .map_err(|e| {
                error!(?e, id, "Error retrieving product for delete in database");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(current.id)
            .execute(&self.db_pool)
            .await
            .map_err(|e| {
                error!(?e, id, "Error deleting product from database");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(current)
    }
}
