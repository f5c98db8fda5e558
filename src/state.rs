// src/state.rs
use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::product::{PgProductRepository, ProductRepository};
use crate::usecases::product::ProductUsecase;

#[derive(Clone)]
pub struct AppState {
    pub product_usecase: ProductUsecase,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgProductRepository::new(db_pool)))
    }

    pub fn with_repository(repo: Arc<dyn ProductRepository>) -> Self {
        Self {
            product_usecase: ProductUsecase::new(repo),
        }
    }
}
