//! In-process stand-ins for the Postgres repository.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::product::{ProductRepository, RepositoryError};
use crate::models::product::{Product, ProductData};

/// Keeps rows in a `BTreeMap` so iteration is already ordered by id.
#[derive(Default)]
pub struct InMemoryProductRepository {
    inner: Mutex<Table>,
    fail_writes: bool,
}

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
    writes: usize,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads succeed but every update and delete fails with a database error.
    pub fn with_failing_writes() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    /// Number of inserts, updates and deletes that reached the table.
    pub fn writes(&self) -> usize {
        self.inner.lock().unwrap().writes
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, data: &ProductData) -> Result<i64, RepositoryError> {
        let mut table = self.inner.lock().unwrap();
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(id, Product::from_data(id, data.clone()));
        table.writes += 1;
        Ok(id)
    }

    async fn update_by_id(&self, id: i64, data: &ProductData) -> Result<Product, RepositoryError> {
        if self.fail_writes {
            return Err(unreachable_db());
        }
        let mut table = self.inner.lock().unwrap();
        let row = table.rows.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        row.name = data.name.clone();
        row.price = data.price;
        let updated = row.clone();
        table.writes += 1;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        if self.fail_writes {
            return Err(unreachable_db());
        }
        let mut table = self.inner.lock().unwrap();
        let removed = table.rows.remove(&id).ok_or(RepositoryError::NotFound)?;
        table.writes += 1;
        Ok(removed)
    }
}

/// Fails every call the way an unreachable database would.
pub struct FailingProductRepository;

fn unreachable_db() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(unreachable_db())
    }

    async fn get_by_id(&self, _id: i64) -> Result<Product, RepositoryError> {
        Err(unreachable_db())
    }

    async fn create(&self, _data: &ProductData) -> Result<i64, RepositoryError> {
        Err(unreachable_db())
    }

    async fn update_by_id(&self, _id: i64, _data: &ProductData) -> Result<Product, RepositoryError> {
        Err(unreachable_db())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<Product, RepositoryError> {
        Err(unreachable_db())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, price: f64) -> ProductData {
        ProductData { name: name.to_string(), price }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let repo = InMemoryProductRepository::new();
        let id = repo.create(&data("Widget", 9.99)).await.unwrap();
        assert!(id > 0);

        let product = repo.get_by_id(id).await.unwrap();
        assert_eq!(product, Product { id, name: "Widget".into(), price: 9.99 });
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["c", "a", "b"] {
            repo.create(&data(name, 1.0)).await.unwrap();
        }
        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let id = repo.create(&data("Widget", 1.0)).await.unwrap();
        assert_eq!(repo.delete_by_id(id).await.unwrap().id, id);
        assert!(matches!(repo.delete_by_id(id).await, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn failing_writes_keep_rows_readable() {
        let repo = InMemoryProductRepository::with_failing_writes();
        let id = repo.create(&data("Widget", 1.0)).await.unwrap();

        assert!(matches!(repo.update_by_id(id, &data("x", 2.0)).await, Err(RepositoryError::Database(_))));
        assert!(matches!(repo.delete_by_id(id).await, Err(RepositoryError::Database(_))));
        assert_eq!(repo.get_by_id(id).await.unwrap().name, "Widget");
    }
}
