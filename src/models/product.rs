use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: i64,
    #[sqlx(rename = "product_name")]
    pub name: String,
    pub price: f64,
}

/// The caller-controlled fields of a product. The id is always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn from_data(id: i64, data: ProductData) -> Self {
        Self {
            id,
            name: data.name,
            price: data.price,
        }
    }
}
