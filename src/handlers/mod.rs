pub mod health;
pub mod product;
