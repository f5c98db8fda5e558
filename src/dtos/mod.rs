pub mod common;
pub mod product;
