use axum::{
    routing::{get, post, put},
    Router,
};
use crate::handlers::product::{
    get_products, get_product, create_product, update_product, delete_product
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products))
        .route("/product", post(create_product))
        .route("/product/{productId}", get(get_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
}
