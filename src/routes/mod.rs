pub mod products;

use axum::{routing::get, Router};
use crate::handlers::health::ping;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .merge(products::routes())
}
