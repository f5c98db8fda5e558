// src/handlers/product.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument};

use crate::dtos::common::{DataResponse, MessageResponse};
use crate::dtos::product::{ProductListResponse, ProductRequest};
use crate::error::AppError;
use crate::models::product::{Product, ProductData};
use crate::state::AppState;

fn parse_id(param: &str, raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|e| {
        error!(param, value = raw, error = %e, "Invalid id parameter");
        AppError::validation(format!("{param} must be a number"))
    })
}

fn parse_body(payload: Result<Json<ProductRequest>, JsonRejection>) -> Result<ProductData, AppError> {
    let Json(request) = payload.map_err(|e| {
        error!(error = %e, "Invalid JSON payload");
        AppError::validation("Invalid JSON payload")
    })?;
    request.into_data()
}

fn log_failure(err: AppError, what: &str) -> AppError {
    error!(error = %err, "{what}");
    err
}

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, AppError> {
    info!("Received GET /products request");

    let products = state
        .product_usecase
        .get_products()
        .await
        .map_err(|e| log_failure(e, "Failed to retrieve products"))?;

    Ok(Json(ProductListResponse::from(products)))
}

// GET /product/{productId} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Product>>, AppError> {
    info!("Received GET /product/{{productId}} request");

    let id = parse_id("productId", &product_id)?;
    let product = state
        .product_usecase
        .get_product_by_id(id)
        .await
        .map_err(|e| log_failure(e, "Failed to retrieve product"))?;

    Ok(Json(DataResponse { data: product }))
}

// POST /product - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Product>>), AppError> {
    info!("Received POST /product request");

    let data = parse_body(payload)?;
    let product = state
        .product_usecase
        .create_product(data)
        .await
        .map_err(|e| log_failure(e, "Failed to create product"))?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

// PUT /products/{id} - Update product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Product>>, AppError> {
    info!("Received PUT /products/{{id}} request");

    let id = parse_id("id", &id)?;
    let data = parse_body(payload)?;
    let product = state
        .product_usecase
        .update_product_by_id(id, data)
        .await
        .map_err(|e| log_failure(e, "Failed to update product"))?;

    Ok(Json(DataResponse { data: product }))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    info!("Received DELETE /products/{{id}} request");

    let id = parse_id("id", &id)?;
    state
        .product_usecase
        .delete_product_by_id(id)
        .await
        .map_err(|e| log_failure(e, "Failed to delete product"))?;

    Ok(Json(MessageResponse { message: "product deleted successfully" }))
}
