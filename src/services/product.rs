//! Product services - Gestione CRUD dei prodotti

use crate::core::{AppError, AppState};
use crate::dtos::{CreateProductDTO, CreateProductRequest, MessageDTO, ProductQuery, UpdateProductDTO};
use crate::entities::Product;
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// L'id arriva come stringa per poter rispondere 400 con il body JSON standard
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| {
        warn!("Invalid product id: {}", raw);
        AppError::invalid_id()
    })
}

/// Recupera il prodotto o risponde 404
async fn find_product(state: &AppState, id: i64) -> Result<Product, AppError> {
    state
        .product
        .read(&id)
        .await
        .map_err(|e| AppError::database("Database error", e))?
        .ok_or_else(|| {
            warn!("Product {} not found", id);
            AppError::not_found("Product not found")
        })
}

#[instrument(skip(state), fields(category = ?params.category))]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProductQuery>, // /products?category=...
) -> Result<Json<Vec<Product>>, AppError> {
    debug!("Listing products");
    let products = state
        .product
        .find_all(params.category_filter())
        .await
        .map_err(|e| AppError::database("Database error", e))?;

    info!("Found {} products", products.len());
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let id = parse_id(&id)?;
    let product = find_product(&state, id).await?;
    Ok(Json(product))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(body) = payload?;
    let data = CreateProductDTO::try_from(body)?;

    let product = state
        .product
        .create(&data)
        .await
        .map_err(|e| AppError::database("Create failed", e))?;

    info!("Product {} created", product.id);
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductDTO>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let id = parse_id(&id)?;
    // esistenza verificata prima di guardare il body
    find_product(&state, id).await?;

    let Json(body) = payload?;
    let data = body.trimmed();
    data.validate()?;

    let product = state.product.update(&id, &data).await.map_err(|e| match e {
        // cancellato tra la lettura e l'update
        sqlx::Error::RowNotFound => AppError::not_found("Product not found"),
        other => AppError::database("Update failed", other),
    })?;

    info!("Product {} updated", product.id);
    Ok(Json(product))
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageDTO>, AppError> {
    let id = parse_id(&id)?;

    let deleted = state
        .product
        .delete(&id)
        .await
        .map_err(|e| AppError::database("Delete failed", e))?;

    if deleted == 0 {
        warn!("Product {} not found for deletion", id);
        return Err(AppError::not_found("Product not found or already deleted"));
    }

    info!("Product {} deleted", id);
    Ok(Json(MessageDTO::new("Product deleted successfully")))
}
