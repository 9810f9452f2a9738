use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use tracing::info;

use service::product::{CreateProductDto, ProductDto, UpdateProductDto};

use crate::errors::ApiError;
use crate::openapi::{CreateProductDoc, ProductDoc, UpdateProductDoc};
use crate::state::AppState;

/// List all products.
#[utoipa::path(get, path = "/products", tag = "products",
    responses((status = 200, description = "All products", body = [ProductDoc])))]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.products.list().await?;
    info!(count = products.len(), "list products");
    Ok(Json(products))
}

/// Fetch one product by id.
#[utoipa::path(get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductDoc),
        (status = 404, description = "No product with that id"),
    ))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDto>, ApiError> {
    match state.products.get(id).await? {
        Some(dto) => Ok(Json(dto)),
        None => Err(ApiError::not_found("product")),
    }
}

/// Create a product; responds 201 with a Location header for the new row.
#[utoipa::path(post, path = "/products", tag = "products",
    request_body = CreateProductDoc,
    responses(
        (status = 201, description = "Product created", body = ProductDoc),
        (status = 400, description = "Invalid fields"),
        (status = 500, description = "Creation failed"),
    ))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductDto>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.products.create(input).await?;
    let location = format!("/products/{}", created.id);
    Ok((
        StatusCode::CREATED,
        AppendHeaders([(header::LOCATION, location)]),
        Json(created),
    ))
}

/// Apply a partial update; absent fields keep their persisted values.
#[utoipa::path(put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductDoc,
    responses(
        (status = 204, description = "Product updated"),
        (status = 404, description = "No product with that id"),
    ))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateProductDto>,
) -> Result<StatusCode, ApiError> {
    if state.products.update(id, input).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("product"))
    }
}

/// Delete a product by id.
#[utoipa::path(delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with that id"),
    ))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.products.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("product"))
    }
}
