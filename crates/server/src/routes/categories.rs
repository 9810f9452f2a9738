use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use tracing::info;

use service::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

use crate::errors::ApiError;
use crate::openapi::{CategoryDoc, CreateCategoryDoc, UpdateCategoryDoc};
use crate::state::AppState;

/// List all categories.
#[utoipa::path(get, path = "/categories", tag = "categories",
    responses((status = 200, description = "All categories", body = [CategoryDoc])))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let categories = state.categories.list().await?;
    info!(count = categories.len(), "list categories");
    Ok(Json(categories))
}

/// Fetch one category by id.
#[utoipa::path(get, path = "/categories/{id}", tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = CategoryDoc),
        (status = 404, description = "No category with that id"),
    ))]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryDto>, ApiError> {
    match state.categories.get(id).await? {
        Some(dto) => Ok(Json(dto)),
        None => Err(ApiError::not_found("category")),
    }
}

/// Create a category; responds 201 with a Location header for the new row.
#[utoipa::path(post, path = "/categories", tag = "categories",
    request_body = CreateCategoryDoc,
    responses(
        (status = 201, description = "Category created", body = CategoryDoc),
        (status = 400, description = "Invalid fields"),
        (status = 500, description = "Creation failed"),
    ))]
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.categories.create(input).await?;
    let location = format!("/categories/{}", created.id);
    Ok((
        StatusCode::CREATED,
        AppendHeaders([(header::LOCATION, location)]),
        Json(created),
    ))
}

/// Apply a partial update; an absent name keeps the persisted value.
#[utoipa::path(put, path = "/categories/{id}", tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryDoc,
    responses(
        (status = 204, description = "Category updated"),
        (status = 404, description = "No category with that id"),
    ))]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateCategoryDto>,
) -> Result<StatusCode, ApiError> {
    if state.categories.update(id, input).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("category"))
    }
}

/// Delete a category by id. Products referencing it are left untouched.
#[utoipa::path(delete, path = "/categories/{id}", tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "No category with that id"),
    ))]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.categories.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("category"))
    }
}
