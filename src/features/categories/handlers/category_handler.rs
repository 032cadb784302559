use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::categories::dtos::{
    CategoryListDto, CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::multipart::FormData;
use crate::shared::types::ApiResponse;

/// List all active categories
#[utoipa::path(
    get,
    path = "/category/",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<CategoryListDto>),
    ),
    tag = "category"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoryListDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(CategoryListDto { categories }),
        None,
    )))
}

/// Create a new category (multipart: text fields plus an `image` file)
#[utoipa::path(
    post,
    path = "/category/create/",
    request_body(content = CreateCategoryDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "category",
    security(("bearer_auth" = []))
)]
pub async fn create_category(
    _user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    let form = FormData::read(multipart).await?;
    let dto = CreateCategoryDto::from_form(&form)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let image = form.require_file("image")?;
    image.ensure_image()?;

    let category = service.create(dto, image).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category), None)),
    ))
}

/// Update a category (partial)
#[utoipa::path(
    put,
    path = "/category/update/{id}/",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "category",
    security(("bearer_auth" = []))
)]
pub async fn update_category(
    _user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// Soft-delete a category
#[utoipa::path(
    delete,
    path = "/category/delete/{id}/",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "category",
    security(("bearer_auth" = []))
)]
pub async fn delete_category(
    _user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted".to_string()),
    )))
}
