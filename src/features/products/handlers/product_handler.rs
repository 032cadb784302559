use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::products::dtos::{
    CreateProductDto, ListProductsQuery, ProductListDto, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::services::ProductService;
use crate::shared::multipart::FormData;
use crate::shared::types::ApiResponse;

/// Incrementally loaded product list
#[utoipa::path(
    get,
    path = "/product/",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Products with paging hints", body = ApiResponse<ProductListDto>),
    ),
    tag = "product"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ApiResponse<ProductListDto>>> {
    let list = service.list(query).await?;
    Ok(Json(ApiResponse::success(Some(list), None)))
}

/// Fetch one product with its category and gallery
#[utoipa::path(
    get,
    path = "/product/detail/{id}/",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "product"
)]
pub async fn product_detail(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.detail(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None)))
}

/// Create a new product (multipart: text fields plus `image_min` and `image_max` files)
#[utoipa::path(
    post,
    path = "/product/create/",
    request_body(content = CreateProductDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "product",
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    let form = FormData::read(multipart).await?;
    let dto = CreateProductDto::from_form(&form)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let image_min = form.require_file("image_min")?;
    image_min.ensure_image()?;
    let image_max = form.require_file("image_max")?;
    image_max.ensure_image()?;

    let product = service.create(dto, image_min, image_max).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(product), None)),
    ))
}

/// Update a product (partial)
#[utoipa::path(
    put,
    path = "/product/update/{id}/",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    tag = "product",
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None)))
}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/product/delete/{id}/",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    tag = "product",
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Product deleted".to_string()),
    )))
}
