use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::products::dtos::{
    parse_uuid_field, ListProductImagesQuery, ProductImageListDto, ProductImageResponseDto,
    UpdateProductImageDto,
};
use crate::features::products::services::ProductImageService;
use crate::shared::multipart::FormData;
use crate::shared::types::ApiResponse;

/// List gallery images, optionally filtered by product
#[utoipa::path(
    get,
    path = "/productimage/",
    params(ListProductImagesQuery),
    responses(
        (status = 200, description = "List of gallery images", body = ApiResponse<ProductImageListDto>),
    ),
    tag = "productimage"
)]
pub async fn list_product_images(
    State(service): State<Arc<ProductImageService>>,
    Query(query): Query<ListProductImagesQuery>,
) -> Result<Json<ApiResponse<ProductImageListDto>>> {
    let product_images = service.list(query).await?;
    Ok(Json(ApiResponse::success(
        Some(ProductImageListDto { product_images }),
        None,
    )))
}

/// Upload gallery images (multipart: `product` id plus one or more `images` files)
#[utoipa::path(
    post,
    path = "/productimage/create/",
    responses(
        (status = 201, description = "Gallery images created", body = ApiResponse<ProductImageListDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "productimage",
    security(("bearer_auth" = []))
)]
pub async fn create_product_images(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductImageService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ProductImageListDto>>)> {
    let form = FormData::read(multipart).await?;
    let product_id = parse_uuid_field("product", form.require_text("product")?)?;

    let files = form.file_list("images");
    if files.is_empty() {
        return Err(AppError::Validation(
            "At least one file is required in field 'images'".to_string(),
        ));
    }
    for file in files {
        file.ensure_image()?;
    }

    let product_images = service.create_many(product_id, files).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(ProductImageListDto { product_images }),
            None,
        )),
    ))
}

/// Update a gallery image (partial)
#[utoipa::path(
    put,
    path = "/productimage/update/{id}/",
    params(("id" = Uuid, Path, description = "Gallery image id")),
    request_body = UpdateProductImageDto,
    responses(
        (status = 200, description = "Gallery image updated", body = ApiResponse<ProductImageResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gallery image not found")
    ),
    tag = "productimage",
    security(("bearer_auth" = []))
)]
pub async fn update_product_image(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductImageService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProductImageDto>,
) -> Result<Json<ApiResponse<ProductImageResponseDto>>> {
    let image = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(image), None)))
}

/// Soft-delete a gallery image
#[utoipa::path(
    delete,
    path = "/productimage/delete/{id}/",
    params(("id" = Uuid, Path, description = "Gallery image id")),
    responses(
        (status = 200, description = "Gallery image deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gallery image not found")
    ),
    tag = "productimage",
    security(("bearer_auth" = []))
)]
pub async fn delete_product_image(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductImageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Product image deleted".to_string()),
    )))
}
