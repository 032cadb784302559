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
use crate::features::blogs::dtos::{
    BlogListDto, BlogResponseDto, CreateBlogDto, UpdateBlogDto,
};
use crate::features::blogs::services::BlogService;
use crate::shared::multipart::FormData;
use crate::shared::types::ApiResponse;

/// List all active blogs
#[utoipa::path(
    get,
    path = "/blog/",
    responses(
        (status = 200, description = "List of blogs", body = ApiResponse<BlogListDto>),
    ),
    tag = "blog"
)]
pub async fn list_blogs(
    State(service): State<Arc<BlogService>>,
) -> Result<Json<ApiResponse<BlogListDto>>> {
    let blogs = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(BlogListDto { blogs }),
        None,
    )))
}

/// Fetch one blog post
#[utoipa::path(
    get,
    path = "/blog/detail/{id}/",
    params(("id" = Uuid, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog detail", body = ApiResponse<BlogResponseDto>),
        (status = 404, description = "Blog not found")
    ),
    tag = "blog"
)]
pub async fn blog_detail(
    State(service): State<Arc<BlogService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    let blog = service.detail(id).await?;
    Ok(Json(ApiResponse::success(Some(blog), None)))
}

/// Create a new blog (multipart: text fields plus optional `image_min`/`image_max` files)
#[utoipa::path(
    post,
    path = "/blog/create/",
    request_body(content = CreateBlogDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Blog created", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "blog",
    security(("bearer_auth" = []))
)]
pub async fn create_blog(
    _user: AuthenticatedUser,
    State(service): State<Arc<BlogService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<BlogResponseDto>>)> {
    let form = FormData::read(multipart).await?;
    let dto = CreateBlogDto::from_form(&form)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let image_min = form.file("image_min");
    if let Some(f) = image_min {
        f.ensure_image()?;
    }
    let image_max = form.file("image_max");
    if let Some(f) = image_max {
        f.ensure_image()?;
    }

    let blog = service.create(dto, image_min, image_max).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(blog), None)),
    ))
}

/// Update a blog (partial)
#[utoipa::path(
    put,
    path = "/blog/update/{id}/",
    params(("id" = Uuid, Path, description = "Blog id")),
    request_body = UpdateBlogDto,
    responses(
        (status = 200, description = "Blog updated", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Blog not found")
    ),
    tag = "blog",
    security(("bearer_auth" = []))
)]
pub async fn update_blog(
    _user: AuthenticatedUser,
    State(service): State<Arc<BlogService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateBlogDto>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let blog = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(blog), None)))
}

/// Soft-delete a blog
#[utoipa::path(
    delete,
    path = "/blog/delete/{id}/",
    params(("id" = Uuid, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Blog not found")
    ),
    tag = "blog",
    security(("bearer_auth" = []))
)]
pub async fn delete_blog(
    _user: AuthenticatedUser,
    State(service): State<Arc<BlogService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Blog deleted".to_string()),
    )))
}
