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
use crate::features::sliders::dtos::{
    CreateSliderDto, SliderListDto, SliderResponseDto, UpdateSliderDto,
};
use crate::features::sliders::services::SliderService;
use crate::shared::multipart::FormData;
use crate::shared::types::ApiResponse;

/// List all active sliders
#[utoipa::path(
    get,
    path = "/slider/",
    responses(
        (status = 200, description = "List of sliders", body = ApiResponse<SliderListDto>),
    ),
    tag = "slider"
)]
pub async fn list_sliders(
    State(service): State<Arc<SliderService>>,
) -> Result<Json<ApiResponse<SliderListDto>>> {
    let sliders = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(SliderListDto { sliders }),
        None,
    )))
}

/// Create a new slider (multipart: text fields plus optional `image_min`/`image_max` files)
#[utoipa::path(
    post,
    path = "/slider/create/",
    request_body(content = CreateSliderDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Slider created", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "slider",
    security(("bearer_auth" = []))
)]
pub async fn create_slider(
    _user: AuthenticatedUser,
    State(service): State<Arc<SliderService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<SliderResponseDto>>)> {
    let form = FormData::read(multipart).await?;
    let dto = CreateSliderDto::from_form(&form)?;
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

    let slider = service.create(dto, image_min, image_max).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(slider), None)),
    ))
}

/// Update a slider (partial)
#[utoipa::path(
    put,
    path = "/slider/update/{id}/",
    params(("id" = Uuid, Path, description = "Slider id")),
    request_body = UpdateSliderDto,
    responses(
        (status = 200, description = "Slider updated", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Slider not found")
    ),
    tag = "slider",
    security(("bearer_auth" = []))
)]
pub async fn update_slider(
    _user: AuthenticatedUser,
    State(service): State<Arc<SliderService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateSliderDto>,
) -> Result<Json<ApiResponse<SliderResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let slider = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(slider), None)))
}

/// Soft-delete a slider
#[utoipa::path(
    delete,
    path = "/slider/delete/{id}/",
    params(("id" = Uuid, Path, description = "Slider id")),
    responses(
        (status = 200, description = "Slider deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Slider not found")
    ),
    tag = "slider",
    security(("bearer_auth" = []))
)]
pub async fn delete_slider(
    _user: AuthenticatedUser,
    State(service): State<Arc<SliderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Slider deleted".to_string()),
    )))
}
