use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::contacts::dtos::{
    ContactListDto, ContactResponseDto, CreateContactDto, UpdateContactDto,
};
use crate::features::contacts::services::ContactService;
use crate::shared::types::ApiResponse;

/// List visitor messages (admin only)
#[utoipa::path(
    get,
    path = "/contact/",
    responses(
        (status = 200, description = "List of messages", body = ApiResponse<ContactListDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "contact",
    security(("bearer_auth" = []))
)]
pub async fn list_contacts(
    _user: AuthenticatedUser,
    State(service): State<Arc<ContactService>>,
) -> Result<Json<ApiResponse<ContactListDto>>> {
    let contacts = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(ContactListDto { contacts }),
        None,
    )))
}

/// Submit a visitor message (no auth)
#[utoipa::path(
    post,
    path = "/contact/create/",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Message stored", body = ApiResponse<ContactResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn create_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(contact), None)),
    ))
}

/// Update a visitor message (partial)
#[utoipa::path(
    put,
    path = "/contact/update/{id}/",
    params(("id" = Uuid, Path, description = "Contact id")),
    request_body = UpdateContactDto,
    responses(
        (status = 200, description = "Message updated", body = ApiResponse<ContactResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact not found")
    ),
    tag = "contact",
    security(("bearer_auth" = []))
)]
pub async fn update_contact(
    _user: AuthenticatedUser,
    State(service): State<Arc<ContactService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateContactDto>,
) -> Result<Json<ApiResponse<ContactResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(contact), None)))
}

/// Soft-delete a visitor message
#[utoipa::path(
    delete,
    path = "/contact/delete/{id}/",
    params(("id" = Uuid, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Message deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact not found")
    ),
    tag = "contact",
    security(("bearer_auth" = []))
)]
pub async fn delete_contact(
    _user: AuthenticatedUser,
    State(service): State<Arc<ContactService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Contact deleted".to_string()),
    )))
}
