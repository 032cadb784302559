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
use crate::features::company::dtos::{CompanyResponseDto, CreateCompanyDto, UpdateCompanyDto};
use crate::features::company::services::CompanyService;
use crate::shared::types::ApiResponse;

/// The active company profile as a single object
#[utoipa::path(
    get,
    path = "/company/",
    responses(
        (status = 200, description = "Company profile", body = ApiResponse<CompanyResponseDto>),
        (status = 404, description = "No company profile yet")
    ),
    tag = "company"
)]
pub async fn get_company(
    State(service): State<Arc<CompanyService>>,
) -> Result<Json<ApiResponse<CompanyResponseDto>>> {
    let company = service.current().await?;
    Ok(Json(ApiResponse::success(Some(company), None)))
}

/// Create the company profile
#[utoipa::path(
    post,
    path = "/company/create/",
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company created", body = ApiResponse<CompanyResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "company",
    security(("bearer_auth" = []))
)]
pub async fn create_company(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyService>>,
    AppJson(dto): AppJson<CreateCompanyDto>,
) -> Result<(StatusCode, Json<ApiResponse<CompanyResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(company), None)),
    ))
}

/// Update the company profile (partial)
#[utoipa::path(
    put,
    path = "/company/update/{id}/",
    params(("id" = Uuid, Path, description = "Company id")),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Company updated", body = ApiResponse<CompanyResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Company not found")
    ),
    tag = "company",
    security(("bearer_auth" = []))
)]
pub async fn update_company(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCompanyDto>,
) -> Result<Json<ApiResponse<CompanyResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(company), None)))
}

/// Soft-delete the company profile
#[utoipa::path(
    delete,
    path = "/company/delete/{id}/",
    params(("id" = Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Company not found")
    ),
    tag = "company",
    security(("bearer_auth" = []))
)]
pub async fn delete_company(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Company deleted".to_string()),
    )))
}
