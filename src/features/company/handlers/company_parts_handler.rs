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
use crate::features::company::dtos::{
    CompanyAddressListDto, CompanyAddressResponseDto, CompanyEmailListDto,
    CompanyEmailResponseDto, CompanyImageListDto, CompanyImageResponseDto, CompanyPhoneListDto,
    CompanyPhoneResponseDto, CreateCompanyAddressDto, CreateCompanyEmailDto,
    CreateCompanyPhoneDto, UpdateCompanyAddressDto, UpdateCompanyEmailDto, UpdateCompanyImageDto,
    UpdateCompanyPhoneDto,
};
use crate::features::company::services::{
    CompanyAddressService, CompanyEmailService, CompanyImageService, CompanyPhoneService,
};
use crate::shared::multipart::FormData;
use crate::shared::types::ApiResponse;

/// List branch addresses
#[utoipa::path(
    get,
    path = "/companyaddress/",
    responses(
        (status = 200, description = "List of addresses", body = ApiResponse<CompanyAddressListDto>),
    ),
    tag = "companyaddress"
)]
pub async fn list_company_addresses(
    State(service): State<Arc<CompanyAddressService>>,
) -> Result<Json<ApiResponse<CompanyAddressListDto>>> {
    let company_addresses = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(CompanyAddressListDto { company_addresses }),
        None,
    )))
}

/// Create a branch address
#[utoipa::path(
    post,
    path = "/companyaddress/create/",
    request_body = CreateCompanyAddressDto,
    responses(
        (status = 201, description = "Address created", body = ApiResponse<CompanyAddressResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "companyaddress",
    security(("bearer_auth" = []))
)]
pub async fn create_company_address(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyAddressService>>,
    AppJson(dto): AppJson<CreateCompanyAddressDto>,
) -> Result<(StatusCode, Json<ApiResponse<CompanyAddressResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let address = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(address), None)),
    ))
}

/// Update a branch address (partial)
#[utoipa::path(
    put,
    path = "/companyaddress/update/{id}/",
    params(("id" = Uuid, Path, description = "Address id")),
    request_body = UpdateCompanyAddressDto,
    responses(
        (status = 200, description = "Address updated", body = ApiResponse<CompanyAddressResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Address not found")
    ),
    tag = "companyaddress",
    security(("bearer_auth" = []))
)]
pub async fn update_company_address(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyAddressService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCompanyAddressDto>,
) -> Result<Json<ApiResponse<CompanyAddressResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let address = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(address), None)))
}

/// Soft-delete a branch address
#[utoipa::path(
    delete,
    path = "/companyaddress/delete/{id}/",
    params(("id" = Uuid, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Address not found")
    ),
    tag = "companyaddress",
    security(("bearer_auth" = []))
)]
pub async fn delete_company_address(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyAddressService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Company address deleted".to_string()),
    )))
}

/// List company gallery images
#[utoipa::path(
    get,
    path = "/companyimage/",
    responses(
        (status = 200, description = "List of images", body = ApiResponse<CompanyImageListDto>),
    ),
    tag = "companyimage"
)]
pub async fn list_company_images(
    State(service): State<Arc<CompanyImageService>>,
) -> Result<Json<ApiResponse<CompanyImageListDto>>> {
    let company_images = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(CompanyImageListDto { company_images }),
        None,
    )))
}

/// Upload a company gallery image (multipart: an `image` file)
#[utoipa::path(
    post,
    path = "/companyimage/create/",
    responses(
        (status = 201, description = "Image created", body = ApiResponse<CompanyImageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "companyimage",
    security(("bearer_auth" = []))
)]
pub async fn create_company_image(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyImageService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<CompanyImageResponseDto>>)> {
    let form = FormData::read(multipart).await?;
    let file = form.require_file("image")?;
    file.ensure_image()?;

    let image = service.create(file).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(image), None)),
    ))
}

/// Update a company gallery image (partial)
#[utoipa::path(
    put,
    path = "/companyimage/update/{id}/",
    params(("id" = Uuid, Path, description = "Image id")),
    request_body = UpdateCompanyImageDto,
    responses(
        (status = 200, description = "Image updated", body = ApiResponse<CompanyImageResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Image not found")
    ),
    tag = "companyimage",
    security(("bearer_auth" = []))
)]
pub async fn update_company_image(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyImageService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCompanyImageDto>,
) -> Result<Json<ApiResponse<CompanyImageResponseDto>>> {
    let image = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(image), None)))
}

/// Soft-delete a company gallery image
#[utoipa::path(
    delete,
    path = "/companyimage/delete/{id}/",
    params(("id" = Uuid, Path, description = "Image id")),
    responses(
        (status = 200, description = "Image deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Image not found")
    ),
    tag = "companyimage",
    security(("bearer_auth" = []))
)]
pub async fn delete_company_image(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyImageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Company image deleted".to_string()),
    )))
}

/// List contact phone numbers
#[utoipa::path(
    get,
    path = "/companyphone/",
    responses(
        (status = 200, description = "List of phones", body = ApiResponse<CompanyPhoneListDto>),
    ),
    tag = "companyphone"
)]
pub async fn list_company_phones(
    State(service): State<Arc<CompanyPhoneService>>,
) -> Result<Json<ApiResponse<CompanyPhoneListDto>>> {
    let company_phones = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(CompanyPhoneListDto { company_phones }),
        None,
    )))
}

/// Create a contact phone number
#[utoipa::path(
    post,
    path = "/companyphone/create/",
    request_body = CreateCompanyPhoneDto,
    responses(
        (status = 201, description = "Phone created", body = ApiResponse<CompanyPhoneResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "companyphone",
    security(("bearer_auth" = []))
)]
pub async fn create_company_phone(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyPhoneService>>,
    AppJson(dto): AppJson<CreateCompanyPhoneDto>,
) -> Result<(StatusCode, Json<ApiResponse<CompanyPhoneResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let phone = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(phone), None)),
    ))
}

/// Update a contact phone number (partial)
#[utoipa::path(
    put,
    path = "/companyphone/update/{id}/",
    params(("id" = Uuid, Path, description = "Phone id")),
    request_body = UpdateCompanyPhoneDto,
    responses(
        (status = 200, description = "Phone updated", body = ApiResponse<CompanyPhoneResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Phone not found")
    ),
    tag = "companyphone",
    security(("bearer_auth" = []))
)]
pub async fn update_company_phone(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyPhoneService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCompanyPhoneDto>,
) -> Result<Json<ApiResponse<CompanyPhoneResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let phone = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(phone), None)))
}

/// Soft-delete a contact phone number
#[utoipa::path(
    delete,
    path = "/companyphone/delete/{id}/",
    params(("id" = Uuid, Path, description = "Phone id")),
    responses(
        (status = 200, description = "Phone deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Phone not found")
    ),
    tag = "companyphone",
    security(("bearer_auth" = []))
)]
pub async fn delete_company_phone(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyPhoneService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Company phone deleted".to_string()),
    )))
}

/// List contact email addresses
#[utoipa::path(
    get,
    path = "/companyemail/",
    responses(
        (status = 200, description = "List of emails", body = ApiResponse<CompanyEmailListDto>),
    ),
    tag = "companyemail"
)]
pub async fn list_company_emails(
    State(service): State<Arc<CompanyEmailService>>,
) -> Result<Json<ApiResponse<CompanyEmailListDto>>> {
    let company_emails = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(CompanyEmailListDto { company_emails }),
        None,
    )))
}

/// Create a contact email address
#[utoipa::path(
    post,
    path = "/companyemail/create/",
    request_body = CreateCompanyEmailDto,
    responses(
        (status = 201, description = "Email created", body = ApiResponse<CompanyEmailResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "companyemail",
    security(("bearer_auth" = []))
)]
pub async fn create_company_email(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyEmailService>>,
    AppJson(dto): AppJson<CreateCompanyEmailDto>,
) -> Result<(StatusCode, Json<ApiResponse<CompanyEmailResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let email = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(email), None)),
    ))
}

/// Update a contact email address (partial)
#[utoipa::path(
    put,
    path = "/companyemail/update/{id}/",
    params(("id" = Uuid, Path, description = "Email id")),
    request_body = UpdateCompanyEmailDto,
    responses(
        (status = 200, description = "Email updated", body = ApiResponse<CompanyEmailResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Email not found")
    ),
    tag = "companyemail",
    security(("bearer_auth" = []))
)]
pub async fn update_company_email(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyEmailService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCompanyEmailDto>,
) -> Result<Json<ApiResponse<CompanyEmailResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let email = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(email), None)))
}

/// Soft-delete a contact email address
#[utoipa::path(
    delete,
    path = "/companyemail/delete/{id}/",
    params(("id" = Uuid, Path, description = "Email id")),
    responses(
        (status = 200, description = "Email deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Email not found")
    ),
    tag = "companyemail",
    security(("bearer_auth" = []))
)]
pub async fn delete_company_email(
    _user: AuthenticatedUser,
    State(service): State<Arc<CompanyEmailService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Company email deleted".to_string()),
    )))
}
