use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::company::models::{
    Company, CompanyAddress, CompanyEmail, CompanyImage, CompanyPhone,
};
use crate::shared::validation::PHONE_REGEX;

/// Response DTO for the company profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponseDto {
    pub id: Uuid,
    pub title_uz: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description_uz: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub address_uz: String,
    pub address_ru: Option<String>,
    pub address_en: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponseDto {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            title_uz: c.title_uz,
            title_ru: c.title_ru,
            title_en: c.title_en,
            description_uz: c.description_uz,
            description_ru: c.description_ru,
            description_en: c.description_en,
            address_uz: c.address_uz,
            address_ru: c.address_ru,
            address_en: c.address_en,
            latitude: c.latitude,
            longitude: c.longitude,
            instagram: c.instagram,
            facebook: c.facebook,
            telegram: c.telegram,
            whatsapp: c.whatsapp,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Body for creating the company profile
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyDto {
    #[validate(length(min = 1, max = 255))]
    pub title_uz: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    #[validate(length(min = 1))]
    pub description_uz: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address_uz: String,
    pub address_ru: Option<String>,
    pub address_en: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
}

/// Partial update body; absent fields keep their stored values
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyDto {
    #[validate(length(min = 1, max = 255))]
    pub title_uz: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description_uz: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub address_uz: Option<String>,
    pub address_ru: Option<String>,
    pub address_en: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
}

/// Response DTO for a branch address
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyAddressResponseDto {
    pub id: Uuid,
    pub address_uz: String,
    pub address_ru: Option<String>,
    pub address_en: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyAddress> for CompanyAddressResponseDto {
    fn from(a: CompanyAddress) -> Self {
        Self {
            id: a.id,
            address_uz: a.address_uz,
            address_ru: a.address_ru,
            address_en: a.address_en,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyAddressListDto {
    pub company_addresses: Vec<CompanyAddressResponseDto>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyAddressDto {
    #[validate(length(min = 1, max = 255))]
    pub address_uz: String,
    pub address_ru: Option<String>,
    pub address_en: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyAddressDto {
    #[validate(length(min = 1, max = 255))]
    pub address_uz: Option<String>,
    pub address_ru: Option<String>,
    pub address_en: Option<String>,
}

/// Response DTO for a company gallery image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyImageResponseDto {
    pub id: Uuid,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyImage> for CompanyImageResponseDto {
    fn from(i: CompanyImage) -> Self {
        Self {
            id: i.id,
            image: i.image,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyImageListDto {
    pub company_images: Vec<CompanyImageResponseDto>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCompanyImageDto {
    pub image: Option<String>,
}

/// Response DTO for a contact phone
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyPhoneResponseDto {
    pub id: Uuid,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyPhone> for CompanyPhoneResponseDto {
    fn from(p: CompanyPhone) -> Self {
        Self {
            id: p.id,
            phone: p.phone,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyPhoneListDto {
    pub company_phones: Vec<CompanyPhoneResponseDto>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyPhoneDto {
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyPhoneDto {
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,
}

/// Response DTO for a contact email
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyEmailResponseDto {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyEmail> for CompanyEmailResponseDto {
    fn from(e: CompanyEmail) -> Self {
        Self {
            id: e.id,
            email: e.email,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyEmailListDto {
    pub company_emails: Vec<CompanyEmailResponseDto>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyEmailDto {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyEmailDto {
    #[validate(email)]
    pub email: Option<String>,
}
