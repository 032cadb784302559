use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the company profile
#[derive(Debug, Clone, FromRow)]
pub struct Company {
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
    pub is_active: bool,
}

/// Branch office address
#[derive(Debug, Clone, FromRow)]
pub struct CompanyAddress {
    pub id: Uuid,
    pub address_uz: String,
    pub address_ru: Option<String>,
    pub address_en: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Gallery image for the company profile
#[derive(Debug, Clone, FromRow)]
pub struct CompanyImage {
    pub id: Uuid,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Contact phone number
#[derive(Debug, Clone, FromRow)]
pub struct CompanyPhone {
    pub id: Uuid,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Contact email address
#[derive(Debug, Clone, FromRow)]
pub struct CompanyEmail {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}
