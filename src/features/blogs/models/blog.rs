use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a home page blog entry
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title_uz: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description_uz: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub image_min: Option<String>,
    pub image_max: Option<String>,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}
