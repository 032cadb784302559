use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub title_uz: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description_uz: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub image: Option<String>,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}
