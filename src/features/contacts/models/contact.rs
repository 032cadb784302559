use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a visitor message
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}
