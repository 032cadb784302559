use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::features::categories::dtos::parse_priority;
use crate::features::blogs::models::Blog;
use crate::shared::multipart::FormData;

/// Response DTO for blog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogResponseDto {
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
}

impl From<Blog> for BlogResponseDto {
    fn from(s: Blog) -> Self {
        Self {
            id: s.id,
            title_uz: s.title_uz,
            title_ru: s.title_ru,
            title_en: s.title_en,
            description_uz: s.description_uz,
            description_ru: s.description_ru,
            description_en: s.description_en,
            image_min: s.image_min,
            image_max: s.image_max,
            priority: s.priority,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// List wrapper keyed by resource name
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BlogListDto {
    pub blogs: Vec<BlogResponseDto>,
}

/// Fields for creating a blog, collected from the multipart form
#[derive(Debug, Clone, Validate, ToSchema)]
pub struct CreateBlogDto {
    #[validate(length(min = 1, max = 255))]
    pub title_uz: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    #[validate(length(min = 1))]
    pub description_uz: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub priority: i32,
}

impl CreateBlogDto {
    pub fn from_form(form: &FormData) -> Result<Self> {
        Ok(Self {
            title_uz: form.require_text("title_uz")?,
            title_ru: form.optional_text("title_ru"),
            title_en: form.optional_text("title_en"),
            description_uz: form.require_text("description_uz")?,
            description_ru: form.optional_text("description_ru"),
            description_en: form.optional_text("description_en"),
            priority: parse_priority(form.optional_text("priority"))?,
        })
    }
}

/// Partial update body; absent fields keep their stored values
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBlogDto {
    #[validate(length(min = 1, max = 255))]
    pub title_uz: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description_uz: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub image_min: Option<String>,
    pub image_max: Option<String>,
    pub priority: Option<i32>,
}
