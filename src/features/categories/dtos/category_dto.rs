use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::shared::multipart::FormData;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
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
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            title_uz: c.title_uz,
            title_ru: c.title_ru,
            title_en: c.title_en,
            description_uz: c.description_uz,
            description_ru: c.description_ru,
            description_en: c.description_en,
            image: c.image,
            priority: c.priority,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// List wrapper keyed by resource name
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    pub categories: Vec<CategoryResponseDto>,
}

/// Fields for creating a category, collected from the multipart form
#[derive(Debug, Clone, Validate, ToSchema)]
pub struct CreateCategoryDto {
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

impl CreateCategoryDto {
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
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 255))]
    pub title_uz: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description_uz: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub image: Option<String>,
    pub priority: Option<i32>,
}

pub(crate) fn parse_priority(raw: Option<String>) -> Result<i32> {
    match raw {
        None => Ok(0),
        Some(s) => s
            .parse::<i32>()
            .map_err(|_| AppError::Validation("Field 'priority' must be an integer".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority(None).unwrap(), 0);
        assert_eq!(parse_priority(Some("7".to_string())).unwrap(), 7);
        assert!(parse_priority(Some("high".to_string())).is_err());
    }
}
