use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::products::models::Product;
use crate::shared::multipart::FormData;
use crate::shared::paging::{default_limit, lenient_limit};

use super::product_image_dto::ProductImageResponseDto;

/// Response DTO for product with its category and gallery inlined
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub title_uz: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description_uz: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub price: Decimal,
    pub image_min: Option<String>,
    pub image_max: Option<String>,
    pub category: CategoryResponseDto,
    pub priority: i32,
    pub product_images: Vec<ProductImageResponseDto>,
    pub total_images: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductResponseDto {
    pub fn assemble(
        product: Product,
        category: CategoryResponseDto,
        images: Vec<ProductImageResponseDto>,
    ) -> Self {
        Self {
            id: product.id,
            title_uz: product.title_uz,
            title_ru: product.title_ru,
            title_en: product.title_en,
            description_uz: product.description_uz,
            description_ru: product.description_ru,
            description_en: product.description_en,
            price: product.price,
            image_min: product.image_min,
            image_max: product.image_max,
            category,
            priority: product.priority,
            total_images: images.len(),
            product_images: images,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Incrementally loaded product list with paging hints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListDto {
    pub products: Vec<ProductResponseDto>,
    pub total: i64,
    pub next_limit: i64,
    pub has_more: bool,
}

/// Query parameters for the product list endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    /// Filter by category id
    pub category: Option<Uuid>,
    /// How many products to return from the top of the ordering
    #[serde(default = "default_limit", deserialize_with = "lenient_limit")]
    pub limit: i64,
}

/// Fields for creating a product, collected from the multipart form
#[derive(Debug, Clone, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 255))]
    pub title_uz: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    #[validate(length(min = 1))]
    pub description_uz: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub price: Decimal,
    pub category: Uuid,
    pub priority: i32,
}

impl CreateProductDto {
    pub fn from_form(form: &FormData) -> Result<Self> {
        Ok(Self {
            title_uz: form.require_text("title_uz")?,
            title_ru: form.optional_text("title_ru"),
            title_en: form.optional_text("title_en"),
            description_uz: form.require_text("description_uz")?,
            description_ru: form.optional_text("description_ru"),
            description_en: form.optional_text("description_en"),
            price: parse_price(form.require_text("price")?)?,
            category: parse_uuid_field("category", form.require_text("category")?)?,
            priority: crate::features::categories::dtos::parse_priority(
                form.optional_text("priority"),
            )?,
        })
    }
}

/// Partial update body; absent fields keep their stored values
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, max = 255))]
    pub title_uz: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description_uz: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub price: Option<Decimal>,
    pub image_min: Option<String>,
    pub image_max: Option<String>,
    pub category: Option<Uuid>,
    pub priority: Option<i32>,
}

pub(crate) fn parse_price(raw: String) -> Result<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|_| AppError::Validation("Field 'price' must be a decimal number".to_string()))
}

pub(crate) fn parse_uuid_field(name: &str, raw: String) -> Result<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Validation(format!("Field '{name}' must be a UUID")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(
            parse_price("1999.99".to_string()).unwrap(),
            Decimal::from_str("1999.99").unwrap()
        );
        assert_eq!(
            parse_price(" 250 ".to_string()).unwrap(),
            Decimal::from(250)
        );
        assert!(parse_price("free".to_string()).is_err());
    }

    #[test]
    fn test_parse_uuid_field() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_uuid_field("category", id.to_string()).unwrap(),
            id
        );
        assert!(parse_uuid_field("category", "not-a-uuid".to_string()).is_err());
    }

    #[test]
    fn test_list_query_defaults() {
        let q: ListProductsQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(q.limit, 12);
        assert!(q.category.is_none());

        let q: ListProductsQuery = serde_urlencoded::from_str("limit=abc").unwrap();
        assert_eq!(q.limit, 12);
    }
}
