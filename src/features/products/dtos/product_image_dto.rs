use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::products::models::ProductImage;

/// Response DTO for a product gallery image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageResponseDto {
    pub id: Uuid,
    pub product: Uuid,
    pub image_min: String,
    pub image_max: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductImage> for ProductImageResponseDto {
    fn from(i: ProductImage) -> Self {
        Self {
            id: i.id,
            product: i.product_id,
            image_min: i.image_min,
            image_max: i.image_max,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

/// List wrapper keyed by resource name
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductImageListDto {
    pub product_images: Vec<ProductImageResponseDto>,
}

/// Query parameters for the gallery list endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListProductImagesQuery {
    /// Filter by product id
    pub product: Option<Uuid>,
}

/// Partial update body; absent fields keep their stored values
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProductImageDto {
    pub product: Option<Uuid>,
    pub image_min: Option<String>,
    pub image_max: Option<String>,
}
