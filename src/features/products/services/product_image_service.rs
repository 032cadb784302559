use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{
    ListProductImagesQuery, ProductImageResponseDto, UpdateProductImageDto,
};
use crate::features::products::models::ProductImage;
use crate::modules::storage::ImageStore;
use crate::shared::multipart::UploadedFile;

const IMAGE_COLUMNS: &str =
    "id, product_id, image_min, image_max, created_at, updated_at, is_active";

/// Service for product gallery images
pub struct ProductImageService {
    pool: PgPool,
    images: Arc<ImageStore>,
}

impl ProductImageService {
    pub fn new(pool: PgPool, images: Arc<ImageStore>) -> Self {
        Self { pool, images }
    }

    /// List active gallery images, optionally scoped to one product
    pub async fn list(
        &self,
        query: ListProductImagesQuery,
    ) -> Result<Vec<ProductImageResponseDto>> {
        let rows = sqlx::query_as::<_, ProductImage>(&format!(
            r#"
            SELECT {IMAGE_COLUMNS}
            FROM product_images
            WHERE is_active = TRUE
              AND ($1::uuid IS NULL OR product_id = $1)
            ORDER BY created_at
            "#,
        ))
        .bind(query.product)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list product images: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|i| i.into()).collect())
    }

    /// Upload one or more files for a product, one gallery row per file.
    /// Each upload is stored under both size prefixes.
    pub async fn create_many(
        &self,
        product_id: Uuid,
        files: &[UploadedFile],
    ) -> Result<Vec<ProductImageResponseDto>> {
        self.ensure_product(product_id).await?;

        let mut created = Vec::with_capacity(files.len());
        for file in files {
            let pair = self
                .images
                .store_image_pair(
                    "product_images",
                    &file.file_name,
                    &file.content_type,
                    &file.data,
                )
                .await?;

            let row = sqlx::query_as::<_, ProductImage>(&format!(
                r#"
                INSERT INTO product_images (product_id, image_min, image_max)
                VALUES ($1, $2, $3)
                RETURNING {IMAGE_COLUMNS}
                "#,
            ))
            .bind(product_id)
            .bind(&pair.min_url)
            .bind(&pair.max_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create product image: {:?}", e);
                AppError::Database(e)
            })?;

            created.push(row.into());
        }

        tracing::info!(
            "Product images created: product={} count={}",
            product_id,
            created.len()
        );

        Ok(created)
    }

    /// Partial update; absent fields keep their stored values
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateProductImageDto,
    ) -> Result<ProductImageResponseDto> {
        if let Some(product_id) = dto.product {
            self.ensure_product(product_id).await?;
        }

        let row = sqlx::query_as::<_, ProductImage>(&format!(
            r#"
            UPDATE product_images
            SET product_id = COALESCE($1, product_id),
                image_min = COALESCE($2, image_min),
                image_max = COALESCE($3, image_max),
                updated_at = NOW()
            WHERE id = $4
            RETURNING {IMAGE_COLUMNS}
            "#,
        ))
        .bind(dto.product)
        .bind(&dto.image_min)
        .bind(&dto.image_max)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Product image {} not found", id)))?;

        Ok(row.into())
    }

    /// Soft delete: flip the active flag, keep the row
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE product_images SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product image {} not found", id)));
        }

        Ok(())
    }

    async fn ensure_product(&self, id: Uuid) -> Result<()> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1 AND is_active = TRUE)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if !exists {
            return Err(AppError::Validation(format!("Product {} not found", id)));
        }

        Ok(())
    }
}
