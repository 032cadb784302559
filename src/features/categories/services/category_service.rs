use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::modules::storage::ImageStore;
use crate::modules::translation::Translator;
use crate::shared::i18n::{autofill_translations, LocalizedField};
use crate::shared::multipart::UploadedFile;

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
    translator: Arc<dyn Translator>,
    images: Arc<ImageStore>,
}

impl CategoryService {
    pub fn new(pool: PgPool, translator: Arc<dyn Translator>, images: Arc<ImageStore>) -> Self {
        Self {
            pool,
            translator,
            images,
        }
    }

    /// List all active categories ordered by priority
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title_uz, title_ru, title_en,
                   description_uz, description_ru, description_en,
                   image, priority, created_at, updated_at, is_active
            FROM categories
            WHERE is_active = TRUE
            ORDER BY priority, title_uz
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Create a category; translations auto-filled once, before first save
    pub async fn create(
        &self,
        mut dto: CreateCategoryDto,
        image: &UploadedFile,
    ) -> Result<CategoryResponseDto> {
        autofill_translations(
            self.translator.as_ref(),
            &mut [
                LocalizedField::new(&dto.title_uz, &mut dto.title_ru, &mut dto.title_en),
                LocalizedField::new(
                    &dto.description_uz,
                    &mut dto.description_ru,
                    &mut dto.description_en,
                ),
            ],
        )
        .await;

        let image_url = self
            .images
            .store_image(
                "category_images",
                &image.file_name,
                &image.content_type,
                &image.data,
            )
            .await?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories
                (title_uz, title_ru, title_en,
                 description_uz, description_ru, description_en,
                 image, priority)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title_uz, title_ru, title_en,
                      description_uz, description_ru, description_en,
                      image, priority, created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.title_uz)
        .bind(&dto.title_ru)
        .bind(&dto.title_en)
        .bind(&dto.description_uz)
        .bind(&dto.description_ru)
        .bind(&dto.description_en)
        .bind(&image_url)
        .bind(dto.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Category created: id={}", category.id);

        Ok(category.into())
    }

    /// Partial update; the auto-translate hook never runs here
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET title_uz = COALESCE($1, title_uz),
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                description_uz = COALESCE($4, description_uz),
                description_ru = COALESCE($5, description_ru),
                description_en = COALESCE($6, description_en),
                image = COALESCE($7, image),
                priority = COALESCE($8, priority),
                updated_at = NOW()
            WHERE id = $9
            RETURNING id, title_uz, title_ru, title_en,
                      description_uz, description_ru, description_en,
                      image, priority, created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.title_uz)
        .bind(&dto.title_ru)
        .bind(&dto.title_en)
        .bind(&dto.description_uz)
        .bind(&dto.description_ru)
        .bind(&dto.description_en)
        .bind(&dto.image)
        .bind(dto.priority)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        Ok(category.into())
    }

    /// Soft delete: flip the active flag, keep the row
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE categories SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        Ok(())
    }
}
