use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sliders::dtos::{CreateSliderDto, SliderResponseDto, UpdateSliderDto};
use crate::features::sliders::models::Slider;
use crate::modules::storage::ImageStore;
use crate::modules::translation::Translator;
use crate::shared::i18n::{autofill_translations, LocalizedField};
use crate::shared::multipart::UploadedFile;

const SLIDER_COLUMNS: &str = "id, title_uz, title_ru, title_en, \
     description_uz, description_ru, description_en, \
     image_min, image_max, priority, created_at, updated_at, is_active";

/// Service for slider operations
pub struct SliderService {
    pool: PgPool,
    translator: Arc<dyn Translator>,
    images: Arc<ImageStore>,
}

impl SliderService {
    pub fn new(pool: PgPool, translator: Arc<dyn Translator>, images: Arc<ImageStore>) -> Self {
        Self {
            pool,
            translator,
            images,
        }
    }

    /// List all active sliders ordered by priority
    pub async fn list(&self) -> Result<Vec<SliderResponseDto>> {
        let sliders = sqlx::query_as::<_, Slider>(&format!(
            r#"
            SELECT {SLIDER_COLUMNS}
            FROM sliders
            WHERE is_active = TRUE
            ORDER BY priority, created_at
            "#,
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sliders: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(sliders.into_iter().map(|s| s.into()).collect())
    }

    /// Create a slider; both image slots are optional
    pub async fn create(
        &self,
        mut dto: CreateSliderDto,
        image_min: Option<&UploadedFile>,
        image_max: Option<&UploadedFile>,
    ) -> Result<SliderResponseDto> {
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

        let min_url = self.upload("slider_images/300", image_min).await?;
        let max_url = self.upload("slider_images/600", image_max).await?;

        let slider = sqlx::query_as::<_, Slider>(&format!(
            r#"
            INSERT INTO sliders
                (title_uz, title_ru, title_en,
                 description_uz, description_ru, description_en,
                 image_min, image_max, priority)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SLIDER_COLUMNS}
            "#,
        ))
        .bind(&dto.title_uz)
        .bind(&dto.title_ru)
        .bind(&dto.title_en)
        .bind(&dto.description_uz)
        .bind(&dto.description_ru)
        .bind(&dto.description_en)
        .bind(&min_url)
        .bind(&max_url)
        .bind(dto.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create slider: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Slider created: id={}", slider.id);

        Ok(slider.into())
    }

    /// Partial update; the auto-translate hook never runs here
    pub async fn update(&self, id: Uuid, dto: UpdateSliderDto) -> Result<SliderResponseDto> {
        let slider = sqlx::query_as::<_, Slider>(&format!(
            r#"
            UPDATE sliders
            SET title_uz = COALESCE($1, title_uz),
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                description_uz = COALESCE($4, description_uz),
                description_ru = COALESCE($5, description_ru),
                description_en = COALESCE($6, description_en),
                image_min = COALESCE($7, image_min),
                image_max = COALESCE($8, image_max),
                priority = COALESCE($9, priority),
                updated_at = NOW()
            WHERE id = $10
            RETURNING {SLIDER_COLUMNS}
            "#,
        ))
        .bind(&dto.title_uz)
        .bind(&dto.title_ru)
        .bind(&dto.title_en)
        .bind(&dto.description_uz)
        .bind(&dto.description_ru)
        .bind(&dto.description_en)
        .bind(&dto.image_min)
        .bind(&dto.image_max)
        .bind(dto.priority)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Slider {} not found", id)))?;

        Ok(slider.into())
    }

    /// Soft delete: flip the active flag, keep the row
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE sliders SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Slider {} not found", id)));
        }

        Ok(())
    }

    async fn upload(&self, folder: &str, file: Option<&UploadedFile>) -> Result<Option<String>> {
        match file {
            Some(f) => {
                let url = self
                    .images
                    .store_image(folder, &f.file_name, &f.content_type, &f.data)
                    .await?;
                Ok(Some(url))
            }
            None => Ok(None),
        }
    }
}
