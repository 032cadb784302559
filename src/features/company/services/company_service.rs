use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::company::dtos::{CompanyResponseDto, CreateCompanyDto, UpdateCompanyDto};
use crate::features::company::models::Company;
use crate::modules::translation::Translator;
use crate::shared::i18n::{autofill_translations, LocalizedField};

const COMPANY_COLUMNS: &str = "id, title_uz, title_ru, title_en, \
     description_uz, description_ru, description_en, \
     address_uz, address_ru, address_en, \
     latitude, longitude, instagram, facebook, telegram, whatsapp, \
     created_at, updated_at, is_active";

/// Service for the company profile singleton
pub struct CompanyService {
    pool: PgPool,
    translator: Arc<dyn Translator>,
}

impl CompanyService {
    pub fn new(pool: PgPool, translator: Arc<dyn Translator>) -> Self {
        Self { pool, translator }
    }

    /// The most recently created active profile, as a single object
    pub async fn current(&self) -> Result<CompanyResponseDto> {
        let company = sqlx::query_as::<_, Company>(&format!(
            r#"
            SELECT {COMPANY_COLUMNS}
            FROM companies
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Company profile not found".to_string()))?;

        Ok(company.into())
    }

    /// Create a profile; translations auto-filled once, before first save
    pub async fn create(&self, mut dto: CreateCompanyDto) -> Result<CompanyResponseDto> {
        autofill_translations(
            self.translator.as_ref(),
            &mut [
                LocalizedField::new(&dto.title_uz, &mut dto.title_ru, &mut dto.title_en),
                LocalizedField::new(
                    &dto.description_uz,
                    &mut dto.description_ru,
                    &mut dto.description_en,
                ),
                LocalizedField::new(&dto.address_uz, &mut dto.address_ru, &mut dto.address_en),
            ],
        )
        .await;

        let company = sqlx::query_as::<_, Company>(&format!(
            r#"
            INSERT INTO companies
                (title_uz, title_ru, title_en,
                 description_uz, description_ru, description_en,
                 address_uz, address_ru, address_en,
                 latitude, longitude, instagram, facebook, telegram, whatsapp)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {COMPANY_COLUMNS}
            "#,
        ))
        .bind(&dto.title_uz)
        .bind(&dto.title_ru)
        .bind(&dto.title_en)
        .bind(&dto.description_uz)
        .bind(&dto.description_ru)
        .bind(&dto.description_en)
        .bind(&dto.address_uz)
        .bind(&dto.address_ru)
        .bind(&dto.address_en)
        .bind(dto.latitude)
        .bind(dto.longitude)
        .bind(&dto.instagram)
        .bind(&dto.facebook)
        .bind(&dto.telegram)
        .bind(&dto.whatsapp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create company profile: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Company profile created: id={}", company.id);

        Ok(company.into())
    }

    /// Partial update; the auto-translate hook never runs here
    pub async fn update(&self, id: Uuid, dto: UpdateCompanyDto) -> Result<CompanyResponseDto> {
        let company = sqlx::query_as::<_, Company>(&format!(
            r#"
            UPDATE companies
            SET title_uz = COALESCE($1, title_uz),
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                description_uz = COALESCE($4, description_uz),
                description_ru = COALESCE($5, description_ru),
                description_en = COALESCE($6, description_en),
                address_uz = COALESCE($7, address_uz),
                address_ru = COALESCE($8, address_ru),
                address_en = COALESCE($9, address_en),
                latitude = COALESCE($10, latitude),
                longitude = COALESCE($11, longitude),
                instagram = COALESCE($12, instagram),
                facebook = COALESCE($13, facebook),
                telegram = COALESCE($14, telegram),
                whatsapp = COALESCE($15, whatsapp),
                updated_at = NOW()
            WHERE id = $16
            RETURNING {COMPANY_COLUMNS}
            "#,
        ))
        .bind(&dto.title_uz)
        .bind(&dto.title_ru)
        .bind(&dto.title_en)
        .bind(&dto.description_uz)
        .bind(&dto.description_ru)
        .bind(&dto.description_en)
        .bind(&dto.address_uz)
        .bind(&dto.address_ru)
        .bind(&dto.address_en)
        .bind(dto.latitude)
        .bind(dto.longitude)
        .bind(&dto.instagram)
        .bind(&dto.facebook)
        .bind(&dto.telegram)
        .bind(&dto.whatsapp)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Company {} not found", id)))?;

        Ok(company.into())
    }

    /// Soft delete: flip the active flag, keep the row
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE companies SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Company {} not found", id)));
        }

        Ok(())
    }
}
