use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::company::dtos::{
    CompanyAddressResponseDto, CompanyEmailResponseDto, CompanyImageResponseDto,
    CompanyPhoneResponseDto, CreateCompanyAddressDto, CreateCompanyEmailDto,
    CreateCompanyPhoneDto, UpdateCompanyAddressDto, UpdateCompanyEmailDto, UpdateCompanyImageDto,
    UpdateCompanyPhoneDto,
};
use crate::features::company::models::{
    CompanyAddress, CompanyEmail, CompanyImage, CompanyPhone,
};
use crate::modules::storage::ImageStore;
use crate::modules::translation::Translator;
use crate::shared::i18n::{autofill_translations, LocalizedField};
use crate::shared::multipart::UploadedFile;

/// Service for branch office addresses
pub struct CompanyAddressService {
    pool: PgPool,
    translator: Arc<dyn Translator>,
}

impl CompanyAddressService {
    pub fn new(pool: PgPool, translator: Arc<dyn Translator>) -> Self {
        Self { pool, translator }
    }

    pub async fn list(&self) -> Result<Vec<CompanyAddressResponseDto>> {
        let rows = sqlx::query_as::<_, CompanyAddress>(
            r#"
            SELECT id, address_uz, address_ru, address_en,
                   created_at, updated_at, is_active
            FROM company_addresses
            WHERE is_active = TRUE
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(|a| a.into()).collect())
    }

    pub async fn create(
        &self,
        mut dto: CreateCompanyAddressDto,
    ) -> Result<CompanyAddressResponseDto> {
        autofill_translations(
            self.translator.as_ref(),
            &mut [LocalizedField::new(
                &dto.address_uz,
                &mut dto.address_ru,
                &mut dto.address_en,
            )],
        )
        .await;

        let row = sqlx::query_as::<_, CompanyAddress>(
            r#"
            INSERT INTO company_addresses (address_uz, address_ru, address_en)
            VALUES ($1, $2, $3)
            RETURNING id, address_uz, address_ru, address_en,
                      created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.address_uz)
        .bind(&dto.address_ru)
        .bind(&dto.address_en)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create company address: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateCompanyAddressDto,
    ) -> Result<CompanyAddressResponseDto> {
        let row = sqlx::query_as::<_, CompanyAddress>(
            r#"
            UPDATE company_addresses
            SET address_uz = COALESCE($1, address_uz),
                address_ru = COALESCE($2, address_ru),
                address_en = COALESCE($3, address_en),
                updated_at = NOW()
            WHERE id = $4
            RETURNING id, address_uz, address_ru, address_en,
                      created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.address_uz)
        .bind(&dto.address_ru)
        .bind(&dto.address_en)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Company address {} not found", id)))?;

        Ok(row.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        soft_delete(&self.pool, "company_addresses", "Company address", id).await
    }
}

/// Service for company gallery images
pub struct CompanyImageService {
    pool: PgPool,
    images: Arc<ImageStore>,
}

impl CompanyImageService {
    pub fn new(pool: PgPool, images: Arc<ImageStore>) -> Self {
        Self { pool, images }
    }

    pub async fn list(&self) -> Result<Vec<CompanyImageResponseDto>> {
        let rows = sqlx::query_as::<_, CompanyImage>(
            r#"
            SELECT id, image, created_at, updated_at, is_active
            FROM company_images
            WHERE is_active = TRUE
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(|i| i.into()).collect())
    }

    pub async fn create(&self, file: &UploadedFile) -> Result<CompanyImageResponseDto> {
        let url = self
            .images
            .store_image(
                "company_images",
                &file.file_name,
                &file.content_type,
                &file.data,
            )
            .await?;

        let row = sqlx::query_as::<_, CompanyImage>(
            r#"
            INSERT INTO company_images (image)
            VALUES ($1)
            RETURNING id, image, created_at, updated_at, is_active
            "#,
        )
        .bind(&url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create company image: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateCompanyImageDto,
    ) -> Result<CompanyImageResponseDto> {
        let row = sqlx::query_as::<_, CompanyImage>(
            r#"
            UPDATE company_images
            SET image = COALESCE($1, image),
                updated_at = NOW()
            WHERE id = $2
            RETURNING id, image, created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.image)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Company image {} not found", id)))?;

        Ok(row.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        soft_delete(&self.pool, "company_images", "Company image", id).await
    }
}

/// Service for contact phone numbers
pub struct CompanyPhoneService {
    pool: PgPool,
}

impl CompanyPhoneService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<CompanyPhoneResponseDto>> {
        let rows = sqlx::query_as::<_, CompanyPhone>(
            r#"
            SELECT id, phone, created_at, updated_at, is_active
            FROM company_phones
            WHERE is_active = TRUE
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(|p| p.into()).collect())
    }

    pub async fn create(&self, dto: CreateCompanyPhoneDto) -> Result<CompanyPhoneResponseDto> {
        let row = sqlx::query_as::<_, CompanyPhone>(
            r#"
            INSERT INTO company_phones (phone)
            VALUES ($1)
            RETURNING id, phone, created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create company phone: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateCompanyPhoneDto,
    ) -> Result<CompanyPhoneResponseDto> {
        let row = sqlx::query_as::<_, CompanyPhone>(
            r#"
            UPDATE company_phones
            SET phone = COALESCE($1, phone),
                updated_at = NOW()
            WHERE id = $2
            RETURNING id, phone, created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Company phone {} not found", id)))?;

        Ok(row.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        soft_delete(&self.pool, "company_phones", "Company phone", id).await
    }
}

/// Service for contact email addresses
pub struct CompanyEmailService {
    pool: PgPool,
}

impl CompanyEmailService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<CompanyEmailResponseDto>> {
        let rows = sqlx::query_as::<_, CompanyEmail>(
            r#"
            SELECT id, email, created_at, updated_at, is_active
            FROM company_emails
            WHERE is_active = TRUE
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(|e| e.into()).collect())
    }

    pub async fn create(&self, dto: CreateCompanyEmailDto) -> Result<CompanyEmailResponseDto> {
        let row = sqlx::query_as::<_, CompanyEmail>(
            r#"
            INSERT INTO company_emails (email)
            VALUES ($1)
            RETURNING id, email, created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create company email: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateCompanyEmailDto,
    ) -> Result<CompanyEmailResponseDto> {
        let row = sqlx::query_as::<_, CompanyEmail>(
            r#"
            UPDATE company_emails
            SET email = COALESCE($1, email),
                updated_at = NOW()
            WHERE id = $2
            RETURNING id, email, created_at, updated_at, is_active
            "#,
        )
        .bind(&dto.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Company email {} not found", id)))?;

        Ok(row.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        soft_delete(&self.pool, "company_emails", "Company email", id).await
    }
}

async fn soft_delete(pool: &PgPool, table: &str, label: &str, id: Uuid) -> Result<()> {
    let result = sqlx::query(&format!(
        "UPDATE {table} SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(AppError::Database)?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("{} {} not found", label, id)));
    }

    Ok(())
}
