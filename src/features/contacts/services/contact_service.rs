use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::contacts::dtos::{
    ContactResponseDto, CreateContactDto, UpdateContactDto,
};
use crate::features::contacts::models::Contact;

const CONTACT_COLUMNS: &str = "id, name, phone, message, created_at, updated_at, is_active";

/// Service for visitor messages
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active messages, newest first
    pub async fn list(&self) -> Result<Vec<ContactResponseDto>> {
        let contacts = sqlx::query_as::<_, Contact>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contacts
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            "#,
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contacts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(contacts.into_iter().map(|c| c.into()).collect())
    }

    /// Store a visitor message (submitted without auth)
    pub async fn create(&self, dto: CreateContactDto) -> Result<ContactResponseDto> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            r#"
            INSERT INTO contacts (name, phone, message)
            VALUES ($1, $2, $3)
            RETURNING {CONTACT_COLUMNS}
            "#,
        ))
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(&dto.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create contact: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Contact message received: id={}", contact.id);

        Ok(contact.into())
    }

    /// Partial update
    pub async fn update(&self, id: Uuid, dto: UpdateContactDto) -> Result<ContactResponseDto> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            r#"
            UPDATE contacts
            SET name = COALESCE($1, name),
                phone = COALESCE($2, phone),
                message = COALESCE($3, message),
                updated_at = NOW()
            WHERE id = $4
            RETURNING {CONTACT_COLUMNS}
            "#,
        ))
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(&dto.message)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Contact {} not found", id)))?;

        Ok(contact.into())
    }

    /// Soft delete: flip the active flag, keep the row
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE contacts SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Contact {} not found", id)));
        }

        Ok(())
    }
}
