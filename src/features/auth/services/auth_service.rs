use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto};
use crate::features::auth::models::User;
use crate::features::auth::services::TokenService;

/// Service for login/logout against the users table
pub struct AuthService {
    pool: PgPool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Verify credentials and hand back a bearer token with a minimal profile
    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, first_name, last_name,
                   created_at, updated_at, is_active
            FROM users
            WHERE username = $1 AND is_active = TRUE
            "#,
        )
        .bind(&dto.username)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        verify_password(&dto.password, &user.password_hash)?;

        let token = self.tokens.issue_for_user(user.id).await?;

        tracing::info!("User '{}' logged in", user.username);

        Ok(LoginResponseDto {
            token,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        })
    }

    /// Drop every token the caller holds
    pub async fn logout(&self, user_id: Uuid) -> Result<()> {
        self.tokens.revoke_for_user(user_id).await
    }
}

fn verify_password(password: &str, stored_hash: &str) -> Result<()> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(format!("Corrupt password hash: {}", e)))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AppError::Unauthorized("Invalid username or password".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_verify_password_accepts_correct_password() {
        let stored = hash("s3cret");
        assert!(verify_password("s3cret", &stored).is_ok());
    }

    #[test]
    fn test_verify_password_rejects_wrong_password() {
        let stored = hash("s3cret");
        let err = verify_password("wrong", &stored).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_verify_password_rejects_corrupt_hash() {
        let err = verify_password("s3cret", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
