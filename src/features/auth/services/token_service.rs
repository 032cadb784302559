use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::AuthenticatedUser;

/// Service for issuing and resolving opaque bearer tokens.
///
/// Tokens carry no claims; every request resolves the token against the
/// auth_tokens table. Logout deletes the caller's tokens, which is the only
/// form of invalidation.
pub struct TokenService {
    pool: PgPool,
}

impl TokenService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Return the user's existing token or issue a fresh one
    pub async fn issue_for_user(&self, user_id: Uuid) -> Result<String> {
        let existing: Option<String> =
            sqlx::query_scalar("SELECT token FROM auth_tokens WHERE user_id = $1 LIMIT 1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        if let Some(token) = existing {
            return Ok(token);
        }

        let token = generate_token();

        sqlx::query("INSERT INTO auth_tokens (token, user_id) VALUES ($1, $2)")
            .bind(&token)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::info!("Issued token for user {}", user_id);

        Ok(token)
    }

    /// Resolve a bearer token to its (active) user
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let user = sqlx::query_as::<_, AuthenticatedUser>(
            r#"
            SELECT u.id, u.username, u.first_name, u.last_name
            FROM auth_tokens t
            JOIN users u ON u.id = t.user_id
            WHERE t.token = $1 AND u.is_active = TRUE
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        user.ok_or_else(|| AppError::Unauthorized("Invalid or expired token".to_string()))
    }

    /// Delete all tokens belonging to the user
    pub async fn revoke_for_user(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM auth_tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::info!("Revoked tokens for user {}", user_id);

        Ok(())
    }
}

/// 64 hex characters of random token material
fn generate_token() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_unique_hex() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
