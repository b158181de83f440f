use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::dto::auth_dto::LoginResponse;
use crate::error::{Error, Result};
use crate::models::admin_session::AdminSession;
use crate::utils::{crypto, time, token};

const INVALID_CREDENTIALS: &str = "invalid credentials";

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(pool: PgPool, config: Arc<Config>) -> Self {
        Self { pool, config }
    }

    /// Signs the administrator in and opens a session.
    ///
    /// Wrong email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        if !crypto::emails_match(email, &self.config.admin_email) {
            tracing::warn!("admin login rejected: unknown email");
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.into()));
        }
        if !crypto::verify_password(password, &self.config.admin_password_hash)? {
            tracing::warn!("admin login rejected: wrong password");
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let expires_at = time::hours_from_now(self.config.session_ttl_hours);
        let session = sqlx::query_as::<_, AdminSession>(
            r#"
            INSERT INTO admin_sessions (email, expires_at)
            VALUES ($1, $2)
            RETURNING id, email, created_at, expires_at, revoked_at
            "#,
        )
        .bind(&self.config.admin_email)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        let token = token::issue_admin_token(
            &self.config.jwt_secret,
            &session.email,
            session.id,
            session.expires_at,
        )?;
        tracing::info!(session_id = %session.id, "admin signed in");

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at,
        })
    }

    /// Returns the session if it is still open.
    pub async fn active_session(&self, session_id: Uuid) -> Result<AdminSession> {
        let session = sqlx::query_as::<_, AdminSession>(
            r#"
            SELECT id, email, created_at, expires_at, revoked_at
            FROM admin_sessions
            WHERE id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        match session {
            Some(session) if session.is_active_at(time::now()) => Ok(session),
            _ => Err(Error::Unauthorized("session_expired".into())),
        }
    }

    pub async fn logout(&self, session_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE admin_sessions
            SET revoked_at = NOW()
            WHERE id = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(session_id)
        .execute(&self.pool)
        .await?;

        tracing::info!(session_id = %session_id, "admin signed out");
        Ok(())
    }

    /// Drops sessions that expired or were revoked more than a day ago.
    pub async fn purge_stale_sessions(&self) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM admin_sessions
            WHERE expires_at < NOW() - INTERVAL '1 day'
               OR revoked_at < NOW() - INTERVAL '1 day'
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
