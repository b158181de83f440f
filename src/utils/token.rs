use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub sid: Uuid,
    pub exp: usize,
    pub role: Option<String>,
}

pub fn issue_admin_token(
    secret: &str,
    email: &str,
    session_id: Uuid,
    expires_at: DateTime<Utc>,
) -> jsonwebtoken::errors::Result<String> {
    let claims = Claims {
        sub: email.to_string(),
        sid: session_id,
        exp: expires_at.timestamp().max(0) as usize,
        role: Some(ADMIN_ROLE.to_string()),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn decode_token(secret: &str, token: &str) -> jsonwebtoken::errors::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn issued_token_decodes_with_same_secret() {
        let sid = Uuid::new_v4();
        let token =
            issue_admin_token("secret", "admin@example.com", sid, Utc::now() + Duration::hours(1))
                .unwrap();
        let claims = decode_token("secret", &token).unwrap();
        assert_eq!(claims.sid, sid);
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.role.as_deref(), Some(ADMIN_ROLE));
        assert!(decode_token("other", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_admin_token(
            "secret",
            "admin@example.com",
            Uuid::new_v4(),
            Utc::now() - Duration::hours(2),
        )
        .unwrap();
        assert!(decode_token("secret", &token).is_err());
    }
}
