use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;

pub fn hash_password(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(plain.as_bytes(), &salt)?.to_string();
    Ok(password_hash)
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hashed)?;
    let ok = Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(ok)
}

/// Case-insensitive email comparison that does not short-circuit on content.
pub fn emails_match(given: &str, expected: &str) -> bool {
    let given = given.trim().to_lowercase();
    let expected = expected.trim().to_lowercase();
    given.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hashed = tokio_test::assert_ok!(hash_password("capsule-pass"));
        assert!(tokio_test::assert_ok!(verify_password("capsule-pass", &hashed)));
        assert!(!tokio_test::assert_ok!(verify_password("wrong", &hashed)));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        tokio_test::assert_err!(verify_password("x", "not-a-phc-string"));
    }

    #[test]
    fn email_comparison_ignores_case_and_padding() {
        assert!(emails_match(" Admin@Example.com ", "admin@example.com"));
        assert!(!emails_match("someone@example.com", "admin@example.com"));
    }
}
