use crate::error::{Error, Result};
use argon2::password_hash::PasswordHash;
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_CLOSING_MESSAGE: &str = "지금까지 오즈코딩스쿨이였습니다.";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub session_ttl_hours: i64,
    pub public_rps: u32,
    pub admin_rps: u32,
    pub max_image_bytes: usize,
    pub closing_message: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            jwt_secret: get_env("JWT_SECRET")?,
            admin_email: get_env("ADMIN_EMAIL")?,
            admin_password_hash: parse_password_hash(
                "ADMIN_PASSWORD_HASH",
                &get_env("ADMIN_PASSWORD_HASH")?,
            )?,
            session_ttl_hours: get_env_parse_or("SESSION_TTL_HOURS", 12)?,
            public_rps: get_env_parse_or("PUBLIC_RPS", 20)?,
            admin_rps: get_env_parse_or("ADMIN_RPS", 50)?,
            max_image_bytes: get_env_parse_or("MAX_IMAGE_BYTES", 2 * 1024 * 1024)?,
            closing_message: env::var("CLOSING_MESSAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CLOSING_MESSAGE.to_string()),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

/// Accepts only a PHC string argon2 can verify against.
fn parse_password_hash(name: &str, raw: &str) -> Result<String> {
    let raw = raw.trim();
    PasswordHash::new(raw)
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))?;
    Ok(raw.to_string())
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
