//! Prints an Argon2 hash for the `ADMIN_PASSWORD_HASH` setting.
//!
//! Usage: `hash_password <password>`

use anyhow::{bail, Context};
use time_capsule_backend::utils::crypto::hash_password;

fn main() -> anyhow::Result<()> {
    let Some(password) = std::env::args().nth(1) else {
        bail!("usage: hash_password <password>");
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hashed = hash_password(&password)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .context("hashing password")?;
    println!("{}", hashed);
    Ok(())
}
