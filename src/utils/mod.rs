pub mod access_code;
pub mod crypto;
pub mod image;
pub mod time;
pub mod token;
pub mod validation;
