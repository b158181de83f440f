use validator::ValidationError;

use crate::models::font::is_known_font;

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn known_font(value: &str) -> Result<(), ValidationError> {
    if !is_known_font(value) {
        return Err(ValidationError::new("unknown_font"));
    }
    Ok(())
}
