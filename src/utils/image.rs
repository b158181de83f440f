use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

const ALLOWED_TYPES: [(&str, &[u8]); 3] = [
    ("image/jpeg", &[0xFF, 0xD8]),
    ("image/png", &[0x89, 0x50, 0x4E, 0x47]),
    ("image/webp", b"RIFF"),
];

/// Checks an attached image sent as a `data:<mime>;base64,<payload>` URI.
///
/// Returns the URI unchanged when the media type is allowed, the payload is
/// valid Base64, its magic bytes match the declared type and the decoded size
/// fits `max_bytes`.
pub fn validate_data_uri(uri: &str, max_bytes: usize) -> Result<&str> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| Error::BadRequest("image must be a data URI".into()))?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| Error::BadRequest("image must be Base64 encoded".into()))?;

    let mime = mime.to_ascii_lowercase();
    let magic = ALLOWED_TYPES
        .iter()
        .find(|(allowed, _)| *allowed == mime)
        .map(|(_, magic)| *magic)
        .ok_or_else(|| Error::BadRequest(format!("image type {} is not allowed", mime)))?;

    // Base64 expands by 4/3, so reject oversized payloads before decoding.
    if payload.len() / 4 * 3 > max_bytes + 3 {
        return Err(Error::BadRequest("image is too large".into()));
    }

    let data = STANDARD
        .decode(payload)
        .map_err(|_| Error::BadRequest("image payload is not valid Base64".into()))?;
    if data.len() > max_bytes {
        return Err(Error::BadRequest("image is too large".into()));
    }
    if !data.starts_with(magic) {
        return Err(Error::BadRequest(format!("invalid {} content", mime)));
    }

    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_uri(mime: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
    }

    #[test]
    fn accepts_jpeg() {
        let uri = data_uri("image/jpeg", &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10]);
        assert!(validate_data_uri(&uri, 1024).is_ok());
    }

    #[test]
    fn rejects_mismatched_magic() {
        let uri = data_uri("image/png", &[0xFF, 0xD8, 0xFF]);
        assert!(validate_data_uri(&uri, 1024).is_err());
    }

    #[test]
    fn rejects_other_types_and_urls() {
        let uri = data_uri("image/gif", b"GIF89a");
        assert!(validate_data_uri(&uri, 1024).is_err());
        assert!(validate_data_uri("https://example.com/a.png", 1024).is_err());
        assert!(validate_data_uri("data:image/png,rawdata", 1024).is_err());
    }

    #[test]
    fn rejects_oversized_payload() {
        let mut bytes = vec![0x89, 0x50, 0x4E, 0x47];
        bytes.extend(std::iter::repeat(0u8).take(2048));
        let uri = data_uri("image/png", &bytes);
        assert!(validate_data_uri(&uri, 1024).is_err());
        assert!(validate_data_uri(&uri, 4096).is_ok());
    }
}
