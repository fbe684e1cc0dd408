//! Inline payload decoding (`data:` URIs and raw base64).

use base64::{engine::general_purpose, Engine as _};

use crate::error::{Result, UploadFileError};

/// Decodes an inline payload into bytes and an optional MIME type.
///
/// `data:<mime>;base64,<payload>` yields the MIME type from the header; a bare
/// base64 string carries no MIME signal.
pub fn parse_data_base64(data_base64: &str) -> Result<(Vec<u8>, Option<String>)> {
    if let Some(rest) = data_base64.strip_prefix("data:") {
        let (header, encoded) = rest
            .split_once(',')
            .ok_or_else(|| UploadFileError::Decoding("data URI has no ',' separator".into()))?;
        let mime = header.split(';').next().unwrap_or("").trim();
        let bytes = general_purpose::STANDARD.decode(encoded)?;
        let mime = (!mime.is_empty()).then(|| mime.to_string());
        return Ok((bytes, mime));
    }
    Ok((general_purpose::STANDARD.decode(data_base64)?, None))
}
