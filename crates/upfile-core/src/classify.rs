//! Extension guessing from MIME type and source URL.

/// Extension used when neither the MIME type nor the URL gives a hint.
pub const DEFAULT_EXTENSION: &str = "png";

/// Guesses a file extension for stored content.
///
/// The MIME type is checked first by substring (`png`, `jpeg`/`jpg`, `webp`),
/// then the lowercased URL for `.png`, `.jpg`, `.jpeg`, `.webp`. `jpeg` is
/// always reported as `jpg`. Falls back to [`DEFAULT_EXTENSION`].
pub fn guess_extension(mime_type: Option<&str>, url: Option<&str>) -> &'static str {
    if let Some(mime) = mime_type {
        if mime.contains("png") {
            return "png";
        }
        if mime.contains("jpeg") || mime.contains("jpg") {
            return "jpg";
        }
        if mime.contains("webp") {
            return "webp";
        }
    }

    if let Some(url) = url {
        let lower = url.to_lowercase();
        for ext in ["png", "jpg", "jpeg", "webp"] {
            if lower.contains(&format!(".{ext}")) {
                return if ext == "jpeg" { "jpg" } else { ext };
            }
        }
    }

    DEFAULT_EXTENSION
}
