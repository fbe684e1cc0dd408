//! Directory normalization into the sandbox.

use super::{has_parent_segment, DEFAULT_SUBDIR, SANDBOX_ROOT};
use crate::error::{Result, UploadFileError};

/// Maps a caller-supplied directory onto a path under the sandbox root.
///
/// - absent or empty → [`DEFAULT_SUBDIR`]
/// - leading and trailing `/` are removed
/// - `www/` is prepended unless already present
/// - any `..` segment is rejected
pub fn normalize_path(raw_path: Option<&str>) -> Result<String> {
    let raw = raw_path.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_SUBDIR);
    let trimmed = raw.trim_start_matches('/').trim_end_matches('/');

    let root_prefix = format!("{SANDBOX_ROOT}/");
    let path = if trimmed.starts_with(root_prefix.as_str()) {
        trimmed.to_string()
    } else {
        format!("{root_prefix}{trimmed}")
    };

    if has_parent_segment(&path) {
        return Err(UploadFileError::invalid("Invalid path."));
    }
    Ok(path)
}
