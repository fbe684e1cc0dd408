//! Reverse mapping from a public `/local/` URL to a sandbox path.

use super::{has_parent_segment, SANDBOX_ROOT};
use crate::error::{Result, UploadFileError};

/// Trims whitespace and drops the query string. Blank input is `None`.
pub fn normalize_local_url(raw_url: Option<&str>) -> Option<String> {
    let trimmed = raw_url?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let without_query = trimmed.split_once('?').map_or(trimmed, |(head, _)| head);
    if without_query.is_empty() {
        return None;
    }
    Some(without_query.to_string())
}

/// Path portion of an absolute URL exactly as written (no percent-encoding),
/// ending before any query or fragment. Empty when there is no path.
fn raw_url_path(absolute: &str) -> &str {
    let after_scheme = absolute.split_once("://").map_or(absolute, |(_, rest)| rest);
    let path = after_scheme.find('/').map_or("", |i| &after_scheme[i..]);
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Resolves a local URL (absolute `http(s)://host/local/...` or relative
/// `/local/...`, `local/...`) to the sandbox-relative path it is served from.
///
/// The whole remainder is returned as one path; callers check it as a file.
pub fn resolve_local_path(local_url: &str) -> Result<String> {
    let local_path = if local_url.starts_with("http://") || local_url.starts_with("https://") {
        raw_url_path(local_url)
    } else {
        local_url
    };

    let rel = local_path
        .strip_prefix("/local/")
        .or_else(|| local_path.strip_prefix("local/"))
        .ok_or_else(|| UploadFileError::invalid("local_url must start with /local/"))?;

    if has_parent_segment(rel) {
        return Err(UploadFileError::invalid("Invalid local_url path."));
    }

    let rel = rel.trim_matches('/');
    if rel.is_empty() {
        Ok(SANDBOX_ROOT.to_string())
    } else {
        Ok(format!("{SANDBOX_ROOT}/{rel}"))
    }
}
