//! `file_exists` service: look up a previously stored file.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UploadFileError};
use crate::host::HostConfig;
use crate::sandbox::{normalize_filename, normalize_local_url, normalize_path, resolve_local_path};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExistsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Public URL as returned by an upload; wins over `path` + `filename`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// A local_url resolves to one path checked as a file; path + filename are
/// normalized separately and joined.
pub fn handle_exists(host: &HostConfig, request: &ExistsRequest) -> Result<ExistsResponse> {
    let full_path = match normalize_local_url(request.local_url.as_deref()) {
        Some(local_url) => host.path(&resolve_local_path(&local_url)?),
        None => {
            let path = non_empty(request.path.as_deref());
            let filename = non_empty(request.filename.as_deref());
            let (path, filename) = match (path, filename) {
                (Some(path), Some(filename)) => (path, filename),
                _ => {
                    return Err(UploadFileError::invalid(
                        "local_url or path+filename required",
                    ))
                }
            };
            let path = normalize_path(Some(path))?;
            let filename = normalize_filename(Some(filename))
                .ok_or_else(|| UploadFileError::invalid("Invalid filename"))?;
            host.path(&path).join(filename)
        }
    };

    let exists = full_path.is_file();
    tracing::debug!("exists check {} -> {}", full_path.display(), exists);
    Ok(ExistsResponse { exists })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
