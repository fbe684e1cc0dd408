//! `upload_file` service: fetch or decode, then store under the sandbox.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::checksum::content_hash;
use crate::classify::guess_extension;
use crate::error::{Result, UploadFileError};
use crate::fetch;
use crate::host::HostConfig;
use crate::payload::parse_data_base64;
use crate::sandbox::{local_url_for, normalize_filename, normalize_path};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UploadRequest {
    /// Remote file to fetch. Takes precedence over `data_base64`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Inline payload, raw base64 or a `data:<mime>;base64,` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Target directory, relative to the sandbox root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl UploadRequest {
    /// Schema check: `url`, when present, must be an http(s) URL with a host.
    pub fn validate_schema(&self) -> Result<()> {
        if let Some(url) = &self.url {
            let parsed = url::Url::parse(url)
                .map_err(|e| UploadFileError::invalid(format!("invalid url {url:?}: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") || parsed.host().is_none() {
                return Err(UploadFileError::invalid(format!(
                    "invalid url {url:?}: expected http(s) with a host"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// Public URL the host serves the file at.
    pub local_url: String,
    /// Absolute on-disk path of the written file.
    pub filename: String,
}

/// Picks the stored name: content hash when none was given, otherwise the
/// given name with `.<extension>` appended if it has no dot.
fn resolve_filename(requested: Option<String>, bytes: &[u8], extension: &str) -> String {
    match requested {
        None => format!("{}.{}", content_hash(bytes), extension),
        Some(name) if !name.contains('.') => format!("{name}.{extension}"),
        Some(name) => name,
    }
}

/// Where the bytes come from. A url wins when both are supplied.
enum Source {
    Url(String),
    Inline(String),
}

impl Source {
    fn from_request(url: Option<String>, data_base64: Option<String>) -> Result<Self> {
        match (url.filter(|u| !u.is_empty()), data_base64.filter(|d| !d.is_empty())) {
            (Some(url), _) => Ok(Source::Url(url)),
            (None, Some(data)) => Ok(Source::Inline(data)),
            (None, None) => Err(UploadFileError::invalid("url or data_base64 required")),
        }
    }

    fn url(&self) -> Option<&str> {
        match self {
            Source::Url(url) => Some(url),
            Source::Inline(_) => None,
        }
    }

    async fn read(&self, host: &HostConfig) -> Result<(Vec<u8>, Option<String>)> {
        match self {
            Source::Url(url) => {
                let fetched = fetch::fetch(url, host.fetch()).await?;
                Ok((fetched.body, fetched.content_type))
            }
            Source::Inline(data) => parse_data_base64(data),
        }
    }
}

pub async fn handle_upload(host: &HostConfig, request: UploadRequest) -> Result<UploadResponse> {
    let source = Source::from_request(request.url, request.data_base64)?;

    let path = normalize_path(request.path.as_deref())?;
    let filename = normalize_filename(request.filename.as_deref());

    let (bytes, mime_type) = source.read(host).await?;

    let extension = guess_extension(mime_type.as_deref(), source.url());
    let filename = resolve_filename(filename, &bytes, extension);

    let full_dir = host.path(&path);
    fs::create_dir_all(&full_dir).map_err(|e| UploadFileError::io(&full_dir, e))?;
    let full_path = full_dir.join(&filename);
    fs::write(&full_path, &bytes).map_err(|e| UploadFileError::io(&full_path, e))?;

    tracing::info!("stored {} bytes at {}", bytes.len(), full_path.display());

    Ok(UploadResponse {
        local_url: local_url_for(&path, &filename),
        filename: full_path.display().to_string(),
    })
}
