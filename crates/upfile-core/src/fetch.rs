//! Single HTTP GET of a remote file into memory.
//!
//! Uses the curl crate (libcurl). The transfer itself is blocking; async
//! callers go through [`fetch`], which runs it on the blocking pool.

use std::str;
use std::time::Duration;

use thiserror::Error;

use crate::config::FetchConfig;
use crate::error::{Result, UploadFileError};

/// Failure while retrieving a remote file.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (bad URL, DNS, connection, timeout).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
}

/// Body and content type of a successful GET.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    pub body: Vec<u8>,
    /// `Content-Type` of the final response in the redirect chain.
    pub content_type: Option<String>,
}

/// Downloads `url` with a single GET, following redirects.
/// Runs in the current thread; use [`fetch`] from async code.
pub fn get_blocking(url: &str, opts: &FetchConfig) -> std::result::Result<FetchedFile, FetchError> {
    let mut body = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(Duration::from_secs(opts.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(opts.timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }

    Ok(FetchedFile {
        body,
        content_type: content_type_of_final_response(&headers),
    })
}

/// Async wrapper around [`get_blocking`].
pub async fn fetch(url: &str, opts: &FetchConfig) -> Result<FetchedFile> {
    let url = url.to_string();
    let opts = opts.clone();
    tracing::debug!("fetching {}", url);
    let fetched = tokio::task::spawn_blocking(move || get_blocking(&url, &opts))
        .await
        .map_err(|e| UploadFileError::Join(e.to_string()))??;
    tracing::debug!(
        "fetched {} bytes (content-type: {:?})",
        fetched.body.len(),
        fetched.content_type
    );
    Ok(fetched)
}

/// Header lines accumulate across redirects; only the block after the last
/// status line describes the body we kept.
fn content_type_of_final_response(lines: &[String]) -> Option<String> {
    let mut content_type = None;
    for line in lines {
        let line = line.trim();
        if line.starts_with("HTTP/") {
            content_type = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }
    content_type
}
