//! Sandbox confinement for stored files.
//!
//! Every on-disk location this crate touches is a relative path under the
//! `www` directory of the host configuration root. The host serves that same
//! directory at `/local/`, so a stored file's public URL is derived from its
//! relative path and vice versa.

mod filename;
mod local_url;
mod path;

pub use filename::normalize_filename;
pub use local_url::{normalize_local_url, resolve_local_path};
pub use path::normalize_path;

/// Root segment of the sandbox, relative to the host configuration root.
pub const SANDBOX_ROOT: &str = "www";

/// Directory used when the caller does not pick one.
pub const DEFAULT_SUBDIR: &str = "www/upload_file";

/// Public URL prefix the host maps onto [`SANDBOX_ROOT`].
pub const PUBLIC_PREFIX: &str = "/local/";

/// True if any `/`-separated segment of `path` is `..`.
pub(crate) fn has_parent_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment == "..")
}

/// Builds the public URL for `filename` stored in the normalized directory `path`.
///
/// - `local_url_for("www/upload_file", "a.png")` → `"/local/upload_file/a.png"`
/// - `local_url_for("www/", "a.png")` → `"/local/a.png"`
pub fn local_url_for(path: &str, filename: &str) -> String {
    let prefix = format!("{SANDBOX_ROOT}/");
    let rest = path.strip_prefix(prefix.as_str()).unwrap_or(path);
    let rest = rest.trim_matches('/');
    if rest.is_empty() {
        format!("{PUBLIC_PREFIX}{filename}")
    } else {
        format!("{PUBLIC_PREFIX}{rest}/{filename}")
    }
}
