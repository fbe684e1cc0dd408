//! Filename normalization: basename only.

/// Keeps only the final `/`-separated component of `raw_filename`.
///
/// Returns `None` for absent or empty input and when the final component is
/// empty, `.` or `..`. Traversal is neutralized here rather than rejected:
/// `"../../etc/passwd"` becomes `"passwd"`.
pub fn normalize_filename(raw_filename: Option<&str>) -> Option<String> {
    let raw = raw_filename.filter(|f| !f.is_empty())?;
    let name = raw.rsplit('/').next().unwrap_or(raw);
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}
