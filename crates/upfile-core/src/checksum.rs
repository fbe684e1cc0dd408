//! SHA-256 content naming for uploads without an explicit filename.

use sha2::{Digest, Sha256};

/// Number of hex characters of the digest kept in generated filenames.
pub const CONTENT_HASH_LEN: usize = 16;

/// Compute SHA-256 of `data` and return the digest as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// First [`CONTENT_HASH_LEN`] hex characters of the SHA-256 of `data`.
pub fn content_hash(data: &[u8]) -> String {
    let mut digest = sha256_hex(data);
    digest.truncate(CONTENT_HASH_LEN);
    digest
}
