//! SHA-256 digest type and its text encodings.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Length in bytes of a SHA-256 digest.
pub(crate) const DIGEST_LEN: usize = 32;

/// A computed SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    pub(crate) fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters.
    pub(crate) fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Standard padded base64, 44 characters.
    pub(crate) fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

/// Hash raw bytes in one pass.
pub(crate) fn sha256_digest(bytes: &[u8]) -> Sha256Digest {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    Sha256Digest(hasher.finalize().into())
}
