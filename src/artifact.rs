//! The four on-disk encodings of a digest.

use crate::hashing::Sha256Digest;

/// Size of the fixed base64 buffer artifact; bytes past the encoding stay zero.
pub(crate) const BASE64_BUFFER_LEN: usize = 256;

/// One persisted representation of the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArtifactKind {
    Binary,
    Hex,
    Base64Text,
    Base64Buffer,
}

impl ArtifactKind {
    /// Write order.
    pub(crate) const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Binary,
        ArtifactKind::Hex,
        ArtifactKind::Base64Text,
        ArtifactKind::Base64Buffer,
    ];

    pub(crate) fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Binary => ".sha256bin",
            ArtifactKind::Hex => ".sha256",
            ArtifactKind::Base64Text => ".sha256b64",
            ArtifactKind::Base64Buffer => ".sha256bytes",
        }
    }

    /// Short name used in logs and error reports.
    pub(crate) fn label(self) -> &'static str {
        match self {
            ArtifactKind::Binary => "binary",
            ArtifactKind::Hex => "hex",
            ArtifactKind::Base64Text => "base64text",
            ArtifactKind::Base64Buffer => "base64buffer",
        }
    }

    /// Process exit code when writing this artifact fails.
    pub(crate) fn exit_code(self) -> u8 {
        match self {
            ArtifactKind::Binary => 2,
            ArtifactKind::Hex => 3,
            ArtifactKind::Base64Text => 4,
            ArtifactKind::Base64Buffer => 5,
        }
    }

    /// Exact bytes written to disk for this artifact.
    pub(crate) fn render(self, digest: &Sha256Digest) -> Vec<u8> {
        match self {
            ArtifactKind::Binary => digest.as_bytes().to_vec(),
            ArtifactKind::Hex => digest.to_hex().into_bytes(),
            ArtifactKind::Base64Text => digest.to_base64().into_bytes(),
            ArtifactKind::Base64Buffer => {
                let encoded = digest.to_base64();
                let mut buffer = vec![0u8; BASE64_BUFFER_LEN];
                // 44 encoded bytes always fit.
                buffer[..encoded.len()].copy_from_slice(encoded.as_bytes());
                buffer
            }
        }
    }
}
