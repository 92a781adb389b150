//! Read one file, hash it, and write the four digest artifacts beside it.
//!
//! The writes are independent: a failure stops the run, but artifacts
//! already written stay on disk.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::artifact::ArtifactKind;
use crate::error::PersistError;
use crate::hashing::{sha256_digest, Sha256Digest};
use crate::paths::{artifact_path, basename};

/// Permission bits requested for every artifact (before umask).
const ARTIFACT_MODE: u32 = 0o644;

/// Result of a completed run.
#[derive(Debug)]
pub(crate) struct PersistReport {
    pub(crate) digest: Sha256Digest,
    pub(crate) basename: PathBuf,
    pub(crate) written: Vec<PathBuf>,
}

/// Persist the digest of `input` in every artifact encoding.
///
/// Confirmation lines for each written artifact go to `out`.
pub(crate) fn persist<W: Write>(input: &Path, out: &mut W) -> Result<PersistReport, PersistError> {
    let contents = fs::read(input).map_err(|source| PersistError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = contents.len(), "read input");

    let digest = sha256_digest(&contents);
    debug!(sha256 = %digest.to_hex(), "hashed input");

    let base = basename(input);
    debug!(basename = %base.display(), "derived output basename");

    let mut written = Vec::with_capacity(ArtifactKind::ALL.len());
    for kind in ArtifactKind::ALL {
        let path = artifact_path(base, kind);
        let bytes = kind.render(&digest);
        write_artifact(&path, &bytes).map_err(|source| PersistError::Write {
            artifact: kind,
            path: path.clone(),
            source,
        })?;
        debug!(artifact = kind.label(), path = %path.display(), bytes = bytes.len(), "wrote artifact");
        confirm(out, kind, &digest, &bytes);
        written.push(path);
    }

    Ok(PersistReport {
        digest,
        basename: base.to_path_buf(),
        written,
    })
}

/// Create or truncate `path` and write `bytes` in full.
fn write_artifact(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(ARTIFACT_MODE)
        .open(path)?;
    file.write_all(bytes)
}

fn confirm<W: Write>(out: &mut W, kind: ArtifactKind, digest: &Sha256Digest, bytes: &[u8]) {
    let result = match kind {
        ArtifactKind::Binary => writeln!(out, "SHA256 binary:             {bytes:?}"),
        ArtifactKind::Hex => writeln!(out, "SHA256 hex (normal):       {}", digest.to_hex()),
        ArtifactKind::Base64Text => writeln!(out, "SHA256 b64-coded (string): {bytes:?}").and_then(
            |()| writeln!(out, "SHA256 b64-coded (string): {}", digest.to_base64()),
        ),
        ArtifactKind::Base64Buffer => writeln!(out, "SHA256 b64-coded (bytes)   {bytes:?}"),
    };
    if let Err(err) = result {
        warn!(artifact = kind.label(), "failed to print confirmation: {err}");
    }
}
