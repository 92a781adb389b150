//! Output path derivation from the input path.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::artifact::ArtifactKind;

/// Strip the final extension from `input`.
///
/// Only the last path element is inspected, so a dot in a directory name is
/// never treated as an extension. At most one extension is removed. Works on
/// raw bytes, so names that are not UTF-8 are handled too.
pub(crate) fn basename(input: &Path) -> &Path {
    let bytes = input.as_os_str().as_bytes();
    let element_start = bytes
        .iter()
        .rposition(|byte| *byte == b'/')
        .map_or(0, |idx| idx + 1);
    match bytes[element_start..].iter().rposition(|byte| *byte == b'.') {
        Some(dot) => Path::new(OsStr::from_bytes(&bytes[..element_start + dot])),
        None => input,
    }
}

/// Sibling output path for one artifact, `basename + suffix`.
pub(crate) fn artifact_path(basename: &Path, kind: ArtifactKind) -> PathBuf {
    let mut name = basename.as_os_str().to_os_string();
    name.push(kind.suffix());
    PathBuf::from(name)
}
