//! Failure classes and their process exit codes.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::artifact::ArtifactKind;

/// Exit code for an unreadable input file.
pub(crate) const EXIT_READ: u8 = 1;
/// Exit code for invalid command-line options.
pub(crate) const EXIT_OPTIONS: u8 = 9;

/// Failure while persisting a digest. Every variant is fatal for the run.
#[derive(Debug, Error)]
pub(crate) enum PersistError {
    #[error("reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write {} artifact {}: {source}", .artifact.label(), .path.display())]
    Write {
        artifact: ArtifactKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistError {
    /// Name of the pipeline step that failed.
    pub(crate) fn step(&self) -> &'static str {
        match self {
            PersistError::Read { .. } => "reading file",
            PersistError::Write { artifact, .. } => match artifact {
                ArtifactKind::Binary => "write sha256bin",
                ArtifactKind::Hex => "write sha256",
                ArtifactKind::Base64Text => "write sha256b64",
                ArtifactKind::Base64Buffer => "write sha256bytes",
            },
        }
    }

    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            PersistError::Read { .. } => EXIT_READ,
            PersistError::Write { artifact, .. } => artifact.exit_code(),
        }
    }
}

/// Top-level failure of a CLI run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("invalid options: {0}")]
    Options(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl CliError {
    pub(crate) fn step(&self) -> &'static str {
        match self {
            CliError::Options(_) => "checkOptions",
            CliError::Persist(err) => err.step(),
        }
    }

    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            CliError::Options(_) => EXIT_OPTIONS,
            CliError::Persist(err) => err.exit_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn maps_each_failure_class_to_its_code() {
        let read = PersistError::Read {
            path: PathBuf::from("in.txt"),
            source: io_err(),
        };
        assert_eq!(read.exit_code(), 1);
        assert_eq!(read.step(), "reading file");

        let hex = PersistError::Write {
            artifact: ArtifactKind::Hex,
            path: PathBuf::from("in.sha256"),
            source: io_err(),
        };
        assert_eq!(hex.exit_code(), 3);
        assert_eq!(hex.step(), "write sha256");

        let options = CliError::Options("missing FILE".to_string());
        assert_eq!(options.exit_code(), 9);
        assert_eq!(CliError::from(hex).exit_code(), 3);
    }

    #[test]
    fn write_error_names_artifact() {
        let err = PersistError::Write {
            artifact: ArtifactKind::Base64Buffer,
            path: PathBuf::from("in.sha256bytes"),
            source: io_err(),
        };
        let message = err.to_string();
        assert!(message.contains("base64buffer"));
        assert!(message.contains("in.sha256bytes"));
    }
}
