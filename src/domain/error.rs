use std::io;
use std::path::Path;

use thiserror::Error;

/// Classification of a failed filesystem primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    AlreadyExists,
    PermissionDenied,
    DirectoryNotEmpty,
    NotADirectory,
    CrossDevice,
    Unsupported,
    /// Anything the host reports that has no named kind above.
    Other,
}

impl FsErrorKind {
    /// Map a host error kind onto the filesystem taxonomy.
    pub fn from_io(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => FsErrorKind::NotFound,
            io::ErrorKind::AlreadyExists => FsErrorKind::AlreadyExists,
            io::ErrorKind::PermissionDenied => FsErrorKind::PermissionDenied,
            io::ErrorKind::DirectoryNotEmpty => FsErrorKind::DirectoryNotEmpty,
            io::ErrorKind::NotADirectory => FsErrorKind::NotADirectory,
            io::ErrorKind::CrossesDevices => FsErrorKind::CrossDevice,
            io::ErrorKind::Unsupported => FsErrorKind::Unsupported,
            _ => FsErrorKind::Other,
        }
    }
}

/// Library-wide error type for heyfiles operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A filesystem primitive failed. The host diagnostic is kept unmodified.
    #[error("{operation} failed for '{path}': {source}")]
    Filesystem {
        operation: &'static str,
        path: String,
        kind: FsErrorKind,
        #[source]
        source: io::Error,
    },

    /// Terminal or other non-filesystem I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Startup configuration issue.
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    /// Wrap a host error raised by `operation` on `path`.
    pub fn filesystem(operation: &'static str, path: &Path, source: io::Error) -> Self {
        AppError::Filesystem {
            operation,
            path: path.display().to_string(),
            kind: FsErrorKind::from_io(source.kind()),
            source,
        }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Filesystem taxonomy of this error, if it came from a filesystem primitive.
    pub fn fs_kind(&self) -> Option<FsErrorKind> {
        match self {
            AppError::Filesystem { kind, .. } => Some(*kind),
            AppError::Io(_) | AppError::Configuration(_) => None,
        }
    }
}
