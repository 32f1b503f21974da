//! Host filesystem primitives.
//!
//! Each method maps to exactly one host call and classifies its outcome into
//! `AppError::Filesystem`. Nothing here retries, caches, or composes calls;
//! composition belongs to the application commands.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, EntryMetadata};

/// Lazily enumerated directory entry names, in host order.
///
/// The underlying directory handle lives exactly as long as the iterator.
pub type EntryNames<'a> = Box<dyn Iterator<Item = Result<OsString, AppError>> + 'a>;

/// Port for the filesystem primitives the file manager is built on.
///
/// All paths are passed through unchanged; resolving relative paths is the
/// caller's job.
pub trait Filesystem {
    /// Stat a path, following symbolic links.
    fn metadata(&self, path: &Path) -> Result<EntryMetadata, AppError>;

    /// Open a directory for enumeration.
    fn list_entries(&self, path: &Path) -> Result<EntryNames<'_>, AppError>;

    /// Delete a non-directory entry.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// Delete a directory, which must be empty.
    fn remove_empty_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Rename `from` to `to` following host semantics.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Create a single directory (owner rwx, group/other rx where supported).
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Create a file, truncating it to zero length if it already exists.
    fn create_empty_file(&self, path: &Path) -> Result<(), AppError>;

    /// Create a file, failing with `AlreadyExists` if the path is taken.
    fn create_new_file(&self, path: &Path) -> Result<(), AppError>;

    /// Resolve a path to its absolute, symlink-free form.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError>;
}
