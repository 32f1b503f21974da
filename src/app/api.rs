//! API Facade for the application.
//!
//! Glues session creation to command execution so library callers and the
//! CLI shell go through the same entry points.

use std::ffi::OsString;
use std::path::Path;

use crate::adapters::HostFilesystem;
use crate::app::commands::{change_directory, create, exists, list, remove, rename, size};
use crate::app::{Session, SessionConfig};
use crate::ports::Filesystem;

pub use crate::domain::{
    AppError, CreateKind, CreatePolicy, EntryKind, FsErrorKind, RemovedEntry, SizeReport,
};

/// Open a session on the host filesystem.
pub fn open_session(config: &SessionConfig) -> Result<Session<HostFilesystem>, AppError> {
    Session::open(HostFilesystem::new(), config)
}

/// Open a host session rooted at `dir` with default settings.
pub fn open_session_at(dir: impl AsRef<Path>) -> Result<Session<HostFilesystem>, AppError> {
    let config =
        SessionConfig { start_dir: Some(dir.as_ref().to_path_buf()), ..Default::default() };
    open_session(&config)
}

/// List entry names of a directory in host order.
pub fn list_entries<F: Filesystem>(
    session: &Session<F>,
    path: &str,
) -> Result<Vec<OsString>, AppError> {
    list::execute(session, path)
}

/// Remove a file or an empty directory.
pub fn remove_entry<F: Filesystem>(
    session: &Session<F>,
    path: &str,
) -> Result<RemovedEntry, AppError> {
    remove::execute(session, path)
}

/// Rename `dir/old_name` to `dir/new_name`.
pub fn rename_entry<F: Filesystem>(
    session: &Session<F>,
    dir: &str,
    old_name: &str,
    new_name: &str,
) -> Result<(), AppError> {
    rename::execute(session, dir, old_name, new_name)
}

pub fn create_directory<F: Filesystem>(session: &Session<F>, name: &str) -> Result<(), AppError> {
    create::execute(session, CreateKind::Directory, name)
}

/// Create an empty file according to the session's `CreatePolicy`.
pub fn create_empty_file<F: Filesystem>(session: &Session<F>, name: &str) -> Result<(), AppError> {
    create::execute(session, CreateKind::File, name)
}

/// Whether `name` can be stat'ed. Never fails.
pub fn exists<F: Filesystem>(session: &Session<F>, name: &str) -> bool {
    exists::execute(session, name)
}

/// Move the session to another directory.
pub fn change_working_directory<'a, F: Filesystem>(
    session: &'a mut Session<F>,
    path: &str,
) -> Result<&'a Path, AppError> {
    change_directory::execute(session, path)
}

/// Size of a file, or the recursive total of a directory.
pub fn size_of<F: Filesystem>(session: &Session<F>, path: &str) -> Result<SizeReport, AppError> {
    size::execute(session, path)
}
