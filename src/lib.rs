//! heyfiles: an interactive command-line file manager.
//!
//! Operations run against a [`Session`], which owns a [`ports::Filesystem`]
//! and its own current directory. The size engine in [`services`] sums file
//! lengths over a directory tree, skipping anything it cannot read.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use adapters::HostFilesystem;
pub use app::api::{
    change_working_directory, create_directory, create_empty_file, exists, list_entries,
    open_session, open_session_at, remove_entry, rename_entry, size_of,
};
pub use app::{Session, SessionConfig};
pub use domain::{
    AppError, CreateKind, CreatePolicy, EntryKind, EntryMetadata, FsErrorKind, RemovedEntry,
    SizeReport,
};
