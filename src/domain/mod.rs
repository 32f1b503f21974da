pub mod entry;
pub mod error;

pub use entry::{
    CreateKind, CreatePolicy, EntryKind, EntryMetadata, RemovedEntry, SizeReport,
};
pub use error::{AppError, FsErrorKind};

/// Self and parent pseudo-entries some hosts report during enumeration.
pub const PSEUDO_ENTRIES: [&str; 2] = [".", ".."];

/// Whether an enumerated name is the self or parent pseudo-entry.
pub fn is_pseudo_entry(name: &std::ffi::OsStr) -> bool {
    PSEUDO_ENTRIES.iter().any(|pseudo| name == *pseudo)
}
