//! Filesystem entry value types.

use std::path::PathBuf;

/// Kind of a filesystem entry as reported by a metadata query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, FIFOs, devices and anything else that is neither.
    Other,
}

impl EntryKind {
    /// Capitalized label used in user-facing messages. Anything that is not a
    /// directory is reported as a file.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Directory => "Directory",
            EntryKind::File | EntryKind::Other => "File",
        }
    }
}

/// Result of a metadata query. Never cached; fetched fresh for every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    /// Byte length. Always zero for anything but files.
    pub size_bytes: u64,
}

impl EntryMetadata {
    pub fn file(size_bytes: u64) -> Self {
        Self { kind: EntryKind::File, size_bytes }
    }

    pub fn directory() -> Self {
        Self { kind: EntryKind::Directory, size_bytes: 0 }
    }

    pub fn other() -> Self {
        Self { kind: EntryKind::Other, size_bytes: 0 }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Outcome of a size query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub kind: EntryKind,
    pub bytes: u64,
}

/// Outcome of a successful removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEntry {
    pub kind: EntryKind,
    pub path: PathBuf,
}

/// What a create command should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateKind {
    Directory,
    File,
}

/// How file creation treats an existing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreatePolicy {
    /// Truncate an existing file to zero length without warning.
    #[default]
    Truncate,
    /// Refuse with `AlreadyExists` when the path is taken.
    CreateNew,
}
