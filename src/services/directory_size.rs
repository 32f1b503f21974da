//! Recursive size accounting over a `Filesystem`.
//!
//! Traversal is best-effort: an unreadable directory, a failed enumeration step,
//! or a child whose metadata cannot be read contributes zero and the walk goes on.
//! There is no cycle detection; acyclic directory trees are assumed.

use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::{AppError, EntryKind, SizeReport, is_pseudo_entry};
use crate::ports::Filesystem;

/// Size of the entry at `path`.
///
/// The metadata query on `path` itself is the only failure that propagates.
/// Files report their length, directories the sum over their subtree, and
/// anything else zero.
pub fn size_of<F: Filesystem + ?Sized>(fs: &F, path: &Path) -> Result<SizeReport, AppError> {
    let meta = fs.metadata(path)?;
    let bytes = match meta.kind {
        EntryKind::File => meta.size_bytes,
        EntryKind::Directory => directory_size(fs, path),
        EntryKind::Other => 0,
    };
    Ok(SizeReport { kind: meta.kind, bytes })
}

/// Total byte length of all files below `root`.
///
/// Directories are visited from an explicit stack, so depth is bounded by heap
/// rather than thread stack. Each listing handle is dropped before the next
/// directory is opened.
pub fn directory_size<F: Filesystem + ?Sized>(fs: &F, root: &Path) -> u64 {
    let mut total: u64 = 0;
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs.list_entries(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!("Skipping unreadable directory: {}", err);
                continue;
            }
        };

        for entry in entries {
            let name = match entry {
                Ok(name) => name,
                Err(err) => {
                    debug!("Skipping entry that failed to enumerate: {}", err);
                    continue;
                }
            };
            if is_pseudo_entry(&name) {
                continue;
            }

            let child = dir.join(&name);
            match fs.metadata(&child) {
                Ok(meta) => match meta.kind {
                    EntryKind::Directory => pending.push(child),
                    EntryKind::File => total = total.saturating_add(meta.size_bytes),
                    EntryKind::Other => {}
                },
                Err(err) => debug!("Skipping child without metadata: {}", err),
            }
        }
    }

    total
}
