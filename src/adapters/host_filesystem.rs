//! `Filesystem` implementation backed by `std::fs`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::domain::{AppError, EntryMetadata};
use crate::ports::{EntryNames, Filesystem};

/// Directory permission bits applied by `create_dir` on Unix hosts.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Filesystem adapter for the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFilesystem;

impl HostFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for HostFilesystem {
    fn metadata(&self, path: &Path) -> Result<EntryMetadata, AppError> {
        let meta = fs::metadata(path).map_err(|e| AppError::filesystem("stat", path, e))?;
        let file_type = meta.file_type();
        Ok(if file_type.is_dir() {
            EntryMetadata::directory()
        } else if file_type.is_file() {
            EntryMetadata::file(meta.len())
        } else {
            EntryMetadata::other()
        })
    }

    fn list_entries(&self, path: &Path) -> Result<EntryNames<'_>, AppError> {
        let dir = fs::read_dir(path).map_err(|e| AppError::filesystem("opendir", path, e))?;
        let owned = path.to_path_buf();
        Ok(Box::new(dir.map(move |entry| {
            entry
                .map(|entry| entry.file_name())
                .map_err(|e| AppError::filesystem("readdir", &owned, e))
        })))
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_file(path).map_err(|e| AppError::filesystem("remove", path, e))
    }

    fn remove_empty_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_dir(path).map_err(|e| AppError::filesystem("rmdir", path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        fs::rename(from, to).map_err(|e| AppError::filesystem("rename", from, e))
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(path).map_err(|e| AppError::filesystem("mkdir", path, e))
    }

    fn create_empty_file(&self, path: &Path) -> Result<(), AppError> {
        File::create(path).map(drop).map_err(|e| AppError::filesystem("create", path, e))
    }

    fn create_new_file(&self, path: &Path) -> Result<(), AppError> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
            .map_err(|e| AppError::filesystem("create", path, e))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError> {
        fs::canonicalize(path).map_err(|e| AppError::filesystem("realpath", path, e))
    }
}
