//! Shared testing utilities for heyfiles tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use heyfiles::{HostFilesystem, Session};
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated directory tree for each test.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work = root.child("work");
        work.create_dir_all().expect("Failed to create test work directory");
        let work_dir = work.path().to_path_buf();
        Self { root, work_dir }
    }

    /// Directory the CLI and library sessions start in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `heyfiles` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("heyfiles").expect("Failed to locate heyfiles binary");
        cmd.current_dir(&self.work_dir).env("HEYFILES_LOG", "off");
        cmd
    }

    /// Open a library session rooted at the work directory.
    pub fn session(&self) -> Session<HostFilesystem> {
        heyfiles::open_session_at(&self.work_dir).expect("Failed to open session")
    }

    /// Write `len` bytes to `rel`, creating parent directories.
    pub fn write_file(&self, rel: &str, len: usize) {
        self.root
            .child("work")
            .child(rel)
            .write_binary(&vec![b'x'; len])
            .expect("Failed to write fixture file");
    }

    pub fn mkdir(&self, rel: &str) {
        self.root.child("work").child(rel).create_dir_all().expect("Failed to create fixture dir");
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.work_dir.join(rel)
    }

    pub fn entry_count(&self, rel: &str) -> usize {
        std::fs::read_dir(self.path(rel)).expect("Failed to read fixture dir").count()
    }
}
