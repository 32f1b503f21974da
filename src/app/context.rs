use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::app::config::SessionConfig;
use crate::domain::{AppError, CreatePolicy};
use crate::ports::Filesystem;

/// Interactive session state: the filesystem handle and the session's own
/// current directory.
///
/// The process working directory is never touched; relative paths are
/// resolved against `current_dir`, so independent sessions can coexist.
#[derive(Debug)]
pub struct Session<F: Filesystem> {
    fs: F,
    current_dir: PathBuf,
    create_policy: CreatePolicy,
}

impl<F: Filesystem> Session<F> {
    /// Create a session rooted at `current_dir` without validating it.
    pub fn new(fs: F, current_dir: impl Into<PathBuf>) -> Self {
        Self { fs, current_dir: current_dir.into(), create_policy: CreatePolicy::default() }
    }

    /// Open a session from startup configuration.
    ///
    /// The starting directory is canonicalized and must be a directory.
    pub fn open(fs: F, config: &SessionConfig) -> Result<Self, AppError> {
        let start = match &config.start_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let current_dir = fs.canonicalize(&start)?;
        if !fs.metadata(&current_dir)?.is_dir() {
            return Err(AppError::config_error(format!(
                "Starting directory '{}' is not a directory",
                start.display()
            )));
        }
        Ok(Self { fs, current_dir, create_policy: config.create_policy })
    }

    pub fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.create_policy = policy;
        self
    }

    /// Get a reference to the filesystem adapter.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn create_policy(&self) -> CreatePolicy {
        self.create_policy
    }

    /// Resolve user input against the session directory.
    ///
    /// Absolute paths pass through. An empty path stays empty so the host
    /// rejects it with NotFound instead of acting on the session directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        if path.is_empty() { PathBuf::new() } else { self.current_dir.join(path) }
    }

    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }
}

/// Join `name` onto `dir` with a single separator, verbatim.
///
/// Separators inside `name` are not escaped, and an absolute-looking `name`
/// still lands under `dir`.
pub fn join_name(dir: &Path, name: &str) -> PathBuf {
    let mut joined = OsString::from(dir.as_os_str());
    joined.push(MAIN_SEPARATOR_STR);
    joined.push(name);
    PathBuf::from(joined)
}
