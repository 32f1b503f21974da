//! In-memory `Filesystem` with failure injection for unit tests.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, EntryMetadata};
use crate::ports::{EntryNames, Filesystem};

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir { listable: bool },
    Other,
    /// Listed by its parent but stat fails, like a dangling symlink.
    Dangling,
    /// Listed by its parent but enumeration reports an error for it.
    Unenumerable,
    /// Present, but stat is refused.
    Guarded,
}

/// Shared in-memory tree. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    nodes: Arc<Mutex<BTreeMap<PathBuf, Node>>>,
    report_pseudo_entries: bool,
}

impl MemoryFilesystem {
    /// A tree holding only the root directory `/`.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir { listable: true });
        Self { nodes: Arc::new(Mutex::new(nodes)), report_pseudo_entries: false }
    }

    /// Make listings start with `.` and `..`, as POSIX `readdir` does.
    pub fn with_pseudo_entries(mut self) -> Self {
        self.report_pseudo_entries = true;
        self
    }

    pub fn add_dir(&self, path: &str) -> &Self {
        self.insert(path, Node::Dir { listable: true })
    }

    pub fn add_file(&self, path: &str, content: &[u8]) -> &Self {
        self.insert(path, Node::File(content.to_vec()))
    }

    pub fn add_other(&self, path: &str) -> &Self {
        self.insert(path, Node::Other)
    }

    pub fn add_dangling(&self, path: &str) -> &Self {
        self.insert(path, Node::Dangling)
    }

    pub fn add_unenumerable(&self, path: &str) -> &Self {
        self.insert(path, Node::Unenumerable)
    }

    /// A directory whose contents cannot be listed.
    pub fn add_unlistable_dir(&self, path: &str) -> &Self {
        self.insert(path, Node::Dir { listable: false })
    }

    /// An entry whose metadata cannot be read.
    pub fn add_guarded(&self, path: &str) -> &Self {
        self.insert(path, Node::Guarded)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.nodes.lock().unwrap().contains_key(&normalize(Path::new(path)))
    }

    pub fn read(&self, path: &str) -> Option<Vec<u8>> {
        match self.nodes.lock().unwrap().get(&normalize(Path::new(path))) {
            Some(Node::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    fn insert(&self, path: &str, node: Node) -> &Self {
        let path = normalize(Path::new(path));
        let mut nodes = self.nodes.lock().unwrap();
        for ancestor in path.ancestors().skip(1) {
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir { listable: true });
        }
        nodes.insert(path, node);
        self
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Lexically resolve `.` and `..` and anchor relative paths at `/`.
///
/// The empty path stays empty and never names a node, as on a real host.
fn normalize(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }
    let mut out = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => out.push(name),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    out
}

fn fail(operation: &'static str, path: &Path, kind: io::ErrorKind) -> AppError {
    AppError::filesystem(operation, path, io::Error::from(kind))
}

fn children<'a>(
    nodes: &'a BTreeMap<PathBuf, Node>,
    dir: &'a Path,
) -> impl Iterator<Item = (&'a PathBuf, &'a Node)> + 'a {
    nodes.iter().filter(move |(path, _)| path.parent() == Some(dir))
}

impl Filesystem for MemoryFilesystem {
    fn metadata(&self, path: &Path) -> Result<EntryMetadata, AppError> {
        let key = normalize(path);
        match self.nodes.lock().unwrap().get(&key) {
            Some(Node::File(content)) => Ok(EntryMetadata::file(content.len() as u64)),
            Some(Node::Dir { .. }) => Ok(EntryMetadata::directory()),
            Some(Node::Other) | Some(Node::Unenumerable) => Ok(EntryMetadata::other()),
            Some(Node::Guarded) => Err(fail("stat", path, io::ErrorKind::PermissionDenied)),
            Some(Node::Dangling) | None => Err(fail("stat", path, io::ErrorKind::NotFound)),
        }
    }

    fn list_entries(&self, path: &Path) -> Result<EntryNames<'_>, AppError> {
        let key = normalize(path);
        let nodes = self.nodes.lock().unwrap();
        match nodes.get(&key) {
            Some(Node::Dir { listable: true }) => {}
            Some(Node::Dir { listable: false }) => {
                return Err(fail("opendir", path, io::ErrorKind::PermissionDenied));
            }
            Some(_) => return Err(fail("opendir", path, io::ErrorKind::NotADirectory)),
            None => return Err(fail("opendir", path, io::ErrorKind::NotFound)),
        }

        let mut names: Vec<Result<OsString, AppError>> = Vec::new();
        if self.report_pseudo_entries {
            names.push(Ok(OsString::from(".")));
            names.push(Ok(OsString::from("..")));
        }
        for (child, node) in children(&nodes, &key) {
            let name = child.file_name().map(|n| n.to_os_string()).unwrap_or_default();
            if matches!(node, Node::Unenumerable) {
                names.push(Err(fail("readdir", path, io::ErrorKind::Other)));
            } else {
                names.push(Ok(name));
            }
        }
        Ok(Box::new(names.into_iter()))
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        let key = normalize(path);
        let mut nodes = self.nodes.lock().unwrap();
        match nodes.get(&key) {
            Some(Node::Dir { .. }) => Err(fail("remove", path, io::ErrorKind::IsADirectory)),
            Some(_) => {
                nodes.remove(&key);
                Ok(())
            }
            None => Err(fail("remove", path, io::ErrorKind::NotFound)),
        }
    }

    fn remove_empty_dir(&self, path: &Path) -> Result<(), AppError> {
        let key = normalize(path);
        let mut nodes = self.nodes.lock().unwrap();
        match nodes.get(&key) {
            Some(Node::Dir { .. }) => {
                if children(&nodes, &key).next().is_some() {
                    return Err(fail("rmdir", path, io::ErrorKind::DirectoryNotEmpty));
                }
                nodes.remove(&key);
                Ok(())
            }
            Some(_) => Err(fail("rmdir", path, io::ErrorKind::NotADirectory)),
            None => Err(fail("rmdir", path, io::ErrorKind::NotFound)),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let source = normalize(from);
        let target = normalize(to);
        let mut nodes = self.nodes.lock().unwrap();
        if !nodes.contains_key(&source) {
            return Err(fail("rename", from, io::ErrorKind::NotFound));
        }
        let parent_is_dir = target
            .parent()
            .is_some_and(|parent| matches!(nodes.get(parent), Some(Node::Dir { .. })));
        if !parent_is_dir {
            return Err(fail("rename", from, io::ErrorKind::NotFound));
        }
        if matches!(nodes.get(&target), Some(Node::Dir { .. })) {
            return Err(fail("rename", from, io::ErrorKind::IsADirectory));
        }

        let moved: Vec<PathBuf> =
            nodes.keys().filter(|path| path.starts_with(&source)).cloned().collect();
        for old in moved {
            if let Some(node) = nodes.remove(&old) {
                let suffix = old.strip_prefix(&source).unwrap_or(Path::new(""));
                let new = if suffix.as_os_str().is_empty() {
                    target.clone()
                } else {
                    target.join(suffix)
                };
                nodes.insert(new, node);
            }
        }
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        let key = normalize(path);
        let mut nodes = self.nodes.lock().unwrap();
        if nodes.contains_key(&key) {
            return Err(fail("mkdir", path, io::ErrorKind::AlreadyExists));
        }
        match key.parent().and_then(|parent| nodes.get(parent)) {
            Some(Node::Dir { .. }) => {
                nodes.insert(key, Node::Dir { listable: true });
                Ok(())
            }
            Some(_) => Err(fail("mkdir", path, io::ErrorKind::NotADirectory)),
            None => Err(fail("mkdir", path, io::ErrorKind::NotFound)),
        }
    }

    fn create_empty_file(&self, path: &Path) -> Result<(), AppError> {
        let key = normalize(path);
        let mut nodes = self.nodes.lock().unwrap();
        if matches!(nodes.get(&key), Some(Node::Dir { .. })) {
            return Err(fail("create", path, io::ErrorKind::IsADirectory));
        }
        if !matches!(key.parent().and_then(|parent| nodes.get(parent)), Some(Node::Dir { .. })) {
            return Err(fail("create", path, io::ErrorKind::NotFound));
        }
        nodes.insert(key, Node::File(Vec::new()));
        Ok(())
    }

    fn create_new_file(&self, path: &Path) -> Result<(), AppError> {
        if self.nodes.lock().unwrap().contains_key(&normalize(path)) {
            return Err(fail("create", path, io::ErrorKind::AlreadyExists));
        }
        self.create_empty_file(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError> {
        let key = normalize(path);
        if self.nodes.lock().unwrap().contains_key(&key) {
            Ok(key)
        } else {
            Err(fail("realpath", path, io::ErrorKind::NotFound))
        }
    }
}
