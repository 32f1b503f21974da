mod filesystem;

pub use filesystem::{EntryNames, Filesystem};
