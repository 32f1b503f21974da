//! One module per file-manager operation. Each `execute` acts on a `Session`.

pub mod change_directory;
pub mod create;
pub mod exists;
pub mod list;
pub mod remove;
pub mod rename;
pub mod size;
