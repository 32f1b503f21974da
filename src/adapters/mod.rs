pub mod host_filesystem;

pub use host_filesystem::HostFilesystem;
