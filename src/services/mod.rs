pub mod directory_size;

pub use directory_size::{directory_size, size_of};
