pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub(crate) mod context;

pub use config::SessionConfig;
pub use context::Session;
