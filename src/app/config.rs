//! Startup configuration for an interactive session.

use std::path::PathBuf;

use crate::domain::CreatePolicy;

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "HEYFILES_LOG";

/// Log filter used when `HEYFILES_LOG` is unset and no `-v` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings a session starts from. There is no config file; values come
/// from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Starting directory. `None` uses the process working directory.
    pub start_dir: Option<PathBuf>,
    pub create_policy: CreatePolicy,
}
