//! CLI Adapter.

mod menu;

pub use menu::{Menu, MenuCommand};

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use env_logger::Env;
use log::LevelFilter;

use crate::app::config::{DEFAULT_LOG_FILTER, LOG_ENV};
use crate::app::{SessionConfig, api};
use crate::domain::{AppError, CreatePolicy};

#[derive(Parser)]
#[command(name = "heyfiles")]
#[command(version)]
#[command(
    about = "Interactive file manager: list, create, remove, rename and measure files",
    long_about = None
)]
struct Cli {
    /// Start the session in this directory instead of the current one
    #[arg(short = 'C', long, value_name = "PATH")]
    directory: Option<PathBuf>,
    /// Refuse to create a file over an existing one instead of truncating it
    #[arg(long)]
    no_clobber: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            start_dir: self.directory.clone(),
            create_policy: if self.no_clobber {
                CreatePolicy::CreateNew
            } else {
                CreatePolicy::Truncate
            },
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_interactive(&cli.session_config()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_interactive(config: &SessionConfig) -> Result<(), AppError> {
    let mut session = api::open_session(config)?;
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout().lock(), io::stderr().lock());
    menu.run(&mut session)
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.format_timestamp(None).init();
}
