mod commands;
mod error;
mod session;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::session::Session;
use rolodex_config as config;
use rolodex_core::AddressBook;
use rolodex_store::{paths, SnapshotFile};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "Interactive terminal address book")]
struct Cli {
    /// Address book file (defaults to the data directory)
    #[arg(long)]
    book_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        book_path,
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let book_path = paths::resolve_book_path(book_path.or_else(|| app_config.book_path.clone()))
        .with_context(|| "resolve address book path")?;
    debug!(path = %book_path.display(), "address book path resolved");

    let storage = SnapshotFile::new(&book_path);
    let mut book = AddressBook::new();
    book.load_from(&storage)
        .with_context(|| format!("load address book {}", book_path.display()))?;
    debug!(contacts = book.len(), "address book ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut book, &storage, &app_config.prompt).run(stdin.lock(), stdout.lock())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
