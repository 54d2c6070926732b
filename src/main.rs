mod config;
mod error;
mod manager;
mod process;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::Outcome;
use manager::Manager;
use process::ProcfsSource;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => Outcome::Usage.into(),
            };
        }
    };

    init_logging(config.verbose);

    let manager = Manager::new(ProcfsSource::new(&config.proc_root), config.max_depth);
    let out = BufWriter::new(io::stdout().lock());

    match manager.print_tree(config.root_pid, out) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            tracing::error!("failed to write tree: {}", e);
            Outcome::Partial.into()
        }
    }
}

// Logs go to stderr; stdout carries only tree lines. RUST_LOG overrides the level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
