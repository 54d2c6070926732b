//! Command-line configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Print the descendants of a process as an indented tree.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ptree", version)]
pub struct Config {
    /// Levels to print below the root; 0 prints every level
    #[arg(
        short = 'd',
        long = "depth",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub max_depth: u32,

    /// Root process id
    #[arg(value_name = "PID")]
    pub root_pid: u32,

    /// Directory holding the per-process entries
    #[arg(long, value_name = "DIR", env = "PTREE_PROC_ROOT", default_value = "/proc")]
    pub proc_root: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Config::try_parse_from(args)
    }
}
