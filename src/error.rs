//! Error and outcome types shared by the tree builder and the binary.

use std::error::Error as StdError;
use std::process::ExitCode;

use thiserror::Error;

use crate::process::Query;

/// A single failed query against a process source.
#[derive(Error, Debug)]
#[error("{query} lookup failed for PID {pid}: {source}")]
pub struct LookupError {
    pub pid: u32,
    pub query: Query,
    #[source]
    pub source: Box<dyn StdError + Send + Sync>,
}

impl LookupError {
    pub fn new<E>(pid: u32, query: Query, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        LookupError {
            pid,
            query,
            source: source.into(),
        }
    }
}

/// Failures that leave nothing to render.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("PID {0} is not a live process")]
    RootNotLive(u32),

    #[error("cannot validate root: {0}")]
    RootLookup(#[source] LookupError),
}

/// How a whole invocation ended, as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The full tree was printed.
    Complete,
    /// A tree was printed but at least one lookup failed.
    Partial,
    /// Malformed invocation; nothing was queried.
    Usage,
    /// The requested root is not a live process; nothing was printed.
    RootInvalid,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Complete => 0,
            Outcome::Usage => 1,
            Outcome::Partial | Outcome::RootInvalid => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}
