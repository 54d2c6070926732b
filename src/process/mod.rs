
use std::fmt;

use crate::error::LookupError;

// Submodules
pub mod source;
pub mod tree;

pub use source::ProcfsSource;


/// Which of the three point-in-time queries against a process source failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    Liveness,
    Children,
    InvocationName,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Query::Liveness => "liveness",
            Query::Children => "children",
            Query::InvocationName => "invocation name",
        };
        f.write_str(s)
    }
}

/// Answers questions about the live process table.
///
/// Every answer is only true at the instant it is given: a pid listed as a
/// child may be gone by the time it is validated. An `Err` means the lookup
/// mechanism itself failed, which callers keep distinct from "no such process".
pub trait ProcessInfoSource {
    /// True iff `pid` names a running process with a resolvable executable.
    fn is_live_process(&self, pid: u32) -> Result<bool, LookupError>;

    /// Child pids of `pid`, in the order the source reports them. Entries are
    /// not validated.
    fn list_children(&self, pid: u32) -> Result<Vec<u32>, LookupError>;

    /// Invocation name of `pid`, or `None` when its command line is empty.
    fn read_invocation_name(&self, pid: u32) -> Result<Option<String>, LookupError>;
}

impl<S: ProcessInfoSource + ?Sized> ProcessInfoSource for &S {
    fn is_live_process(&self, pid: u32) -> Result<bool, LookupError> {
        (**self).is_live_process(pid)
    }

    fn list_children(&self, pid: u32) -> Result<Vec<u32>, LookupError> {
        (**self).list_children(pid)
    }

    fn read_invocation_name(&self, pid: u32) -> Result<Option<String>, LookupError> {
        (**self).read_invocation_name(pid)
    }
}
