use std::io;
use std::path::PathBuf;

use procfs::ProcError;
use procfs::process::Process as ProcfsProcess;
use tracing::trace;

use crate::error::LookupError;
use crate::process::{ProcessInfoSource, Query};

/// Longest invocation name kept, in bytes. Longer names are cut on a char boundary.
pub const MAX_NAME_LEN: usize = 1024;

/// Reads the process table from a `/proc`-shaped directory.
///
/// The root is configurable so the same code can be pointed at a fixture tree.
#[derive(Debug, Clone)]
pub struct ProcfsSource {
    root: PathBuf,
}

impl ProcfsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProcfsSource { root: root.into() }
    }

    fn pid_dir(&self, pid: u32) -> PathBuf {
        self.root.join(pid.to_string())
    }

    fn open(&self, pid: u32, query: Query) -> Result<ProcfsProcess, LookupError> {
        ProcfsProcess::new_with_root(self.pid_dir(pid))
            .map_err(|e| LookupError::new(pid, query, e))
    }
}

impl ProcessInfoSource for ProcfsSource {
    fn is_live_process(&self, pid: u32) -> Result<bool, LookupError> {
        match ProcfsProcess::new_with_root(self.pid_dir(pid)) {
            Ok(_) => {}
            Err(ProcError::NotFound(_)) => return Ok(false),
            Err(e) => return Err(LookupError::new(pid, Query::Liveness, e)),
        }

        // lstat, not readlink: the link target is unreadable for other users' processes.
        let exe = self.pid_dir(pid).join("exe");
        match std::fs::symlink_metadata(&exe) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!(pid, "no exe link");
                Ok(false)
            }
            Err(e) => Err(LookupError::new(pid, Query::Liveness, e)),
        }
    }

    fn list_children(&self, pid: u32) -> Result<Vec<u32>, LookupError> {
        let process = self.open(pid, Query::Children)?;
        process
            .task_main_thread()
            .and_then(|task| task.children())
            .map_err(|e| LookupError::new(pid, Query::Children, e))
    }

    fn read_invocation_name(&self, pid: u32) -> Result<Option<String>, LookupError> {
        // Raw bytes: argv[0] may be empty or not valid UTF-8, and neither is a failed lookup.
        let raw = std::fs::read(self.pid_dir(pid).join("cmdline"))
            .map_err(|e| LookupError::new(pid, Query::InvocationName, e))?;

        Ok(raw
            .split(|&b| b == 0)
            .next()
            .map(String::from_utf8_lossy)
            .and_then(|arg0| invocation_name(&arg0)))
    }
}

/// First whitespace-delimited word of `arg0`, capped at `MAX_NAME_LEN` bytes.
fn invocation_name(arg0: &str) -> Option<String> {
    let word = arg0.split_whitespace().next()?;
    let mut end = word.len().min(MAX_NAME_LEN);
    while !word.is_char_boundary(end) {
        end -= 1;
    }
    Some(word[..end].to_string())
}
