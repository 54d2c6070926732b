use tracing::{debug, warn};

use crate::error::{BuildError, LookupError};
use crate::process::ProcessInfoSource;
use crate::process::tree::ProcessNode;

/// A tree built from the live process table, plus every lookup that failed
/// along the way.
#[derive(Debug)]
pub struct BuildReport {
    pub tree: ProcessNode,
    pub failures: Vec<LookupError>,
}

impl BuildReport {
    /// True when some part of the tree could not be read.
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Walks the process table downward from a root pid.
///
/// Every listed child is re-validated before it is visited, since it may have
/// exited after the listing was taken. Failed lookups below the root never stop
/// the walk: the affected name is left empty or the affected child is skipped,
/// and the failure is recorded in the report.
pub struct TreeBuilder<S> {
    source: S,
}

impl<S: ProcessInfoSource> TreeBuilder<S> {
    pub fn new(source: S) -> Self {
        TreeBuilder { source }
    }

    pub fn build(&self, pid: u32) -> Result<BuildReport, BuildError> {
        match self.source.is_live_process(pid) {
            Ok(true) => {}
            Ok(false) => return Err(BuildError::RootNotLive(pid)),
            Err(e) => return Err(BuildError::RootLookup(e)),
        }

        let mut failures = Vec::new();
        let tree = self.build_node(pid, &mut failures);
        debug!(root = pid, nodes = tree.size(), failures = failures.len(), "process tree built");

        Ok(BuildReport { tree, failures })
    }

    //Recursive helper: builds `pid` (already validated) and everything below it
    fn build_node(&self, pid: u32, failures: &mut Vec<LookupError>) -> ProcessNode {
        let name = match self.source.read_invocation_name(pid) {
            Ok(name) => name,
            Err(e) => {
                record(failures, e);
                None
            }
        };

        let children = self
            .live_children(pid, failures)
            .into_iter()
            .map(|child| self.build_node(child, failures))
            .collect();

        ProcessNode::new(pid, name).with_children(children)
    }

    //Listed children that are still live, in listing order
    fn live_children(&self, pid: u32, failures: &mut Vec<LookupError>) -> Vec<u32> {
        let listed = match self.source.list_children(pid) {
            Ok(listed) => listed,
            Err(e) => {
                record(failures, e);
                return Vec::new();
            }
        };

        let mut live = Vec::with_capacity(listed.len());
        for child in listed {
            match self.source.is_live_process(child) {
                Ok(true) => live.push(child),
                Ok(false) => debug!(parent = pid, pid = child, "child exited before validation"),
                Err(e) => record(failures, e),
            }
        }
        live
    }
}

fn record(failures: &mut Vec<LookupError>, err: LookupError) {
    warn!(pid = err.pid, query = %err.query, "{}", err);
    failures.push(err);
}
