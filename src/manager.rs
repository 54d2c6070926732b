use crate::error::Outcome;
use crate::process::ProcessInfoSource;

pub mod builder;
pub mod render;

use builder::TreeBuilder;


//Manager: builds the tree for one root pid and prints it
pub struct Manager<S> {
    builder: TreeBuilder<S>,
    pub max_depth: u32,
}

impl<S: ProcessInfoSource> Manager<S> {
    pub fn new(source: S, max_depth: u32) -> Self {
        Manager {
            builder: TreeBuilder::new(source),
            max_depth,
        }
    }

    /// Builds the tree under `root_pid`, writes it to `out`, and reports how
    /// complete it was. Nothing is written when the root is not live.
    pub fn print_tree<W: std::io::Write>(&self, root_pid: u32, out: W) -> std::io::Result<Outcome> {
        let report = match self.builder.build(root_pid) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("{}", e);
                return Ok(Outcome::RootInvalid);
            }
        };

        render::write_tree(&report.tree, self.max_depth, out)?;

        if report.is_partial() {
            Ok(Outcome::Partial)
        } else {
            Ok(Outcome::Complete)
        }
    }
}
