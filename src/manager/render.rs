use std::io::{self, Write};

use crate::process::tree::ProcessNode;

/// Indentation per depth level.
const INDENT: &str = "  ";

/// Preorder lines of `root`, showing descendants down to `max_depth` levels
/// below it. `max_depth == 0` shows every level.
pub fn render(root: &ProcessNode, max_depth: u32) -> Lines<'_> {
    Lines {
        stack: vec![(root, 0)],
        max_depth,
    }
}

/// Writes every line of `render(root, max_depth)` to `out`.
pub fn write_tree<W: Write>(root: &ProcessNode, max_depth: u32, mut out: W) -> io::Result<()> {
    for line in render(root, max_depth) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

pub fn format_node(node: &ProcessNode, depth: u32) -> String {
    let indent = INDENT.repeat(depth as usize);
    match &node.name {
        Some(name) => format!("{indent}{}: {name}", node.pid),
        None => format!("{indent}{}", node.pid),
    }
}

/// Lazy preorder walk. Each pending node carries its own depth, so separate
/// walks over the same tree never share state.
pub struct Lines<'a> {
    stack: Vec<(&'a ProcessNode, u32)>,
    max_depth: u32,
}

impl Lines<'_> {
    fn descend(&self, depth: u32) -> bool {
        self.max_depth == 0 || depth < self.max_depth
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (node, depth) = self.stack.pop()?;

        // Sibling goes on first so the child subtree is emitted before it.
        if let Some(sibling) = node.next_sibling.as_deref() {
            self.stack.push((sibling, depth));
        }
        if let Some(child) = node.first_child.as_deref().filter(|_| self.descend(depth)) {
            self.stack.push((child, depth + 1));
        }

        Some(format_node(node, depth))
    }
}
