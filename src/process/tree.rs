//Represents a node in the process tree hierarchy.
//Children hang off `first_child` and are chained through `next_sibling`,
//so each node owns its eldest child's subtree and every younger sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessNode {
    pub pid: u32,
    pub name: Option<String>,
    pub first_child: Option<Box<ProcessNode>>,
    pub next_sibling: Option<Box<ProcessNode>>,
}

impl ProcessNode {
    pub fn new(pid: u32, name: Option<String>) -> Self {
        ProcessNode {
            pid,
            name,
            first_child: None,
            next_sibling: None,
        }
    }

    /// Links `children` under this node, keeping their order.
    pub fn with_children(mut self, children: Vec<ProcessNode>) -> Self {
        self.first_child = link_siblings(children);
        self
    }

    /// Direct children, eldest first.
    pub fn children(&self) -> Siblings<'_> {
        Siblings {
            next: self.first_child.as_deref(),
        }
    }

    /// Number of nodes in the subtree rooted here (siblings excluded).
    pub fn size(&self) -> usize {
        1 + self.children().map(ProcessNode::size).sum::<usize>()
    }
}

//Chains nodes into a sibling list and returns its head.
pub fn link_siblings(nodes: Vec<ProcessNode>) -> Option<Box<ProcessNode>> {
    let mut head = None;
    for mut node in nodes.into_iter().rev() {
        node.next_sibling = head;
        head = Some(Box::new(node));
    }
    head
}

impl Drop for ProcessNode {
    //Unlink the sibling chain in a loop so wide levels don't recurse in drop.
    fn drop(&mut self) {
        let mut next = self.next_sibling.take();
        while let Some(mut node) = next {
            next = node.next_sibling.take();
        }
    }
}

pub struct Siblings<'a> {
    next: Option<&'a ProcessNode>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a ProcessNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_follow_insertion_order() {
        let root = ProcessNode::new(1, None).with_children(vec![
            ProcessNode::new(9, None),
            ProcessNode::new(3, None),
            ProcessNode::new(5, None),
        ]);
        let pids: Vec<u32> = root.children().map(|c| c.pid).collect();
        assert_eq!(pids, vec![9, 3, 5]);
        assert!(root.next_sibling.is_none());
    }

    #[test]
    fn no_children_means_no_first_child() {
        let root = ProcessNode::new(1, None).with_children(Vec::new());
        assert!(root.first_child.is_none());
        assert_eq!(root.size(), 1);
    }

    #[test]
    fn size_counts_whole_subtree() {
        let root = ProcessNode::new(1, None).with_children(vec![
            ProcessNode::new(2, None),
            ProcessNode::new(3, None).with_children(vec![ProcessNode::new(4, None)]),
        ]);
        assert_eq!(root.size(), 4);
    }

    #[test]
    fn dropping_a_wide_level_does_not_overflow() {
        let children = (2..200_000).map(|pid| ProcessNode::new(pid, None)).collect();
        let root = ProcessNode::new(1, None).with_children(children);
        assert_eq!(root.children().count(), 199_998);
        drop(root);
    }
}
