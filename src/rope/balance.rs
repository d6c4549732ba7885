use std::rc::Rc;

use tracing::debug;

use super::node::{height_of, Node};
use super::Rope;

fn node_is_balanced(root: &Node) -> bool {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if let Node::Branch { left, right, .. } = node {
            if height_of(left).abs_diff(height_of(right)) >= 2 {
                return false;
            }
            stack.extend(left.as_deref());
            stack.extend(right.as_deref());
        }
    }

    true
}

/// Collects the non-empty leaves under `root` in document order.
fn collect_leaves(root: &Rc<Node>) -> Vec<Rc<Node>> {
    let mut leaves = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match node.as_ref() {
            Node::Leaf { chars, .. } => {
                if *chars > 0 {
                    leaves.push(Rc::clone(node));
                }
            }
            Node::Branch { left, right, .. } => {
                stack.extend(right.as_ref());
                stack.extend(left.as_ref());
            }
        }
    }

    leaves
}

/// Builds a minimum height tree over `leaves` by halving. Sibling subtrees
/// cover leaf counts that differ by at most one, so their heights do too.
fn build_balanced(leaves: &[Rc<Node>]) -> Rc<Node> {
    match leaves {
        [] => Node::new_leaf(""),
        [leaf] => Rc::clone(leaf),
        _ => {
            let (left, right) = leaves.split_at(leaves.len() / 2);
            Node::new_branch(Some(build_balanced(left)), Some(build_balanced(right)))
        }
    }
}

impl Rope {
    /// True when every branch has children whose heights differ by less than
    /// two, all the way down.
    pub fn is_balanced(&self) -> bool {
        node_is_balanced(&self.root)
    }

    /// Rebuilds the tree with minimum height over the same leaves.
    ///
    /// Leaves are reused, not copied. Empty leaves are dropped.
    pub fn rebalance(&self) -> Rope {
        let leaves = collect_leaves(&self.root);

        let root = build_balanced(&leaves);
        debug!(
            leaves = leaves.len(),
            old_height = self.height(),
            new_height = root.height(),
            "rebalanced rope"
        );

        Rope::from_node(root)
    }
}
