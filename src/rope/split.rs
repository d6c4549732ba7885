use std::rc::Rc;

use tracing::trace;

use crate::error::{RopeError, RopeResult};

use super::node::{byte_offset, size_of, Node};
use super::Rope;

/// A branch passed on the way down to the cut.
enum Step {
    /// The cut is in the left child; the right child is detached whole.
    Left { right: Option<Rc<Node>> },
    /// The cut is in the right child; the left child is kept as it is.
    Right { left: Option<Rc<Node>> },
}

/// Cuts `root` after char `position` and returns the rebuilt left part.
///
/// Everything to the right of the cut goes onto `detached`, the fragment
/// nearest the cut first, so folding them left to right restores document
/// order. The descent records its path and rebuilds bottom up, so deep trees
/// do not recurse.
///
/// `position` must be less than `root.len()`; `Rope::split` checks this.
fn split_node(root: &Rc<Node>, mut position: usize, detached: &mut Vec<Rc<Node>>) -> Rc<Node> {
    let mut path = Vec::new();
    let mut node = root;

    let mut kept = loop {
        match node.as_ref() {
            Node::Leaf { text, chars } => {
                if position + 1 >= *chars {
                    break Rc::clone(node);
                }

                let cut = byte_offset(text, position + 1);
                detached.push(Node::new_leaf(&text[cut..]));
                break Node::new_leaf(&text[..cut]);
            }
            Node::Branch { left, right, .. } => {
                let left_len = size_of(left);

                match left {
                    Some(child) if left_len > position + 1 => {
                        path.push(Step::Left {
                            right: right.clone(),
                        });
                        node = child;
                    }
                    _ if left_len == position + 1 => {
                        detached.extend(right.iter().cloned());
                        break Node::new_branch(left.clone(), None);
                    }
                    _ => {
                        let Some(child) = right else {
                            unreachable!("position {} is past the end of the branch", position);
                        };
                        path.push(Step::Right { left: left.clone() });
                        position -= left_len;
                        node = child;
                    }
                }
            }
        }
    };

    while let Some(step) = path.pop() {
        kept = match step {
            Step::Left { right } => {
                detached.extend(right);
                Node::new_branch(Some(kept), None)
            }
            Step::Right { left } => Node::new_branch(left, Some(kept)),
        };
    }

    kept
}

impl Rope {
    /// Splits the rope after char `position`.
    ///
    /// The left rope holds chars `0..=position` and the right rope holds the
    /// rest, which is empty when `position` is the last char. Both ropes share
    /// every subtree the cut did not pass through with `self`.
    pub fn split(&self, position: usize) -> RopeResult<(Rope, Rope)> {
        if position >= self.len() {
            return Err(RopeError::InvalidIndex {
                index: position,
                len: self.len(),
            });
        }

        let mut detached = Vec::new();
        let left = split_node(&self.root, position, &mut detached);
        let fragments = detached.len();

        let mut pieces = detached.into_iter().map(Rope::from_node);
        let right = match pieces.next() {
            Some(first) => pieces.fold(first, |acc, piece| acc.concat(&piece)),
            None => Rope::new(),
        };

        trace!(position, fragments, left = left.len(), right = right.len(), "split rope");
        Ok((Rope::from_node(left), right))
    }

    /// Splits around the inclusive range `start..=end`, returning the part
    /// before it (absent when `start` is 0), the range itself, and the rest.
    ///
    /// A `start` after `end` is reported as an invalid index on `start`.
    pub(crate) fn split_range(
        &self,
        start: usize,
        end: usize,
    ) -> RopeResult<(Option<Rope>, Rope, Rope)> {
        if start > end {
            return Err(RopeError::InvalidIndex {
                index: start,
                len: self.len(),
            });
        }
        if end >= self.len() {
            return Err(RopeError::InvalidIndex {
                index: end,
                len: self.len(),
            });
        }

        let (before, rest) = match start {
            0 => (None, self.clone()),
            _ => {
                let (before, rest) = self.split(start - 1)?;
                (Some(before), rest)
            }
        };

        let (middle, after) = rest.split(end - start)?;
        Ok((before, middle, after))
    }
}
