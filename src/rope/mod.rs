mod balance;
mod dump;
mod edit;
mod iter;
mod node;
mod split;
#[cfg(test)]
mod tests;

use std::fmt;
use std::rc::Rc;

use crate::error::{RopeError, RopeResult};

use self::node::Node;

pub use self::dump::{DumpKind, DumpLine, RopeDump};
pub use self::iter::{Leaves, RopeChars};

/// An immutable text rope.
///
/// Cloning is O(1): the clone shares the whole tree. Every edit returns a new
/// rope and leaves `self` untouched; subtrees the edit did not reach are
/// shared between the two.
///
/// Lengths and indices count `char`s, not bytes.
#[derive(Clone)]
pub struct Rope {
    root: Rc<Node>,
}

impl Rope {
    /// An empty rope, a single leaf with no text.
    pub fn new() -> Self {
        Self::leaf("")
    }

    /// A rope made of one leaf holding `text`.
    pub fn leaf(text: &str) -> Self {
        Self {
            root: Node::new_leaf(text),
        }
    }

    fn from_node(root: Rc<Node>) -> Self {
        Self { root }
    }

    /// Number of chars in the rope. O(1).
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Height of the tree: 1 for a leaf, `1 + max(children)` for a branch.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The char at `index`, found by descending through cached sizes.
    pub fn char_at(&self, index: usize) -> RopeResult<char> {
        if index >= self.len() {
            return Err(RopeError::InvalidIndex {
                index,
                len: self.len(),
            });
        }

        self.root.char_at(index).ok_or(RopeError::InvalidIndex {
            index,
            len: self.len(),
        })
    }

    /// Number of leaves in the tree, empty ones included.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

impl Default for Rope {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Self::leaf(text)
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Self::from_node(Node::from_string(text))
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for leaf in self.leaves() {
            f.write_str(leaf)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rope")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("text", &self.to_string())
            .finish()
    }
}

// Ropes compare by content; two differently shaped trees holding the same
// text are equal.
impl PartialEq for Rope {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.root, &other.root)
            || (self.len() == other.len() && self.chars().eq(other.chars()))
    }
}

impl Eq for Rope {}

impl PartialEq<str> for Rope {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for Rope {
    fn eq(&self, other: &&str) -> bool {
        self.chars().eq(other.chars())
    }
}
