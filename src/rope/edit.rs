use std::rc::Rc;

use tracing::trace;

use crate::error::{RopeError, RopeResult};

use super::node::Node;
use super::Rope;

impl Rope {
    /// Joins `self` and `other` under a new branch. O(1); never rebalances.
    pub fn concat(&self, other: &Rope) -> Rope {
        Rope::from_node(Node::new_branch(
            Some(Rc::clone(&self.root)),
            Some(Rc::clone(&other.root)),
        ))
    }

    /// Folds `concat` left to right over `ropes`.
    ///
    /// The result is left-skewed; call [`Rope::rebalance`] if it will be
    /// edited heavily afterwards.
    pub fn concat_all<I>(ropes: I) -> RopeResult<Rope>
    where
        I: IntoIterator<Item = Rope>,
    {
        let mut ropes = ropes.into_iter();
        let first = ropes.next().ok_or(RopeError::EmptyConcatenationInput)?;
        Ok(ropes.fold(first, |acc, rope| acc.concat(&rope)))
    }

    /// Inserts `text` so that it starts at char `location`.
    ///
    /// `location` may equal `len()`, which appends.
    pub fn insert(&self, location: usize, text: &str) -> RopeResult<Rope> {
        if location > self.len() {
            return Err(RopeError::InvalidIndex {
                index: location,
                len: self.len(),
            });
        }

        trace!(location, chars = text.chars().count(), "insert");

        if location == 0 {
            return Ok(self.prepend(text));
        }

        let (left, right) = self.split(location - 1)?;
        let joined = left.concat(&Rope::leaf(text));

        if right.is_empty() {
            Ok(joined)
        } else {
            Ok(joined.concat(&right))
        }
    }

    /// Same as inserting at `len()`, without walking the tree.
    pub fn append(&self, text: &str) -> Rope {
        self.concat(&Rope::leaf(text))
    }

    /// Same as inserting at 0.
    pub fn prepend(&self, text: &str) -> Rope {
        Rope::leaf(text).concat(self)
    }

    /// Removes the inclusive char range `start..=end`.
    pub fn delete_range(&self, start: usize, end: usize) -> RopeResult<Rope> {
        let (before, _, after) = self.split_range(start, end)?;
        trace!(start, end, "delete range");

        Ok(match before {
            Some(before) if after.is_empty() => before,
            Some(before) => before.concat(&after),
            None => after,
        })
    }

    /// The inclusive char range `start..=end` as its own rope.
    pub fn slice(&self, start: usize, end: usize) -> RopeResult<Rope> {
        let (_, middle, _) = self.split_range(start, end)?;
        Ok(middle)
    }
}
