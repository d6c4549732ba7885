use std::str::Chars;

use super::node::Node;
use super::Rope;

/// Yields the text of each leaf, left to right.
///
/// Keeps an explicit stack for the depth first walk, so deep unbalanced ropes
/// do not recurse.
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Node::Leaf { text, .. } => break Some(text.as_str()),
                Node::Branch { left, right, .. } => {
                    if let Some(right) = right {
                        self.stack.push(right);
                    }
                    if let Some(left) = left {
                        self.stack.push(left);
                    }
                }
            }
        }
    }
}

/// Yields every char of the rope in document order.
pub struct RopeChars<'a> {
    leaves: Leaves<'a>,
    current: Chars<'a>,
}

impl Iterator for RopeChars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.current.next() {
                return Some(c);
            }
            self.current = self.leaves.next()?.chars();
        }
    }
}

impl Rope {
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![self.root.as_ref()],
        }
    }

    pub fn chars(&self) -> RopeChars<'_> {
        RopeChars {
            leaves: self.leaves(),
            current: "".chars(),
        }
    }
}
