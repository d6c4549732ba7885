use std::rc::Rc;

/// A node in the rope tree. Nodes are never mutated once built, so any
/// subtree can be shared between ropes.
#[derive(Debug)]
pub(crate) enum Node {
    Leaf {
        text: String,
        chars: usize,
    },
    Branch {
        left: Option<Rc<Node>>,
        right: Option<Rc<Node>>,
        size: usize,
        height: usize,
    },
}

impl Node {
    pub(crate) fn new_leaf(text: &str) -> Rc<Self> {
        Rc::new(Node::Leaf {
            chars: text.chars().count(),
            text: text.to_string(),
        })
    }

    pub(crate) fn from_string(text: String) -> Rc<Self> {
        Rc::new(Node::Leaf {
            chars: text.chars().count(),
            text,
        })
    }

    pub(crate) fn new_branch(left: Option<Rc<Self>>, right: Option<Rc<Self>>) -> Rc<Self> {
        Rc::new(Node::Branch {
            size: size_of(&left) + size_of(&right),
            height: 1 + height_of(&left).max(height_of(&right)),
            left,
            right,
        })
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Node::Leaf { chars, .. } => *chars,
            Node::Branch { size, .. } => *size,
        }
    }

    pub(crate) fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Branch { height, .. } => *height,
        }
    }

    /// Descends through cached sizes to the char at `index`. Iterative, so
    /// the depth of the tree does not matter.
    pub(crate) fn char_at(&self, mut index: usize) -> Option<char> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { text, .. } => return text.chars().nth(index),
                Node::Branch { left, right, .. } => {
                    let left_len = size_of(left);
                    if index < left_len {
                        node = left.as_deref()?;
                    } else {
                        index -= left_len;
                        node = right.as_deref()?;
                    }
                }
            }
        }
    }
}

// The derived drop glue recurses once per level, which overflows the stack on
// a long left-skewed chain. Unlink uniquely owned children onto a heap stack
// instead; shared children only lose a reference.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Node::Branch { left, right, .. } = self {
            stack.extend(left.take());
            stack.extend(right.take());
        }

        while let Some(child) = stack.pop() {
            if let Some(mut node) = Rc::into_inner(child) {
                if let Node::Branch { left, right, .. } = &mut node {
                    stack.extend(left.take());
                    stack.extend(right.take());
                }
            }
        }
    }
}

/// Size of an optional child; an absent child contributes nothing.
pub(crate) fn size_of(node: &Option<Rc<Node>>) -> usize {
    node.as_ref().map_or(0, |n| n.len())
}

/// Height of an optional child; an absent child has height 0.
pub(crate) fn height_of(node: &Option<Rc<Node>>) -> usize {
    node.as_ref().map_or(0, |n| n.height())
}

/// Byte offset of the `index`th char in `text`, or `text.len()` past the end.
pub(crate) fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices().nth(index).map_or(text.len(), |(offset, _)| offset)
}
