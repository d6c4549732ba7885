use std::fmt;

use super::node::Node;
use super::Rope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpKind {
    Branch,
    Leaf,
    /// A branch slot with no child.
    Absent,
}

/// One node of a [`RopeDump`], in depth first order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpLine<'a> {
    pub depth: usize,
    pub kind: DumpKind,
    pub size: usize,
    pub height: usize,
    pub text: Option<&'a str>,
}

/// Outline of a rope's tree shape, for tests and tooling.
#[derive(Debug, Clone)]
pub struct RopeDump<'a> {
    lines: Vec<DumpLine<'a>>,
}

impl<'a> RopeDump<'a> {
    pub fn lines(&self) -> &[DumpLine<'a>] {
        &self.lines
    }
}

fn walk<'a>(root: &'a Node) -> Vec<DumpLine<'a>> {
    let mut lines = Vec::new();
    let mut stack = vec![(Some(root), 0)];

    while let Some((node, depth)) = stack.pop() {
        let line = match node {
            None => DumpLine {
                depth,
                kind: DumpKind::Absent,
                size: 0,
                height: 0,
                text: None,
            },
            Some(Node::Leaf { text, chars }) => DumpLine {
                depth,
                kind: DumpKind::Leaf,
                size: *chars,
                height: 1,
                text: Some(text.as_str()),
            },
            Some(Node::Branch {
                left,
                right,
                size,
                height,
            }) => {
                stack.push((right.as_deref(), depth + 1));
                stack.push((left.as_deref(), depth + 1));
                DumpLine {
                    depth,
                    kind: DumpKind::Branch,
                    size: *size,
                    height: *height,
                    text: None,
                }
            }
        };
        lines.push(line);
    }

    lines
}

impl fmt::Display for DumpLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.depth * 2;
        match self.kind {
            DumpKind::Branch => {
                write!(f, "{:indent$}branch size={} height={}", "", self.size, self.height)
            }
            DumpKind::Leaf => {
                let text = self.text.unwrap_or_default();
                write!(f, "{:indent$}leaf size={} {:?}", "", self.size, text)
            }
            DumpKind::Absent => write!(f, "{:indent$}-", ""),
        }
    }
}

impl fmt::Display for RopeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Rope {
    pub fn dump(&self) -> RopeDump<'_> {
        RopeDump {
            lines: walk(&self.root),
        }
    }
}
