//! An immutable rope for text buffers.
//!
//! A [`Rope`] is a binary tree of text fragments. Edits never copy the whole
//! document: they split the tree at the affected boundaries, swap out the
//! pieces that change, and concatenate the rest back together. Unchanged
//! subtrees are shared by reference between the old and the new rope.
//!
//! ```
//! use text_rope::Rope;
//!
//! let rope = Rope::from("Hello World");
//! let rope = rope.insert(6, "Big ").unwrap();
//! assert_eq!(rope.to_string(), "Hello Big World");
//!
//! let rope = rope.delete_range(6, 9).unwrap();
//! assert_eq!(rope.to_string(), "Hello World");
//! ```

pub mod error;
pub mod rope;

pub use crate::error::{RopeError, RopeResult};
pub use crate::rope::{DumpKind, DumpLine, Leaves, Rope, RopeChars, RopeDump};
