use std::rc::Rc;

use super::node::{height_of, size_of, Node};
use super::*;

/// Checks the cached size and height of every branch against its children.
fn assert_cached_metrics(node: &Node) {
    if let Node::Branch {
        left,
        right,
        size,
        height,
    } = node
    {
        assert_eq!(*size, size_of(left) + size_of(right));
        assert_eq!(*height, 1 + height_of(left).max(height_of(right)));
        if let Some(left) = left {
            assert_cached_metrics(left);
        }
        if let Some(right) = right {
            assert_cached_metrics(right);
        }
    }
}

fn hello_world() -> Rope {
    Rope::from("Hello ").concat(&Rope::from("World"))
}

#[test]
fn leaf_metrics() {
    let rope = Rope::from("héllo");
    assert_eq!(rope.len(), 5);
    assert_eq!(rope.height(), 1);
    assert!(rope.is_balanced());
    assert_eq!(rope.to_string(), "héllo");
}

#[test]
fn empty_rope() {
    let rope = Rope::new();
    assert!(rope.is_empty());
    assert_eq!(rope.height(), 1);
    assert_eq!(rope.to_string(), "");
    assert_eq!(rope, Rope::default());
}

#[test]
fn concat_sums_sizes() {
    let rope = hello_world();
    assert_eq!(rope.len(), 11);
    assert_eq!(rope.height(), 2);
    assert_eq!(rope.to_string(), "Hello World");
    assert_cached_metrics(&rope.root);
}

#[test]
fn concat_with_empty_leaf_is_identity() {
    let rope = hello_world();
    assert_eq!(Rope::from("").concat(&rope).to_string(), "Hello World");
    assert_eq!(rope.concat(&Rope::from("")).to_string(), "Hello World");
}

#[test]
fn concat_all_requires_input() {
    assert_eq!(
        Rope::concat_all(Vec::new()),
        Err(RopeError::EmptyConcatenationInput)
    );

    let rope = Rope::concat_all(["a", "b", "c"].map(Rope::from)).unwrap();
    assert_eq!(rope.to_string(), "abc");
    assert_eq!(rope.height(), 3);
}

#[test]
fn split_between_leaves() {
    let (left, right) = hello_world().split(4).unwrap();
    assert_eq!(left.to_string(), "Hello");
    assert_eq!(right.to_string(), " World");
    assert_cached_metrics(&left.root);
    assert_cached_metrics(&right.root);
}

#[test]
fn split_at_branch_boundary_detaches_right_child() {
    let rope = hello_world();
    let (left, right) = rope.split(5).unwrap();
    assert_eq!(left.to_string(), "Hello ");
    assert_eq!(right.to_string(), "World");

    // The detached child is shared, not copied.
    match rope.root.as_ref() {
        Node::Branch {
            right: Some(original),
            ..
        } => assert!(Rc::ptr_eq(original, &right.root)),
        _ => panic!("expected a branch"),
    }
}

#[test]
fn split_inside_right_subtree_keeps_left_size() {
    let rope = hello_world();
    let (left, right) = rope.split(7).unwrap();
    assert_eq!(left.to_string(), "Hello Wo");
    assert_eq!(left.len(), 8);
    assert_eq!(right.to_string(), "rld");
    assert_cached_metrics(&left.root);
}

#[test]
fn split_first_and_last_char() {
    let rope = hello_world();

    let (left, right) = rope.split(0).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(right.to_string(), "ello World");

    let (left, right) = rope.split(10).unwrap();
    assert_eq!(left.to_string(), "Hello World");
    assert!(right.is_empty());
}

#[test]
fn split_out_of_range() {
    assert_eq!(
        hello_world().split(11),
        Err(RopeError::InvalidIndex { index: 11, len: 11 })
    );
    assert!(Rope::new().split(0).is_err());
}

#[test]
fn split_respects_char_boundaries() {
    let rope = Rope::from("añb€c");
    let (left, right) = rope.split(1).unwrap();
    assert_eq!(left.to_string(), "añ");
    assert_eq!(right.to_string(), "b€c");
}

#[test]
fn split_collects_fragments_in_order() {
    let rope = Rope::concat_all(["ab", "cd", "ef", "gh"].map(Rope::from)).unwrap();
    let (left, right) = rope.split(2).unwrap();
    assert_eq!(left.to_string(), "abc");
    assert_eq!(right.to_string(), "defgh");
    assert_cached_metrics(&right.root);
}

#[test]
fn insert_in_middle() {
    let rope = Rope::from("Hello World").insert(6, "Big ").unwrap();
    assert_eq!(rope.to_string(), "Hello Big World");
    assert_cached_metrics(&rope.root);
}

#[test]
fn insert_at_start_and_end() {
    let rope = hello_world();
    assert_eq!(rope.insert(0, "X").unwrap().to_string(), "XHello World");
    assert_eq!(rope.insert(11, "!").unwrap().to_string(), "Hello World!");
    assert_eq!(Rope::new().insert(0, "abc").unwrap().to_string(), "abc");
}

#[test]
fn insert_out_of_range_leaves_rope_unchanged() {
    let rope = hello_world();
    assert_eq!(
        rope.insert(12, "x"),
        Err(RopeError::InvalidIndex { index: 12, len: 11 })
    );
    assert_eq!(rope.to_string(), "Hello World");
}

#[test]
fn insert_shares_untouched_subtrees() {
    let rope = hello_world();
    let edited = rope.insert(2, "--").unwrap();
    assert_eq!(edited.to_string(), "He--llo World");
    assert_eq!(rope.to_string(), "Hello World");

    let world = match rope.root.as_ref() {
        Node::Branch { right: Some(right), .. } => Rc::clone(right),
        _ => panic!("expected a branch"),
    };
    // Held by `rope`, by `edited` and by `world` itself.
    assert!(Rc::strong_count(&world) >= 3);
}

#[test]
fn delete_inner_range() {
    let rope = Rope::from("Hello Big World").delete_range(6, 9).unwrap();
    assert_eq!(rope.to_string(), "Hello World");
}

#[test]
fn delete_prefix_suffix_and_everything() {
    let rope = hello_world();
    assert_eq!(rope.delete_range(0, 5).unwrap().to_string(), "World");
    assert_eq!(rope.delete_range(5, 10).unwrap().to_string(), "Hello");
    assert!(rope.delete_range(0, 10).unwrap().is_empty());
    assert_eq!(rope.delete_range(3, 3).unwrap().to_string(), "Helo World");
}

#[test]
fn delete_rejects_bad_ranges() {
    let rope = hello_world();
    assert_eq!(
        rope.delete_range(4, 2),
        Err(RopeError::InvalidIndex { index: 4, len: 11 })
    );
    assert_eq!(
        rope.delete_range(2, 11),
        Err(RopeError::InvalidIndex { index: 11, len: 11 })
    );
}

#[test]
fn slice_keeps_middle() {
    let rope = hello_world();
    assert_eq!(rope.slice(3, 7).unwrap().to_string(), "lo Wo");
    assert_eq!(rope.slice(0, 10).unwrap(), rope);
}

#[test]
fn append_and_prepend() {
    let rope = Rope::from("b").append("c").prepend("a");
    assert_eq!(rope.to_string(), "abc");
}

#[test]
fn char_at_descends_by_size() {
    let rope = hello_world();
    assert_eq!(rope.char_at(0), Ok('H'));
    assert_eq!(rope.char_at(6), Ok('W'));
    assert_eq!(rope.char_at(10), Ok('d'));
    assert!(rope.char_at(11).is_err());
}

#[test]
fn leaves_and_chars_follow_document_order() {
    let rope = hello_world().insert(3, "-").unwrap();
    let text: String = rope.leaves().collect();
    assert_eq!(text, "Hel-lo World");
    assert_eq!(rope.chars().collect::<String>(), "Hel-lo World");
    assert_eq!(rope.leaf_count(), rope.leaves().count());
}

#[test]
fn equality_ignores_shape() {
    let flat = Rope::from("Hello World");
    assert_eq!(hello_world(), flat);
    assert_eq!(hello_world(), "Hello World");
    assert_ne!(hello_world(), Rope::from("Hello"));
}

#[test]
fn appended_rope_is_unbalanced_until_rebalanced() {
    let mut rope = Rope::new();
    for c in "abcdefghij".chars() {
        rope = rope.insert(rope.len(), &c.to_string()).unwrap();
    }
    assert!(!rope.is_balanced());

    let balanced = rope.rebalance();
    assert!(balanced.is_balanced());
    assert_eq!(balanced.to_string(), "abcdefghij");
    assert_eq!(balanced.leaf_count(), 10);
    assert_eq!(balanced.height(), 5);
    assert_cached_metrics(&balanced.root);
}

#[test]
fn rebalance_drops_empty_leaves() {
    let rope = Rope::concat_all(["", "a", "", "b", ""].map(Rope::from)).unwrap();
    let balanced = rope.rebalance();
    assert_eq!(balanced.leaf_count(), 2);
    assert_eq!(balanced.to_string(), "ab");

    let empty = Rope::from("").concat(&Rope::from("")).rebalance();
    assert!(empty.is_empty());
    assert_eq!(empty.height(), 1);
}

#[test]
fn balance_check_sees_deep_imbalance() {
    // Root children differ in height by one, but the left child is skewed.
    let skewed = Rope::concat_all(["a", "b", "c", "d"].map(Rope::from)).unwrap();
    let even = Rope::concat_all(["e", "f", "g", "h"].map(Rope::from)).unwrap().rebalance();
    let rope = skewed.concat(&even);
    assert_eq!(skewed.height(), 4);
    assert_eq!(even.height(), 3);
    assert!(even.is_balanced());
    assert!(!skewed.is_balanced());
    assert!(!rope.is_balanced());
}

#[test]
fn split_marks_absent_children_in_dump() {
    let (left, _) = hello_world().split(5).unwrap();
    let kinds: Vec<_> = left.dump().lines().iter().map(|line| line.kind).collect();
    assert_eq!(kinds, vec![DumpKind::Branch, DumpKind::Leaf, DumpKind::Absent]);

    let rendered = left.dump().to_string();
    assert_eq!(rendered, "branch size=6 height=2\n  leaf size=6 \"Hello \"\n  -\n");
}

fn appended_chain(chars: usize) -> Rope {
    let mut rope = Rope::new();
    for _ in 0..chars {
        rope = rope.append("x");
    }
    rope
}

#[test]
fn deep_chain_queries_do_not_recurse() {
    let rope = appended_chain(100_000);
    assert_eq!(rope.height(), 100_001);
    assert!(!rope.is_balanced());
    assert_eq!(rope.to_string().len(), 100_000);
    assert_eq!(rope.char_at(0), Ok('x'));
    assert_eq!(rope.leaf_count(), 100_001);
    assert_eq!(rope.dump().lines().len(), 200_001);
}

#[test]
fn deep_chain_edits_near_the_start() {
    let rope = appended_chain(100_000);

    let (left, right) = rope.split(1).unwrap();
    assert_eq!(left.len(), 2);
    assert_eq!(right.len(), 99_998);

    let edited = rope.insert(1, "y").unwrap().delete_range(3, 99_000).unwrap();
    assert_eq!(edited.to_string(), format!("xyx{}", "x".repeat(1_000)));
}

#[test]
fn deep_chain_rebalances_and_drops() {
    let rope = appended_chain(100_000);
    let balanced = rope.rebalance();
    assert!(balanced.is_balanced());
    assert_eq!(balanced.height(), 18);
    assert_eq!(balanced.len(), 100_000);

    // Leaves are shared between the two, so each drop must only unlink its
    // own branches.
    drop(rope);
    assert_eq!(balanced.chars().filter(|&c| c == 'x').count(), 100_000);
    drop(balanced);
}

#[test]
fn dropping_a_clone_keeps_shared_subtrees() {
    let rope = appended_chain(1_000);
    let copy = rope.clone();
    let extended = rope.append("!");
    drop(rope);
    drop(extended);
    assert_eq!(copy.len(), 1_000);
    assert_eq!(copy.to_string(), "x".repeat(1_000));
}
