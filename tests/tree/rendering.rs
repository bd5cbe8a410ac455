//! Integration tests for tree rendering
//!
//! Tests the compact shape notation and the decorated multi-line dump.

use avltrace_tree::{AvlTree, EMPTY_TREE};

fn build(keys: &[i32]) -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for &key in keys {
        let _ = tree.insert(key);
    }
    tree
}

#[test]
fn empty_tree_text() {
    let tree: AvlTree<i32> = AvlTree::new();
    assert_eq!(tree.shape(), "{}");
    assert_eq!(tree.render(None), EMPTY_TREE);
}

#[test]
fn shape_marks_missing_children() {
    assert_eq!(build(&[20, 30]).shape(), "{20:[_,30]}");
    assert_eq!(
        build(&[20, 10, 30, 5, 15, 25, 35]).shape(),
        "{20:[10:[5,15],30:[25,35]]}"
    );
}

#[test]
fn render_has_one_line_per_slot() {
    let tree = build(&[20, 10, 30, 5, 15, 25, 35]);
    let text = tree.render(None);
    assert_eq!(text.lines().count(), 7);
    assert!(text.starts_with("20 H:3 BF:0\n├─ L 10 H:2 BF:0"));
    assert!(!text.contains('<'));
}

#[test]
fn render_highlights_only_the_focus() {
    let tree = build(&[20, 10, 30]);
    let text = tree.render(Some(&10));
    let marked: Vec<_> = text.lines().filter(|l| l.ends_with(" <")).collect();
    assert_eq!(marked, vec!["├─ L 10 H:1 BF:0 <"]);

    // A key that is not in the tree highlights nothing.
    assert!(!tree.render(Some(&99)).contains('<'));
}
