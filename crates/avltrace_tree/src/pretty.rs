//! Text rendering of tree shapes.
//!
//! `shape` gives a compact one-line form (`{20:[10,30]}`) for assertions and
//! logs. `render` gives a multi-line dump decorated with each node's height
//! and balance factor.

use std::fmt::{Display, Write};

use crate::node::{Link, Node};
use crate::tree::AvlTree;

/// Text shown for an empty tree.
pub const EMPTY_TREE: &str = "Tree is empty. Insert a value to begin!";

impl<K: Display> AvlTree<K> {
    /// Returns the compact shape, e.g. `{20:[10,30]}` or `{20:[10,_]}`.
    #[must_use]
    pub fn shape(&self) -> String {
        match self.root() {
            None => "{}".to_string(),
            Some(root) => format!("{{{}}}", shape_of(root)),
        }
    }
}

impl<K: Display + PartialEq> AvlTree<K> {
    /// Renders one line per node with `H:` and `BF:` decorations.
    ///
    /// The node holding `focus`, if any, is marked with `<`. Nodes whose
    /// balance factor is outside `[-1, 1]` are marked with `!`.
    #[must_use]
    pub fn render(&self, focus: Option<&K>) -> String {
        let Some(root) = self.root() else {
            return EMPTY_TREE.to_string();
        };
        let mut out = String::new();
        write_node(&mut out, root, focus);
        write_children(&mut out, root, focus, "");
        out
    }
}

fn shape_of<K: Display>(node: &Node<K>) -> String {
    if node.is_leaf() {
        return node.key.to_string();
    }
    format!(
        "{}:[{},{}]",
        node.key,
        link_shape(&node.left),
        link_shape(&node.right)
    )
}

fn link_shape<K: Display>(link: &Link<K>) -> String {
    link.as_deref().map_or_else(|| "_".to_string(), shape_of)
}

fn write_node<K: Display + PartialEq>(out: &mut String, node: &Node<K>, focus: Option<&K>) {
    let balance = node.balance_factor();
    let _ = write!(out, "{} H:{} BF:{balance}", node.key, node.height);
    if balance.abs() > 1 {
        out.push_str(" !");
    }
    if focus.is_some_and(|k| *k == node.key) {
        out.push_str(" <");
    }
}

fn write_children<K: Display + PartialEq>(
    out: &mut String,
    node: &Node<K>,
    focus: Option<&K>,
    tab: &str,
) {
    if node.is_leaf() {
        return;
    }

    let children = [("L", &node.left), ("R", &node.right)];
    for (i, (side, child)) in children.into_iter().enumerate() {
        let is_last = i == 1;
        let branch = if is_last { "└─" } else { "├─" };
        let _ = write!(out, "\n{tab}{branch} {side} ");

        match child.as_deref() {
            None => out.push('∅'),
            Some(child) => {
                write_node(out, child, focus);
                let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
                write_children(out, child, focus, &child_tab);
            }
        }
    }
}
